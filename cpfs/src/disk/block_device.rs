use crate::{CpfsErrorConvertible, BLOCK_SIZE};

/// Implementors provide block addressed writes to a physical disk, an image file or memory.
/// The implementor owns the handle exclusively for as long as it lives.
pub trait BlockDevice<E: CpfsErrorConvertible> {
    /// Write one whole block at `block_index * BLOCK_SIZE`. Writing fewer bytes than the block holds is an error.
    fn write_block(&mut self, block_index: u64, block: &[u8; BLOCK_SIZE]) -> Result<(), E>;

    /// Push any buffered writes to stable storage.
    fn flush(&mut self) -> Result<(), E> {
        return Ok(());
    }
}

use crate::{
    validate_block_count, BlockDevice, ByteSerializable, CpfsError, CpfsErrorConvertible,
    DirectoryEntry, JournalEntry, Superblock, BLOCK_SIZE, SUPERBLOCK_BLOCK,
};
use log::{debug, error, info};

/// What a successful quick format put on the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    superblock: Superblock,
    root: DirectoryEntry,
    blocks_written: u64,
}

impl FormatReport {
    pub fn superblock(&self) -> &Superblock {
        return &self.superblock;
    }

    pub fn root(&self) -> &DirectoryEntry {
        return &self.root;
    }

    pub fn blocks_written(&self) -> u64 {
        return self.blocks_written;
    }
}

/// Lays down the CPFS metadata on a device it borrows exclusively for the duration of the format.
pub struct Formatter<'a, E: CpfsErrorConvertible> {
    device: &'a mut dyn BlockDevice<E>,
    blocks_written: u64,
}

impl<'a, E: CpfsErrorConvertible> Formatter<'a, E> {
    pub fn new(device: &'a mut dyn BlockDevice<E>) -> Self {
        return Self {
            device,
            blocks_written: 0,
        };
    }

    /// Write the superblock, the zeroed journal and the root directory entry, in that order.
    /// The first failed write aborts the format and leaves the device partially formatted.
    /// Only blocks 0 through 65 are touched.
    pub fn quick_format(mut self, total_blocks: u32) -> Result<FormatReport, CpfsError<E>> {
        validate_block_count(total_blocks)?;

        let superblock = Superblock::new(total_blocks);
        self.write_block(SUPERBLOCK_BLOCK, &superblock.to_block())?;
        info!("Superblock written successfully.");

        self.write_journal(&superblock)?;
        info!(
            "Journal initialized successfully ({} blocks).",
            superblock.journal_length()
        );

        let root = DirectoryEntry::root(superblock.first_free_block());
        self.write_block(root.block_num(), &root.to_block())?;
        info!("Root directory initialized successfully.");

        if let Err(e) = self.device.flush() {
            error!("Failed to flush the device: {:?}", e);
            return Err(e.into_cpfs_error());
        }

        return Ok(FormatReport {
            superblock,
            root,
            blocks_written: self.blocks_written,
        });
    }

    /// Reserve the journal region. Each block gets its own write of an empty entry.
    fn write_journal(&mut self, superblock: &Superblock) -> Result<(), CpfsError<E>> {
        let empty = JournalEntry::empty().to_block();

        for i in 0..superblock.journal_length() {
            self.write_block(superblock.journal_start() + i, &empty)?;
        }

        return Ok(());
    }

    fn write_block(
        &mut self,
        block_index: u32,
        block: &[u8; BLOCK_SIZE],
    ) -> Result<(), CpfsError<E>> {
        debug!("Writing block {}", block_index);

        if let Err(e) = self.device.write_block(block_index as u64, block) {
            error!("Failed to write block {}: {:?}", block_index, e);
            return Err(e.into_cpfs_error());
        }

        self.blocks_written += 1;

        return Ok(());
    }
}

use crate::CpfsError;

/// Every read and write happens in units of this many bytes, whatever the physical sector size.
pub const BLOCK_SIZE: usize = 4_096;

/// Little endian this reads "CPFS".
pub const CPFS_MAGIC: u32 = 0x5346_5043;

pub const SUPERBLOCK_BLOCK: u32 = 0;
pub const JOURNAL_START: u32 = SUPERBLOCK_BLOCK + 1;
pub const JOURNAL_LENGTH: u32 = 64;
pub const ROOT_DIRECTORY_BLOCK: u32 = JOURNAL_START + JOURNAL_LENGTH;

/// The smallest block count that can address every metadata block.
pub const MINIMUM_BLOCK_COUNT: u32 = ROOT_DIRECTORY_BLOCK + 1;

/// Reject block counts whose metadata would land outside the addressable range.
pub fn validate_block_count<E>(total_blocks: u32) -> Result<(), CpfsError<E>> {
    if total_blocks < MINIMUM_BLOCK_COUNT {
        return Err(CpfsError::TooFewBlocks {
            required: MINIMUM_BLOCK_COUNT,
            provided: total_blocks,
        });
    }

    return Ok(());
}

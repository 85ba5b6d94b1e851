// Disk layout:
// block 0 superblock, blocks 1..=64 journal (reserved, zeroed), block 65 root directory entry.
// Everything past block 65 is left untouched by a quick format.

mod block_device;
mod disk_blocks;
mod format;
mod layout;
mod memory_device;

pub use block_device::BlockDevice;
pub use disk_blocks::{DirectoryEntry, JournalEntry, Superblock};
pub use format::{FormatReport, Formatter};
pub use layout::{
    validate_block_count, BLOCK_SIZE, CPFS_MAGIC, JOURNAL_LENGTH, JOURNAL_START,
    MINIMUM_BLOCK_COUNT, ROOT_DIRECTORY_BLOCK, SUPERBLOCK_BLOCK,
};
pub use memory_device::{MemoryDevice, MemoryDeviceError};

mod directory_entry;
mod journal_entry;
mod super_block;

pub use directory_entry::DirectoryEntry;
pub use journal_entry::JournalEntry;
pub use super_block::Superblock;

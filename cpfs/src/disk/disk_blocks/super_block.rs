use crate::{ByteSerializable, CPFS_MAGIC, JOURNAL_LENGTH, JOURNAL_START};
use byteorder::{ByteOrder, LittleEndian};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Superblock {
    /// Magic used to identify the filesystem
    magic: u32,
    /// The total number of addressable blocks on the device.
    block_count: u32,
    /// The index of the first journal block.
    journal_start: u32,
    /// The number of blocks reserved for the journal.
    journal_length: u32,
}

impl Superblock {
    pub fn new(block_count: u32) -> Self {
        return Self {
            magic: CPFS_MAGIC,
            block_count,
            journal_start: JOURNAL_START,
            journal_length: JOURNAL_LENGTH,
        };
    }

    pub fn magic(&self) -> u32 {
        return self.magic;
    }

    pub fn block_count(&self) -> u32 {
        return self.block_count;
    }

    pub fn journal_start(&self) -> u32 {
        return self.journal_start;
    }

    pub fn journal_length(&self) -> u32 {
        return self.journal_length;
    }

    /// The first block past the journal, available for non journal use.
    pub fn first_free_block(&self) -> u32 {
        return self.journal_start + self.journal_length;
    }
}

impl ByteSerializable for Superblock {
    type BytesArrayType = [u8; 16];

    fn to_bytes(&self) -> Self::BytesArrayType {
        let mut bytes = [0u8; 16];
        let mut offset = 0;

        LittleEndian::write_u32(&mut bytes[offset..], self.magic);
        offset += 4;

        LittleEndian::write_u32(&mut bytes[offset..], self.block_count);
        offset += 4;

        LittleEndian::write_u32(&mut bytes[offset..], self.journal_start);
        offset += 4;
        LittleEndian::write_u32(&mut bytes[offset..], self.journal_length);

        return bytes;
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized,
    {
        if bytes.len() < Self::serialized_size() as usize {
            return None;
        }

        let magic = LittleEndian::read_u32(&bytes[0..]);

        if magic != CPFS_MAGIC {
            return None;
        }

        return Some(Self {
            magic,
            block_count: LittleEndian::read_u32(&bytes[4..]),
            journal_start: LittleEndian::read_u32(&bytes[8..]),
            journal_length: LittleEndian::read_u32(&bytes[12..]),
        });
    }

    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8] {
        return bytes;
    }

    fn serialized_size() -> u64 {
        return 16;
    }
}

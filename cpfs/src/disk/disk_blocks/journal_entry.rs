use crate::{ByteSerializable, BLOCK_SIZE};
use byteorder::{ByteOrder, LittleEndian};

const HEADER_SIZE: usize = 8;
const PAYLOAD_SIZE: usize = BLOCK_SIZE - HEADER_SIZE;

/// A journal record, exactly one block long. Format only ever writes the empty entry.
#[derive(Clone, PartialEq, Eq)]
pub struct JournalEntry {
    sequence_num: u32,
    /// The block this record logs a change for.
    block_num: u32,
    payload: [u8; PAYLOAD_SIZE],
}

impl JournalEntry {
    pub fn empty() -> Self {
        return Self {
            sequence_num: 0,
            block_num: 0,
            payload: [0u8; PAYLOAD_SIZE],
        };
    }

    pub fn sequence_num(&self) -> u32 {
        return self.sequence_num;
    }

    pub fn block_num(&self) -> u32 {
        return self.block_num;
    }

    pub fn payload(&self) -> &[u8] {
        return &self.payload;
    }

    pub fn is_empty(&self) -> bool {
        return self.sequence_num == 0
            && self.block_num == 0
            && self.payload.iter().all(|b| *b == 0);
    }
}

impl core::fmt::Debug for JournalEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JournalEntry")
            .field("sequence_num", &self.sequence_num)
            .field("block_num", &self.block_num)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl ByteSerializable for JournalEntry {
    type BytesArrayType = [u8; BLOCK_SIZE];

    fn to_bytes(&self) -> Self::BytesArrayType {
        let mut bytes = [0u8; BLOCK_SIZE];

        LittleEndian::write_u32(&mut bytes[0..], self.sequence_num);
        LittleEndian::write_u32(&mut bytes[4..], self.block_num);
        bytes[HEADER_SIZE..].copy_from_slice(&self.payload);

        return bytes;
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized,
    {
        if bytes.len() < BLOCK_SIZE {
            return None;
        }

        let mut payload = [0u8; PAYLOAD_SIZE];
        payload.copy_from_slice(&bytes[HEADER_SIZE..BLOCK_SIZE]);

        return Some(Self {
            sequence_num: LittleEndian::read_u32(&bytes[0..]),
            block_num: LittleEndian::read_u32(&bytes[4..]),
            payload,
        });
    }

    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8] {
        return bytes;
    }

    fn serialized_size() -> u64 {
        return BLOCK_SIZE as u64;
    }
}

use crate::ByteSerializable;
use alloc::string::String;
use byteorder::{ByteOrder, LittleEndian};

const NAME_LENGTH: usize = 128;
const ENTRY_SIZE: usize = 140;

/// Describes one filesystem object. Names are stored NUL padded and always keep a terminating NUL.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    name: [u8; NAME_LENGTH],
    /// The block holding this entry's own data.
    block_num: u32,
    /// Size of the contents in bytes.
    size: u32,
    is_directory: bool,
    // bytes 137-139 are padding
}

impl DirectoryEntry {
    pub fn new(name_str: &str, block_num: u32, size: u32, is_directory: bool) -> Self {
        let mut name = [0u8; NAME_LENGTH];

        // Truncate on a char boundary so the stored name stays valid UTF-8.
        let mut end = name_str.len().min(NAME_LENGTH - 1);
        while !name_str.is_char_boundary(end) {
            end -= 1;
        }

        name[..end].copy_from_slice(&name_str.as_bytes()[..end]);

        return Self {
            name,
            block_num,
            size,
            is_directory,
        };
    }

    /// The root directory entry, which describes itself at `block_num`.
    pub fn root(block_num: u32) -> Self {
        return Self::new("/", block_num, 0, true);
    }

    pub fn name(&self) -> String {
        let end = self
            .name
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(NAME_LENGTH);

        return String::from_utf8_lossy(&self.name[..end]).into_owned();
    }

    pub fn block_num(&self) -> u32 {
        return self.block_num;
    }

    pub fn size(&self) -> u32 {
        return self.size;
    }

    pub fn is_directory(&self) -> bool {
        return self.is_directory;
    }
}

impl core::fmt::Debug for DirectoryEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DirectoryEntry")
            .field("name", &self.name())
            .field("block_num", &self.block_num)
            .field("size", &self.size)
            .field("is_directory", &self.is_directory)
            .finish()
    }
}

impl ByteSerializable for DirectoryEntry {
    type BytesArrayType = [u8; ENTRY_SIZE];

    fn to_bytes(&self) -> Self::BytesArrayType {
        let mut bytes = [0u8; ENTRY_SIZE];
        let mut offset = 0;

        bytes[..NAME_LENGTH].copy_from_slice(&self.name);
        offset += NAME_LENGTH;

        LittleEndian::write_u32(&mut bytes[offset..], self.block_num);
        offset += 4;
        LittleEndian::write_u32(&mut bytes[offset..], self.size);
        offset += 4;

        bytes[offset] = self.is_directory as u8;

        return bytes;
    }

    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized,
    {
        if bytes.len() < ENTRY_SIZE {
            return None;
        }

        let mut name = [0u8; NAME_LENGTH];
        name.copy_from_slice(&bytes[..NAME_LENGTH]);

        let is_directory = match bytes[136] {
            0 => false,
            1 => true,
            _ => return None,
        };

        return Some(Self {
            name,
            block_num: LittleEndian::read_u32(&bytes[128..]),
            size: LittleEndian::read_u32(&bytes[132..]),
            is_directory,
        });
    }

    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8] {
        return bytes;
    }

    fn serialized_size() -> u64 {
        return ENTRY_SIZE as u64;
    }
}

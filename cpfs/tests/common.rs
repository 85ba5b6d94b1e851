extern crate cpfs;
use cpfs::{ByteSerializable, DirectoryEntry, Formatter, MemoryDevice, Superblock, BLOCK_SIZE};

pub fn formatted_device(capacity: usize, total_blocks: u32) -> MemoryDevice {
    let mut device = MemoryDevice::new(capacity);
    Formatter::new(&mut device).quick_format(total_blocks).unwrap();

    return device;
}

pub fn read_superblock(device: &MemoryDevice) -> Superblock {
    return Superblock::from_bytes(device.read_block(0).unwrap()).unwrap();
}

pub fn read_root(device: &MemoryDevice, block_index: u64) -> DirectoryEntry {
    return DirectoryEntry::from_bytes(device.read_block(block_index).unwrap()).unwrap();
}

/// Everything past the serialized structure must be zero.
pub fn tail_is_zero(block: &[u8], used: u64) -> bool {
    assert_eq!(block.len(), BLOCK_SIZE);
    return block[used as usize..].iter().all(|b| *b == 0);
}

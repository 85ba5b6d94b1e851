extern crate cpfs;
use cpfs::{
    ByteSerializable, CpfsError, DirectoryEntry, Formatter, JournalEntry, MemoryDevice,
    MemoryDeviceError, Superblock, CPFS_MAGIC, JOURNAL_LENGTH, JOURNAL_START,
};
use test_log::test;

mod common;
use common::*;

#[test]
fn test_format_1000_blocks() {
    let device = formatted_device(1000, 1000);

    let superblock = read_superblock(&device);
    assert_eq!(superblock.magic(), 0x53465043);
    assert_eq!(superblock.magic(), CPFS_MAGIC);
    assert_eq!(superblock.block_count(), 1000);
    assert_eq!(superblock.journal_start(), 1);
    assert_eq!(superblock.journal_length(), 64);

    for i in 1..=64 {
        let entry = JournalEntry::from_bytes(device.read_block(i).unwrap()).unwrap();
        assert!(entry.is_empty(), "journal block {} is not empty", i);
    }

    let root = read_root(&device, 65);
    assert_eq!(root.name(), "/");
    assert!(root.is_directory());
    assert_eq!(root.block_num(), 65);
    assert_eq!(root.size(), 0);
}

#[test]
fn test_block_count_recorded() {
    for total_blocks in [66u32, 67, 4096, u32::MAX] {
        let device = formatted_device(66, total_blocks);

        assert_eq!(read_superblock(&device).block_count(), total_blocks);
    }
}

#[test]
fn test_padding_is_zero() {
    let device = formatted_device(100, 100);

    assert!(tail_is_zero(device.read_block(0).unwrap(), Superblock::serialized_size()));
    for i in 1..=64 {
        assert!(tail_is_zero(device.read_block(i).unwrap(), 0));
    }
    assert!(tail_is_zero(
        device.read_block(65).unwrap(),
        DirectoryEntry::serialized_size()
    ));
}

#[test]
fn test_blocks_past_root_untouched() {
    let mut device = MemoryDevice::new(100);
    Formatter::new(&mut device).quick_format(100).unwrap();

    assert!(device.writes().iter().all(|b| *b <= 65));
    for i in 66..100 {
        assert!(tail_is_zero(device.read_block(i).unwrap(), 0));
    }
}

#[test]
fn test_format_is_idempotent() {
    let first = formatted_device(80, 500);

    let mut second = first.clone();
    Formatter::new(&mut second).quick_format(500).unwrap();

    assert_eq!(first.dump_disk(), second.dump_disk());
}

#[test]
fn test_reformat_overwrites_previous_metadata() {
    let mut device = formatted_device(80, 500);
    Formatter::new(&mut device).quick_format(70).unwrap();

    assert_eq!(read_superblock(&device).block_count(), 70);
    assert_eq!(formatted_device(80, 70).dump_disk(), device.dump_disk());
}

#[test]
fn test_journal_region_matches_superblock() {
    let device = formatted_device(66, 66);
    let superblock = read_superblock(&device);

    assert_eq!(superblock.journal_start(), JOURNAL_START);
    assert_eq!(superblock.journal_length(), JOURNAL_LENGTH);
    assert_eq!(
        read_root(&device, superblock.first_free_block() as u64).block_num(),
        superblock.first_free_block()
    );
}

#[test]
fn test_superblock_failure_writes_nothing() {
    let mut device = MemoryDevice::new(100).fail_on_write(0);

    let result = Formatter::new(&mut device).quick_format(100);

    assert_eq!(
        result,
        Err(CpfsError::DiskError(MemoryDeviceError::InjectedFailure(0)))
    );
    assert_eq!(device.write_count(), 0);
    assert_eq!(device.dump_disk(), vec![0u8; 100 * 4096]);
}

#[test]
fn test_root_failure_leaves_partial_format() {
    // Superblock plus 64 journal blocks land, then the root write fails.
    let mut device = MemoryDevice::new(100).fail_on_write(65);

    let result = Formatter::new(&mut device).quick_format(100);

    assert_eq!(
        result,
        Err(CpfsError::DiskError(MemoryDeviceError::InjectedFailure(65)))
    );
    assert_eq!(read_superblock(&device).block_count(), 100);
    assert!(DirectoryEntry::from_bytes(device.read_block(65).unwrap())
        .map(|e| e.name().is_empty())
        .unwrap_or(true));
    assert_eq!(device.flush_count(), 0);
}

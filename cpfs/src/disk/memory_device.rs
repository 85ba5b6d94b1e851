use crate::{BlockDevice, CpfsErrorConvertible, BLOCK_SIZE};
use alloc::{vec, vec::Vec};
use core::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryDeviceError {
    /// The block lies past the end of the device.
    OutOfRange(u64),
    /// A failure requested with `fail_on_write`.
    InjectedFailure(u64),
    /// A flush failure requested with `fail_on_flush`.
    InjectedFlushFailure,
}

impl CpfsErrorConvertible for MemoryDeviceError {}

impl Display for MemoryDeviceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            MemoryDeviceError::OutOfRange(block) => {
                write!(f, "Block {} is past the end of the device", block)
            }
            MemoryDeviceError::InjectedFailure(block) => {
                write!(f, "Injected failure writing block {}", block)
            }
            MemoryDeviceError::InjectedFlushFailure => write!(f, "Injected failure flushing"),
        }
    }
}

/// A block device held entirely in memory. Records every write so callers can check ordering.
#[derive(Debug, Clone)]
pub struct MemoryDevice {
    data: Vec<u8>,
    writes: Vec<u64>,
    flushes: usize,
    fail_on_write: Option<usize>,
    fail_on_flush: bool,
}

impl MemoryDevice {
    pub fn new(block_capacity: usize) -> Self {
        return Self {
            data: vec![0u8; block_capacity * BLOCK_SIZE],
            writes: Vec::new(),
            flushes: 0,
            fail_on_write: None,
            fail_on_flush: false,
        };
    }

    /// Make the write with this zero based sequence number fail. Earlier writes still land.
    pub fn fail_on_write(mut self, write_number: usize) -> Self {
        self.fail_on_write = Some(write_number);
        return self;
    }

    pub fn fail_on_flush(mut self) -> Self {
        self.fail_on_flush = true;
        return self;
    }

    pub fn block_capacity(&self) -> usize {
        return self.data.len() / BLOCK_SIZE;
    }

    pub fn read_block(&self, block_index: u64) -> Option<&[u8]> {
        let start = usize::try_from(block_index).ok()?.checked_mul(BLOCK_SIZE)?;
        let end = start.checked_add(BLOCK_SIZE)?;

        return self.data.get(start..end);
    }

    /// Block indices of every successful write, in the order they happened.
    pub fn writes(&self) -> &[u64] {
        return &self.writes;
    }

    pub fn write_count(&self) -> usize {
        return self.writes.len();
    }

    pub fn flush_count(&self) -> usize {
        return self.flushes;
    }

    pub fn dump_disk(&self) -> Vec<u8> {
        return self.data.clone();
    }
}

impl BlockDevice<MemoryDeviceError> for MemoryDevice {
    fn write_block(
        &mut self,
        block_index: u64,
        block: &[u8; BLOCK_SIZE],
    ) -> Result<(), MemoryDeviceError> {
        if self.fail_on_write == Some(self.writes.len()) {
            return Err(MemoryDeviceError::InjectedFailure(block_index));
        }

        if block_index >= self.block_capacity() as u64 {
            return Err(MemoryDeviceError::OutOfRange(block_index));
        }

        let start = block_index as usize * BLOCK_SIZE;
        self.data[start..start + BLOCK_SIZE].copy_from_slice(block);
        self.writes.push(block_index);

        return Ok(());
    }

    fn flush(&mut self) -> Result<(), MemoryDeviceError> {
        if self.fail_on_flush {
            return Err(MemoryDeviceError::InjectedFlushFailure);
        }

        self.flushes += 1;
        return Ok(());
    }
}

use crate::error::DeviceError;
use cpfs::{BlockDevice, BLOCK_SIZE};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};

/// A raw disk or image file opened for exclusive read/write block access.
pub struct FileDevice {
    file: File,
}

impl FileDevice {
    /// Opens an existing target. Nothing is created or truncated.
    pub fn open(path: &str) -> Result<Self, DeviceError> {
        let mut options = OpenOptions::new();
        options.read(true).write(true);

        // Linux refuses O_EXCL on a block device that is mounted or otherwise claimed.
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.custom_flags(libc::O_EXCL);
        }

        #[cfg(windows)]
        {
            use std::os::windows::fs::OpenOptionsExt;
            options.share_mode(0);
        }

        let file = match options.open(path) {
            Ok(f) => f,
            Err(e) => {
                return Err(DeviceError::Open {
                    path: path.to_string(),
                    source: e,
                })
            }
        };

        debug!("Opened {} for exclusive access", path);

        return Ok(Self { file });
    }

    /// Flush and release the device.
    pub fn close(mut self) -> Result<(), DeviceError> {
        self.flush()?;
        drop(self.file);

        return Ok(());
    }
}

impl BlockDevice<DeviceError> for FileDevice {
    fn write_block(
        &mut self,
        block_index: u64,
        block: &[u8; BLOCK_SIZE],
    ) -> Result<(), DeviceError> {
        let offset = match block_index.checked_mul(BLOCK_SIZE as u64) {
            Some(o) => o,
            None => {
                return Err(DeviceError::Seek {
                    block_index,
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "block offset does not fit in 64 bits",
                    ),
                })
            }
        };

        match self.file.seek(SeekFrom::Start(offset)) {
            Ok(_) => (),
            Err(e) => return Err(DeviceError::Seek { block_index, source: e }),
        }

        let written = match self.file.write(block) {
            Ok(n) => n,
            Err(e) => return Err(DeviceError::Write { block_index, source: e }),
        };

        if written != BLOCK_SIZE {
            return Err(DeviceError::ShortWrite {
                block_index,
                written,
                expected: BLOCK_SIZE,
            });
        }

        return Ok(());
    }

    fn flush(&mut self) -> Result<(), DeviceError> {
        match self.file.sync_all() {
            Ok(_) => return Ok(()),
            Err(e) => return Err(DeviceError::Flush(e)),
        }
    }
}

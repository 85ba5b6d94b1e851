mod arguments;
mod device;
mod error;

pub use arguments::{parse_arguments, FormatRequest};
pub use device::FileDevice;
pub use error::{DeviceError, ToolError, FAILURE_EXIT_CODE};

use byte_unit::Byte;
use cpfs::{FormatReport, Formatter, BLOCK_SIZE};
use log::{info, warn};

/// Open the target, quick format it and close it again. The device is closed even when formatting fails.
pub fn run(request: &FormatRequest) -> Result<FormatReport, ToolError> {
    info!(
        "Formatting {} as CPFS with {} blocks ({})",
        request.disk_path,
        request.total_blocks,
        blocks_to_sized_string(request.total_blocks as u64)
    );

    let mut device = FileDevice::open(&request.disk_path)?;
    let result = Formatter::<DeviceError>::new(&mut device).quick_format(request.total_blocks);
    let closed = device.close();

    let report = match result {
        Ok(r) => r,
        Err(e) => {
            if let Err(close_error) = closed {
                warn!("Closing the device also failed: {}", close_error);
            }

            return Err(e.into());
        }
    };

    closed?;

    return Ok(report);
}

pub fn u64_to_sized_string(n: u64) -> String {
    return Byte::from(n).get_appropriate_unit(true).to_string();
}

/// Human readable size of `blocks` whole blocks.
pub fn blocks_to_sized_string(blocks: u64) -> String {
    return u64_to_sized_string(blocks.saturating_mul(BLOCK_SIZE as u64));
}

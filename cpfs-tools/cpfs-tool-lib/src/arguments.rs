use crate::error::ToolError;
use clap::{App, Arg};
use std::ffi::OsString;

/// A validated command line: which target to format and how many blocks it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    pub disk_path: String,
    pub total_blocks: u32,
}

/// Parse `<disk_path> <total_blocks>`. The first element is the program name.
pub fn parse_arguments<I, T>(args: I) -> Result<FormatRequest, ToolError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let arguments = App::new("mkfs-cpfs")
        .version("0.1.0")
        .about("This program quick formats a disk or image file with CPFS.")
        .arg(
            Arg::with_name("disk_path")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("The path of the disk or image to format"),
        )
        .arg(
            Arg::with_name("total_blocks")
                .required(true)
                .takes_value(true)
                .index(2)
                .help("The number of 4096 byte blocks the target holds"),
        )
        .get_matches_from_safe(args)?;

    let disk_path = match arguments.value_of("disk_path") {
        Some(p) => p.to_string(),
        None => {
            return Err(ToolError::Argument(clap::Error::with_description(
                "The argument <disk_path> was not provided",
                clap::ErrorKind::MissingRequiredArgument,
            )))
        }
    };

    let total_blocks = match arguments.value_of("total_blocks") {
        Some(n) => parse_block_count(n)?,
        None => {
            return Err(ToolError::Argument(clap::Error::with_description(
                "The argument <total_blocks> was not provided",
                clap::ErrorKind::MissingRequiredArgument,
            )))
        }
    };

    return Ok(FormatRequest {
        disk_path,
        total_blocks,
    });
}

fn parse_block_count(value: &str) -> Result<u32, ToolError> {
    return match value.trim().parse::<u32>() {
        Ok(n) => Ok(n),
        Err(_) => Err(ToolError::InvalidBlockCount(value.to_string())),
    };
}

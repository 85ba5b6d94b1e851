#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod byte_serializable;
mod cpfs_error;
mod disk;

pub use byte_serializable::ByteSerializable;
pub use cpfs_error::{CpfsError, CpfsErrorConvertible};
pub use disk::*;

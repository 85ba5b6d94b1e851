use core::fmt::{Debug, Display};

pub trait CpfsErrorConvertible: Debug {
    /// Lift a device level error into the formatter's error type.
    fn into_cpfs_error(self) -> CpfsError<Self>
    where
        Self: Sized,
    {
        return CpfsError::DiskError(self);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpfsError<E> {
    /// The requested block count cannot hold the superblock, journal and root directory.
    TooFewBlocks { required: u32, provided: u32 },
    DiskError(E),
}

impl<E: Display> Display for CpfsError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use CpfsError::*;

        match self {
            TooFewBlocks { required, provided } => write!(
                f,
                "At least {} blocks are required but only {} were requested",
                required, provided
            ),
            DiskError(e) => write!(f, "Disk error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::CpfsError;
    use test_log::test;

    #[derive(Debug)]
    struct DummyError;

    impl core::fmt::Display for DummyError {
        fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
            write!(f, "DummyError")
        }
    }

    #[test]
    fn test_fmt_too_few_blocks() {
        let err: CpfsError<DummyError> = CpfsError::TooFewBlocks {
            required: 66,
            provided: 10,
        };
        assert_eq!(
            "At least 66 blocks are required but only 10 were requested",
            format!("{}", err)
        );
    }

    #[test]
    fn test_fmt_disk_error() {
        let err: CpfsError<DummyError> = CpfsError::DiskError(DummyError);
        assert_eq!("Disk error: DummyError", format!("{}", err));
    }
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HasherError {
    #[error("Integer overflow, value too large")]
    IntegerOverflow,
    #[error("Requested depth {0} exceeds the maximum supported depth {1}")]
    DepthTooLarge(usize, usize),
}

/// Error codes reported by libbladeRF calls.
///
/// The numeric values match the `BLADERF_ERR_*` constants so they can be
/// shown to users that are used to the C tooling.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LibError {
    #[error("An unexpected error occurred")]
    Unexpected,
    #[error("Provided parameter was out of the allowable range")]
    Range,
    #[error("Invalid operation or parameter")]
    Inval,
    #[error("A memory allocation error occurred")]
    Mem,
    #[error("File or device I/O failure")]
    Io,
    #[error("Operation timed out")]
    Timeout,
    #[error("No devices available")]
    NoDev,
    #[error("Operation not supported")]
    Unsupported,
    #[error("Misaligned flash access")]
    Misaligned,
    #[error("Invalid checksum")]
    Checksum,
    #[error("File not found")]
    NoFile,
    #[error("An FPGA update is required")]
    UpdateFpga,
    #[error("A firmware update is required")]
    UpdateFw,
    #[error("Requested timestamp is in the past")]
    TimePast,
    #[error("Could not enqueue data into full queue")]
    QueueFull,
    #[error("An FPGA operation reported a failure")]
    FpgaOp,
    #[error("Insufficient permissions for the requested operation")]
    Permission,
    #[error("The operation would block, but has been requested to be non-blocking")]
    WouldBlock,
    #[error("Device insufficiently initialized for operation")]
    NotInit,
}

/// Result type for library calls that may return a [`LibError`].
pub type LibResult<T> = std::result::Result<T, LibError>;

const ALL: [LibError; 19] = [
    LibError::Unexpected,
    LibError::Range,
    LibError::Inval,
    LibError::Mem,
    LibError::Io,
    LibError::Timeout,
    LibError::NoDev,
    LibError::Unsupported,
    LibError::Misaligned,
    LibError::Checksum,
    LibError::NoFile,
    LibError::UpdateFpga,
    LibError::UpdateFw,
    LibError::TimePast,
    LibError::QueueFull,
    LibError::FpgaOp,
    LibError::Permission,
    LibError::WouldBlock,
    LibError::NotInit,
];

impl LibError {
    /// The `BLADERF_ERR_*` value of this error.
    pub fn code(&self) -> i32 {
        match self {
            LibError::Unexpected => -1,
            LibError::Range => -2,
            LibError::Inval => -3,
            LibError::Mem => -4,
            LibError::Io => -5,
            LibError::Timeout => -6,
            LibError::NoDev => -7,
            LibError::Unsupported => -8,
            LibError::Misaligned => -9,
            LibError::Checksum => -10,
            LibError::NoFile => -11,
            LibError::UpdateFpga => -12,
            LibError::UpdateFw => -13,
            LibError::TimePast => -14,
            LibError::QueueFull => -15,
            LibError::FpgaOp => -16,
            LibError::Permission => -17,
            LibError::WouldBlock => -18,
            LibError::NotInit => -19,
        }
    }

    /// Map a raw `BLADERF_ERR_*` value back to an error.
    ///
    /// Returns `None` for `0` (success) and for values libbladeRF does not define.
    pub fn from_code(code: i32) -> Option<Self> {
        ALL.iter().copied().find(|err| err.code() == code)
    }
}

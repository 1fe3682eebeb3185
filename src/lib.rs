//! The `calibrate` command of a bladeRF command line interface, written in Rust.
//!
//! The command drives the DC offset calibration routines of the LMS6002D transceiver found
//! on the bladeRF1:
//! - the LPF tuning module
//! - the RX and TX low-pass filters
//! - the RX VGA2 gain stage
//!
//! The TX LPF calibration tends to fail the first couple of times it is run, so the command
//! retries it a bounded number of times before giving up.
//!
//! ## Usage overview
//!
//! Everything the command needs from the device is described by the [`BladeRf`] trait.
//! A device is handed to a [`CliState`], and commands are run through [`cmd::exec`] with an
//! `argv` style argument list:
//!
//! ```
//! use bladerf_cli::{CliState, cmd, sim::SimBladeRf};
//!
//! let mut state = CliState::with_device(SimBladeRf::new());
//! cmd::exec(&mut state, &["calibrate", "rxlpf"]).unwrap();
//! ```
//!
//! When no device is opened, or its FPGA is not loaded, the command fails with
//! [`CmdError::NoDevice`] respectively [`CmdError::NoFpga`]. Failures of the underlying
//! library are reported as [`CmdError::LibBladeRf`]. The specific [`LibError`] is kept in
//! [`CliState::last_lib_error`].
//!
//! ## Examples
//! A demo running the command against a simulated bladeRF is available:
//! ```bash
//! cargo run --package calibrate -- txlpf --txlpf-failures 3 -v
//! ```

pub mod bladerf;
pub mod cli;
pub mod cmd;
pub mod sim;

pub use bladerf::BladeRf;
pub use bladerf_globals::{DcCalModule, LibError, LibResult, Module};
pub use cli::CliState;

/// Command level failure, mirroring the `CMD_RET_*` codes of bladeRF-cli.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum CmdError {
    #[error("Quit requested")]
    Quit,
    #[error("Terminal clear requested")]
    ClearTerm,
    #[error("An unknown error occurred")]
    Unknown,
    #[error("A memory allocation error occurred")]
    Memory,
    /// Invalid parameter provided.
    #[error("Invalid parameter")]
    InvalidParam,
    /// No device is opened.
    #[error("No devices are currently opened")]
    NoDevice,
    /// The device's FPGA is not loaded.
    #[error("Command requires FPGA to be loaded")]
    NoFpga,
    #[error("Operation invalid in current state")]
    State,
    #[error("File operation failed")]
    FileOp,
    #[error("Device is currently busy")]
    Busy,
    /// A libbladeRF call failed.
    ///
    /// The specific error is stored in [`CliState::last_lib_error`].
    #[error("libbladeRF error")]
    LibBladeRf,
    #[error("Invalid number of arguments provided")]
    NumArgs,
    #[error("Unrecognized command")]
    InvalidCommand,
}

impl CmdError {
    /// The `CMD_RET_*` value of this error.
    pub fn code(&self) -> i32 {
        match self {
            CmdError::Quit => -1,
            CmdError::ClearTerm => -2,
            CmdError::Unknown => -3,
            CmdError::Memory => -4,
            CmdError::InvalidParam => -5,
            CmdError::NoDevice => -6,
            CmdError::NoFpga => -7,
            CmdError::State => -8,
            CmdError::FileOp => -9,
            CmdError::Busy => -10,
            CmdError::LibBladeRf => -11,
            CmdError::NumArgs => -12,
            CmdError::InvalidCommand => -13,
        }
    }
}

/// Result type for commands. Success corresponds to `CMD_RET_OK`.
pub type CmdResult = std::result::Result<(), CmdError>;

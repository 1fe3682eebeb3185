use crate::{BladeRf, CmdError};
use bladerf_globals::LibError;
use std::fmt::Display;

/// State shared by all commands of an interactive session.
#[derive(Default)]
pub struct CliState {
    dev: Option<Box<dyn BladeRf>>,
    /// Error of the last failing libbladeRF call.
    ///
    /// Commands only return [`CmdError::LibBladeRf`], so this is the place to look for the
    /// specific error.
    pub last_lib_error: Option<LibError>,
    last_error: Option<String>,
}

impl CliState {
    /// A session without an opened device.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with an already opened device.
    pub fn with_device(dev: impl BladeRf + 'static) -> Self {
        let mut state = Self::new();
        state.open(Box::new(dev));
        state
    }

    /// Make `dev` the device commands operate on, replacing any previously opened one.
    pub fn open(&mut self, dev: Box<dyn BladeRf>) {
        if self.dev.replace(dev).is_some() {
            log::debug!("Closing previously opened device");
        }
    }

    pub fn close(&mut self) -> Option<Box<dyn BladeRf>> {
        self.dev.take()
    }

    pub fn device_is_opened(&self) -> bool {
        self.dev.is_some()
    }

    pub fn device(&self) -> Option<&dyn BladeRf> {
        self.dev.as_deref()
    }

    /// Remember a failed library call and translate it to the command level error.
    pub fn lib_error(&mut self, err: LibError) -> CmdError {
        log::debug!("libbladeRF call failed: {err} ({})", err.code());
        self.last_lib_error = Some(err);
        CmdError::LibBladeRf
    }

    /// Report a command specific error message, prefixed with `prefix` (usually the command
    /// name).
    pub fn cli_err(&mut self, prefix: &str, msg: impl Display) {
        let msg = format!("{prefix}: {msg}");
        eprintln!("{msg}");
        self.last_error = Some(msg);
    }

    /// The message most recently reported via [`CliState::cli_err`].
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Human readable description of `err`, including the stored libbladeRF error if the
    /// command failed in the library.
    pub fn describe(&self, err: CmdError) -> String {
        match (err, self.last_lib_error) {
            (CmdError::LibBladeRf, Some(lib)) => format!("{err}: {lib} ({})", lib.code()),
            _ => err.to_string(),
        }
    }
}

//! Vocabulary shared between the bladeRF command line and the library it drives.

pub mod error;

pub use error::{LibError, LibResult};

use std::fmt;

/// RF front end that can be enabled or disabled with `enable_module`.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Module {
    Rx,
    Tx,
}

/// DC Calibration Modules
///
/// Each variant names one of the LMS6002D blocks that carries its own DC offset
/// calibration circuitry.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum DcCalModule {
    /// LPF tuning module
    LpfTuning,
    /// TX low-pass filter
    TxLpf,
    /// RX low-pass filter
    RxLpf,
    /// RX VGA2 gain stage
    RxVga2,
}

impl DcCalModule {
    /// Whether calibrating this block requires the RX front end to be running.
    pub fn needs_rx(&self) -> bool {
        matches!(self, DcCalModule::RxLpf | DcCalModule::RxVga2)
    }
}

impl fmt::Display for DcCalModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DcCalModule::LpfTuning => "LPF tuning",
            DcCalModule::TxLpf => "TX LPF",
            DcCalModule::RxLpf => "RX LPF",
            DcCalModule::RxVga2 => "RX VGA2",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dc_cal_module_rx_requirement() {
        assert!(!DcCalModule::LpfTuning.needs_rx());
        assert!(!DcCalModule::TxLpf.needs_rx());
        assert!(DcCalModule::RxLpf.needs_rx());
        assert!(DcCalModule::RxVga2.needs_rx());
    }

    #[test]
    fn dc_cal_module_names() {
        assert_eq!(DcCalModule::LpfTuning.to_string(), "LPF tuning");
        assert_eq!(DcCalModule::RxVga2.to_string(), "RX VGA2");
    }
}

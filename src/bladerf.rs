use bladerf_globals::{DcCalModule, LibResult, Module};

/// The subset of libbladeRF that the calibrate command relies on.
///
/// Implementations talk to the device. The command never looks behind these calls.
pub trait BladeRf {
    /// Check whether the FPGA has been loaded.
    fn is_fpga_configured(&self) -> LibResult<bool>;

    /// Enable/Disable RF Module
    fn enable_module(&self, module: Module, enable: bool) -> LibResult<()>;

    /// Run the on-chip DC offset calibration of a single LMS6002D block.
    fn calibrate_dc(&self, module: DcCalModule) -> LibResult<()>;
}


use crate::{BladeRf, CliState, CmdError, CmdResult};
use bladerf_globals::{DcCalModule, LibError, LibResult, Module};
use std::str::FromStr;

/// Upper bound on TX LPF calibration attempts made by [`txlpf_workaround`].
pub const TXLPF_MAX_ATTEMPTS: u32 = 5;

/// Block selected with `calibrate <module>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalTarget {
    Tuning,
    TxLpf,
    RxLpf,
    RxVga2,
}

impl CalTarget {
    pub fn dc_cal_module(&self) -> DcCalModule {
        match self {
            CalTarget::Tuning => DcCalModule::LpfTuning,
            CalTarget::TxLpf => DcCalModule::TxLpf,
            CalTarget::RxLpf => DcCalModule::RxLpf,
            CalTarget::RxVga2 => DcCalModule::RxVga2,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Invalid module provided ({0})")]
pub struct InvalidCalTarget(pub String);

impl FromStr for CalTarget {
    type Err = InvalidCalTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ("tuning", CalTarget::Tuning),
            ("txlpf", CalTarget::TxLpf),
            ("rxlpf", CalTarget::RxLpf),
            ("rxvga2", CalTarget::RxVga2),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, target)| target)
        .ok_or_else(|| InvalidCalTarget(s.to_string()))
    }
}

/// The TX LPF calibration fails the first couple of times it is run, so it gets retried here
/// instead of making the user rerun the command.
///
/// TX is enabled for each attempt and disabled afterwards. A failure to enable or disable TX
/// aborts right away and is returned instead of the calibration result. Only
/// [`LibError::Unexpected`] triggers another attempt; the C bladeRF-cli retries on any
/// calibration error, other errors are returned here without retrying.
pub fn txlpf_workaround(dev: &dyn BladeRf) -> LibResult<()> {
    let mut cal_status = Err(LibError::Unexpected);

    for attempt in 0..TXLPF_MAX_ATTEMPTS {
        dev.enable_module(Module::Tx, true)?;

        if attempt != 0 {
            println!("Retrying TXLPF calibration...");
        }

        cal_status = dev.calibrate_dc(DcCalModule::TxLpf);

        dev.enable_module(Module::Tx, false)?;

        match cal_status {
            Err(LibError::Unexpected) => {
                log::warn!(
                    "TX LPF calibration attempt {}/{TXLPF_MAX_ATTEMPTS} did not converge",
                    attempt + 1
                );
            }
            _ => break,
        }
    }

    cal_status
}

/// Calibrate every block: LPF tuning, RX LPF, TX LPF and RX VGA2, in that order.
///
/// Stops at the first failure. RX is left enabled in that case.
pub fn calibrate_all(dev: &dyn BladeRf) -> LibResult<()> {
    log::debug!("Calibrating: {}", DcCalModule::LpfTuning);
    dev.calibrate_dc(DcCalModule::LpfTuning)?;

    dev.enable_module(Module::Rx, true)?;

    log::debug!("Calibrating: {}", DcCalModule::RxLpf);
    dev.calibrate_dc(DcCalModule::RxLpf)?;

    log::debug!("Calibrating: {}", DcCalModule::TxLpf);
    txlpf_workaround(dev)?;

    log::debug!("Calibrating: {}", DcCalModule::RxVga2);
    dev.calibrate_dc(DcCalModule::RxVga2)?;

    dev.enable_module(Module::Rx, false)
}

/// Calibrate a single block.
///
/// RX is enabled around the RX LPF and RX VGA2 calibrations. Once enabled, it is disabled
/// again even if the calibration failed; the first error is returned.
pub fn calibrate_target(dev: &dyn BladeRf, target: CalTarget) -> LibResult<()> {
    let module = target.dc_cal_module();
    log::debug!("Calibrating: {module}");

    match target {
        CalTarget::Tuning => dev.calibrate_dc(module),
        CalTarget::TxLpf => txlpf_workaround(dev),
        CalTarget::RxLpf | CalTarget::RxVga2 => {
            dev.enable_module(Module::Rx, true)?;
            let cal_status = dev.calibrate_dc(module);
            let disable_status = dev.enable_module(Module::Rx, false);
            cal_status.and(disable_status)
        }
    }
}

/// `calibrate [<module>]`
pub fn cmd_calibrate(state: &mut CliState, argv: &[&str]) -> CmdResult {
    let fpga_status = match state.device() {
        Some(dev) => dev.is_fpga_configured(),
        None => return Err(CmdError::NoDevice),
    };

    match fpga_status {
        Ok(true) => {}
        Ok(false) => return Err(CmdError::NoFpga),
        Err(err) => return Err(state.lib_error(err)),
    }

    let status = match argv {
        [_] => {
            let dev = state.device().ok_or(CmdError::NoDevice)?;
            calibrate_all(dev)
        }
        [cmd, module] => {
            let target = match module.parse::<CalTarget>() {
                Ok(target) => target,
                Err(err) => {
                    state.cli_err(cmd, err);
                    return Err(CmdError::InvalidParam);
                }
            };
            let dev = state.device().ok_or(CmdError::NoDevice)?;
            calibrate_target(dev, target)
        }
        _ => return Err(CmdError::InvalidParam),
    };

    status.map_err(|err| state.lib_error(err))
}

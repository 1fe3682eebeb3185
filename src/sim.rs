//! A simulated bladeRF.
//!
//! [`SimBladeRf`] records every library call made through [`BladeRf`] and answers with
//! scripted failures. Clones share their state, so a handle kept by the caller observes the
//! calls made through a clone that was handed to a [`crate::CliState`].

use crate::BladeRf;
use bladerf_globals::{DcCalModule, LibError, LibResult, Module};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// A single library call observed by [`SimBladeRf`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    IsFpgaConfigured,
    EnableModule(Module, bool),
    CalibrateDc(DcCalModule),
}

#[derive(Debug)]
struct SimState {
    fpga_loaded: bool,
    failures: HashMap<Call, VecDeque<Option<LibError>>>,
    calls: Vec<Call>,
    rx_enabled: bool,
    tx_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct SimBladeRf {
    state: Rc<RefCell<SimState>>,
}

impl Default for SimBladeRf {
    fn default() -> Self {
        Self::new()
    }
}

impl SimBladeRf {
    /// A device with a loaded FPGA on which every call succeeds.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                fpga_loaded: true,
                failures: HashMap::new(),
                calls: Vec::new(),
                rx_enabled: false,
                tx_enabled: false,
            })),
        }
    }

    /// A device whose FPGA has not been loaded yet.
    pub fn without_fpga() -> Self {
        let sim = Self::new();
        sim.state.borrow_mut().fpga_loaded = false;
        sim
    }

    /// Let the next invocation of `call` fail with `err`.
    ///
    /// Failures queue up: scripting the same call twice makes its next two invocations fail.
    pub fn fail(&self, call: Call, err: LibError) -> &Self {
        self.fail_times(call, err, 1)
    }

    /// Let the next `times` invocations of `call` fail with `err`.
    pub fn fail_times(&self, call: Call, err: LibError, times: usize) -> &Self {
        self.script(call, std::iter::repeat_n(Some(err), times))
    }

    /// Let `call` succeed `successes` more times, then fail once with `err`.
    pub fn fail_after(&self, call: Call, successes: usize, err: LibError) -> &Self {
        self.script(
            call,
            std::iter::repeat_n(None, successes).chain(std::iter::once(Some(err))),
        )
    }

    fn script(&self, call: Call, outcomes: impl IntoIterator<Item = Option<LibError>>) -> &Self {
        self.state
            .borrow_mut()
            .failures
            .entry(call)
            .or_default()
            .extend(outcomes);
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// Number of times `call` has been made.
    pub fn count(&self, call: Call) -> usize {
        self.state.borrow().calls.iter().filter(|c| **c == call).count()
    }

    pub fn is_enabled(&self, module: Module) -> bool {
        let state = self.state.borrow();
        match module {
            Module::Rx => state.rx_enabled,
            Module::Tx => state.tx_enabled,
        }
    }

    /// Record `call` and pop its next scripted failure, if any.
    fn invoke(&self, call: Call) -> LibResult<()> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        match state.failures.get_mut(&call).and_then(VecDeque::pop_front).flatten() {
            Some(err) => {
                log::debug!("[sim] {call:?} -> {err}");
                Err(err)
            }
            None => {
                log::trace!("[sim] {call:?} -> ok");
                Ok(())
            }
        }
    }
}

impl BladeRf for SimBladeRf {
    fn is_fpga_configured(&self) -> LibResult<bool> {
        self.invoke(Call::IsFpgaConfigured)?;
        Ok(self.state.borrow().fpga_loaded)
    }

    fn enable_module(&self, module: Module, enable: bool) -> LibResult<()> {
        self.invoke(Call::EnableModule(module, enable))?;
        let mut state = self.state.borrow_mut();
        match module {
            Module::Rx => state.rx_enabled = enable,
            Module::Tx => state.tx_enabled = enable,
        }
        Ok(())
    }

    fn calibrate_dc(&self, module: DcCalModule) -> LibResult<()> {
        if module.needs_rx() && !self.is_enabled(Module::Rx) {
            log::warn!("[sim] calibrating {module} with RX disabled");
        }
        self.invoke(Call::CalibrateDc(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_failures_are_consumed_in_order() {
        let sim = SimBladeRf::new();
        let call = Call::CalibrateDc(DcCalModule::TxLpf);
        sim.fail(call, LibError::Unexpected).fail(call, LibError::Timeout);

        assert_eq!(sim.calibrate_dc(DcCalModule::TxLpf), Err(LibError::Unexpected));
        assert_eq!(sim.calibrate_dc(DcCalModule::TxLpf), Err(LibError::Timeout));
        assert_eq!(sim.calibrate_dc(DcCalModule::TxLpf), Ok(()));
        assert_eq!(sim.count(call), 3);
    }

    #[test]
    fn failure_after_successes() {
        let sim = SimBladeRf::new();
        sim.fail_after(Call::EnableModule(Module::Tx, true), 1, LibError::NoDev);

        assert_eq!(sim.enable_module(Module::Tx, true), Ok(()));
        assert_eq!(sim.enable_module(Module::Tx, true), Err(LibError::NoDev));
        assert_eq!(sim.enable_module(Module::Tx, true), Ok(()));
    }

    #[test]
    fn failed_enable_keeps_module_state() {
        let sim = SimBladeRf::new();
        sim.fail(Call::EnableModule(Module::Rx, true), LibError::Io);

        assert_eq!(sim.enable_module(Module::Rx, true), Err(LibError::Io));
        assert!(!sim.is_enabled(Module::Rx));
        assert_eq!(sim.enable_module(Module::Rx, true), Ok(()));
        assert!(sim.is_enabled(Module::Rx));
    }

    #[test]
    fn clones_share_state() {
        let sim = SimBladeRf::without_fpga();
        let handle = sim.clone();
        assert_eq!(sim.is_fpga_configured(), Ok(false));
        assert_eq!(handle.calls(), vec![Call::IsFpgaConfigured]);
    }
}

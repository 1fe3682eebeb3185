mod common;

use crate::common::*;

use bladerf_cli::cmd::calibrate::{TXLPF_MAX_ATTEMPTS, txlpf_workaround};
use bladerf_cli::sim::{Call, SimBladeRf};
use bladerf_cli::{DcCalModule, LibError, Module};

const TXLPF: Call = Call::CalibrateDc(DcCalModule::TxLpf);
const TX_ON: Call = Call::EnableModule(Module::Tx, true);
const TX_OFF: Call = Call::EnableModule(Module::Tx, false);

#[test]
fn succeeds_first_time() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();

    assert_eq!(txlpf_workaround(&sim), Ok(()));
    assert_eq!(sim.calls(), vec![TX_ON, TXLPF, TX_OFF]);
}

#[test]
fn retries_unexpected_errors() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail_times(TXLPF, LibError::Unexpected, 2);

    assert_eq!(txlpf_workaround(&sim), Ok(()));
    assert_eq!(
        sim.calls(),
        vec![TX_ON, TXLPF, TX_OFF, TX_ON, TXLPF, TX_OFF, TX_ON, TXLPF, TX_OFF]
    );
}

#[test]
fn gives_up_after_max_attempts() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail_times(TXLPF, LibError::Unexpected, 6);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::Unexpected));
    assert_eq!(sim.count(TXLPF), TXLPF_MAX_ATTEMPTS as usize);
    assert!(!sim.is_enabled(Module::Tx));
}

#[test]
fn other_errors_are_not_retried() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail(TXLPF, LibError::Timeout);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::Timeout));
    assert_eq!(sim.calls(), vec![TX_ON, TXLPF, TX_OFF]);
}

#[test]
fn enable_failure_aborts() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail(TX_ON, LibError::Io);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::Io));
    assert_eq!(sim.calls(), vec![TX_ON]);
}

#[test]
fn enable_failure_on_retry_aborts() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail(TXLPF, LibError::Unexpected);
    sim.fail_after(TX_ON, 1, LibError::NoDev);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::NoDev));
    assert_eq!(sim.calls(), vec![TX_ON, TXLPF, TX_OFF, TX_ON]);
}

#[test]
fn disable_failure_wins_over_failed_calibration() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail(TXLPF, LibError::Unexpected);
    sim.fail(TX_OFF, LibError::NoDev);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::NoDev));
    assert_eq!(sim.calls(), vec![TX_ON, TXLPF, TX_OFF]);
}

#[test]
fn disable_failure_wins_over_successful_calibration() {
    logging_init("txlpf_workaround");
    let sim = SimBladeRf::new();
    sim.fail(TX_OFF, LibError::Timeout);

    assert_eq!(txlpf_workaround(&sim), Err(LibError::Timeout));
    assert_eq!(sim.count(TXLPF), 1);
}

/// This module has been created using mod.rs in a subfolder, instead of just creating a common.rs under tests
/// This is due to the test runner then not searching for runnable tests in mod.rs
/// https://doc.rust-lang.org/rust-by-example/testing/integration_testing.html
use bladerf_cli::CliState;
use bladerf_cli::sim::SimBladeRf;

pub fn logging_init(module: &str) {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Error)
        .filter_module(module, log::LevelFilter::Trace)
        .filter_module("bladerf_cli", log::LevelFilter::Trace)
        .try_init();
}

/// A session with an opened simulated device. The returned handle observes all calls.
#[allow(dead_code)]
pub fn session(sim: SimBladeRf) -> (CliState, SimBladeRf) {
    let state = CliState::with_device(sim.clone());
    (state, sim)
}

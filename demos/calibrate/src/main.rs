use anyhow::{Result, anyhow};
use bladerf_cli::sim::{Call, SimBladeRf};
use bladerf_cli::{CliState, DcCalModule, LibError, cmd};
use clap::Parser;

/// Run the `calibrate` command against a simulated bladeRF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Calibrate a single module: tuning, txlpf, rxlpf or rxvga2.
    /// All modules are calibrated if omitted.
    module: Option<String>,

    /// Number of times the TX LPF calibration fails before it converges.
    #[arg(short = 't', long, default_value_t = 2)]
    txlpf_failures: usize,

    /// Simulate a device whose FPGA has not been loaded.
    #[arg(long)]
    no_fpga: bool,

    /// Run without an opened device.
    #[arg(long)]
    no_device: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder().filter_level(level).init();

    let sim = if args.no_fpga {
        SimBladeRf::without_fpga()
    } else {
        SimBladeRf::new()
    };
    sim.fail_times(
        Call::CalibrateDc(DcCalModule::TxLpf),
        LibError::Unexpected,
        args.txlpf_failures,
    );

    let mut state = if args.no_device {
        CliState::new()
    } else {
        CliState::with_device(sim.clone())
    };

    let mut argv = vec!["calibrate"];
    argv.extend(args.module.as_deref());

    let status = cmd::exec(&mut state, &argv);
    for call in sim.calls() {
        log::debug!("{call:?}");
    }

    match status {
        Ok(()) => {
            println!("Calibration complete.");
            Ok(())
        }
        Err(err) => Err(anyhow!(
            "{} (code {})",
            state.describe(err),
            err.code()
        )),
    }
}

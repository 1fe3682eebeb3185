//! Command table and dispatch.

pub mod calibrate;

use crate::{CliState, CmdError, CmdResult};

/// Signature shared by all command handlers. `argv[0]` is the name the command was invoked
/// with.
pub type CmdFn = fn(&mut CliState, &[&str]) -> CmdResult;

pub struct Cmd {
    /// Names the command can be invoked with. The first one is the canonical name.
    pub names: &'static [&'static str],
    pub exec: CmdFn,
    /// One line description shown in the command overview.
    pub desc: &'static str,
    /// Full help text shown by `help <command>`.
    pub help: &'static str,
}

impl Cmd {
    pub fn name(&self) -> &'static str {
        self.names[0]
    }
}

const CALIBRATE_HELP: &str = "\
calibrate [<module>]

Calibrate the DC offset of the specified module. If no module is specified,
all modules are calibrated in the following order: tuning, rxlpf, txlpf,
rxvga2. The FPGA must be loaded for this command to work.

Available modules for calibration:

    tuning    The LPF tuning module
    txlpf     The TX low-pass filter
    rxlpf     The RX low-pass filter
    rxvga2    The RX VGA2 gain stage

The TX LPF calibration is retried a few times if it does not converge.";

const HELP_HELP: &str = "\
help [<command>]

Provides extended help, like this, on any command.";

pub static COMMANDS: &[Cmd] = &[
    Cmd {
        names: &["calibrate", "cal"],
        exec: calibrate::cmd_calibrate,
        desc: "Calibrate transceiver",
        help: CALIBRATE_HELP,
    },
    Cmd {
        names: &["help", "h", "?"],
        exec: cmd_help,
        desc: "Provide information about specified command",
        help: HELP_HELP,
    },
];

/// Look up a command by any of its names.
pub fn get_cmd(name: &str) -> Option<&'static Cmd> {
    COMMANDS.iter().find(|cmd| cmd.names.contains(&name))
}

/// Run the command named by `argv[0]`. An empty argument list is a no-op.
pub fn exec(state: &mut CliState, argv: &[&str]) -> CmdResult {
    let Some(name) = argv.first() else {
        return Ok(());
    };

    match get_cmd(name) {
        Some(cmd) => {
            log::debug!("Running command: {argv:?}");
            (cmd.exec)(state, argv)
        }
        None => {
            state.cli_err(name, "Unrecognized command");
            Err(CmdError::InvalidCommand)
        }
    }
}

pub fn cmd_help(state: &mut CliState, argv: &[&str]) -> CmdResult {
    match argv {
        [_] => {
            println!("Available commands:");
            for cmd in COMMANDS {
                println!("  {:<12}{}", cmd.name(), cmd.desc);
            }
            Ok(())
        }
        [_, topic] => match get_cmd(topic) {
            Some(cmd) => {
                println!("{}", cmd.help);
                Ok(())
            }
            None => {
                state.cli_err(argv[0], format!("No help info available for \"{topic}\""));
                Err(CmdError::InvalidParam)
            }
        },
        _ => Err(CmdError::InvalidParam),
    }
}

use std::process::ExitCode;

use membership_kernels::cli;

fn main() -> ExitCode {
    ExitCode::from(cli::probe_status(std::env::args_os()))
}

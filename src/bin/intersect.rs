use std::process::ExitCode;

use membership_kernels::{cli, Difference};

fn main() -> ExitCode {
    cli::run(&Difference, std::env::args_os())
}

use std::process::ExitCode;

use membership_kernels::{cli, AbOptimized};

fn main() -> ExitCode {
    cli::run(&AbOptimized, std::env::args_os())
}

use std::process::ExitCode;

use membership_kernels::{cli, AbReference};

fn main() -> ExitCode {
    cli::run(&AbReference, std::env::args_os())
}

use std::process::ExitCode;

use membership_kernels::{cli, L1Membership};

fn main() -> ExitCode {
    cli::run(&L1Membership, std::env::args_os())
}

//! Process entry point shared by the kernel executables.
//!
//! Each executable wraps exactly one kernel. It takes exactly one argument,
//! the input string, and reports the decision through its exit status.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::process::ExitCode;

use crate::{intersect, Kernel};

/// Exit status for an accepted input.
pub const ACCEPT_EXIT_CODE: u8 = 0;

/// Exit status for a rejected input.
pub const REJECT_EXIT_CODE: u8 = 1;

/// Exit status when the argument count is wrong.
pub const USAGE_EXIT_CODE: u8 = 10;

pub fn exit_code_for(accepted: bool) -> u8 {
    if accepted {
        ACCEPT_EXIT_CODE
    } else {
        REJECT_EXIT_CODE
    }
}

/// Runs `kernel` on the single argument in `args` (program name first) and
/// returns the raw exit status. Usage goes to `stderr`.
pub fn status<K, I>(kernel: &K, args: I) -> u8
where
    K: Kernel + ?Sized,
    I: IntoIterator<Item = OsString>,
{
    status_to(kernel, args, &mut std::io::stderr())
}

/// [`status`] with usage text written to `err`.
pub fn status_to<K, I, W>(kernel: &K, args: I, err: &mut W) -> u8
where
    K: Kernel + ?Sized,
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    match single_argument(args) {
        Some(input) => exit_code_for(kernel.decide(&os_bytes(&input))),
        None => {
            usage(err, kernel.name());
            USAGE_EXIT_CODE
        }
    }
}

/// [`status`] as an [`ExitCode`], for use from `main`.
pub fn run<K, I>(kernel: &K, args: I) -> ExitCode
where
    K: Kernel + ?Sized,
    I: IntoIterator<Item = OsString>,
{
    ExitCode::from(status(kernel, args))
}

/// Runs the instrumented intersect variant. The marker writes `reached` to
/// `stderr`; the exit status is 0 when it fired and 1 otherwise.
pub fn probe_status<I>(args: I) -> u8
where
    I: IntoIterator<Item = OsString>,
{
    probe_status_to(args, &mut std::io::stderr())
}

/// [`probe_status`] with the marker line and usage text written to `err`.
pub fn probe_status_to<I, W>(args: I, err: &mut W) -> u8
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    match single_argument(args) {
        Some(input) => {
            let reach = intersect::decide_and_mark(&os_bytes(&input), || {
                let _ = writeln!(err, "reached");
            });
            exit_code_for(reach.is_reached())
        }
        None => {
            usage(err, "intersect-probe");
            USAGE_EXIT_CODE
        }
    }
}

fn single_argument<I>(args: I) -> Option<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter().skip(1);
    match (args.next(), args.next()) {
        (Some(input), None) => Some(input),
        _ => None,
    }
}

fn usage<W: Write>(err: &mut W, name: &str) {
    let _ = writeln!(err, "usage: {} <input>", name);
}

#[cfg(unix)]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

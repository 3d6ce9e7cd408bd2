//! The plugin states and the status line printed on stdout.
//!
use std::fmt;
use std::cmp::Ordering;
use std::process;
use log::*;
use crate::error::CheckError;

/// The four states of a monitoring plugin.
///
/// The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Status {
    pub fn exit_code(self) -> i32 {
        self as i32
    }
    /// Rank used to find the worst status: OK < WARNING < UNKNOWN < CRITICAL.
    fn severity(self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Unknown => 2,
            Status::Critical => 3,
        }
    }
    pub fn worst(self, other: Status) -> Status {
        if other.severity() > self.severity() { other } else { self }
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.severity().cmp(&other.severity())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        f.write_str(word)
    }
}

/// The single line a plugin prints: `<message> | <perfdata>`.
///
/// The message is expected to start with the status word.
/// The perfdata section is left out when there is no perfdata.
pub fn status_line(
    message: &str,
    perfdata: &str,
) -> String
{
    if perfdata.is_empty() {
        message.to_string()
    } else {
        format!("{} | {}", message, perfdata)
    }
}

/// Print the status line and exit with the exit code of the status.
pub fn print_and_exit(
    status: Status,
    line: &str,
) -> !
{
    info!("exit: {} ({})", status, status.exit_code());
    println!("{}", line);
    process::exit(status.exit_code())
}

/// Report an error that ends the plugin before anything was measured.
pub fn exit_with_error(error: &CheckError) -> ! {
    print_and_exit(error.status(), &format!("{}: {}", error.status(), error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_exit_codes() {
        assert_eq!(Status::Ok.exit_code(), 0);
        assert_eq!(Status::Warning.exit_code(), 1);
        assert_eq!(Status::Critical.exit_code(), 2);
        assert_eq!(Status::Unknown.exit_code(), 3);
    }

    #[test]
    fn unit_worst_status() {
        assert_eq!(Status::Ok.worst(Status::Warning), Status::Warning);
        assert_eq!(Status::Critical.worst(Status::Warning), Status::Critical);
        assert_eq!(Status::Unknown.worst(Status::Critical), Status::Critical);
        assert_eq!(Status::Warning.worst(Status::Unknown), Status::Unknown);
        assert_eq!([Status::Ok, Status::Critical, Status::Warning].into_iter().max(), Some(Status::Critical));
    }

    #[test]
    fn unit_status_line() {
        assert_eq!(status_line("OK: 5 volumes", "volumes=5;10;20;;"), "OK: 5 volumes | volumes=5;10;20;;");
        assert_eq!(status_line("UNKNOWN: Missing required arguments: --token", ""), "UNKNOWN: Missing required arguments: --token");
    }
}

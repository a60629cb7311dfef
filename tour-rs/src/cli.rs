//! Command-line argument parsing.
//!
//! Usage:
//!   tour [-n] [-d<ms>] [-s<section>]...

use std::time::Duration;

use thiserror::Error;

use crate::fetch::DEFAULT_FETCH_DELAY;
use crate::tour::Section;

pub const USAGE: &str = "Usage: tour [-hn] [-d<ms>] [-s<section>]...";

// ── Public types ──────────────────────────────────────────────────────────────

/// Parsed command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Delay before the deferred callback fires (`-d<ms>`).
    pub fetch_delay: Duration,
    /// Exit without waiting for the deferred callback (`-n`).
    pub no_wait: bool,
    /// Sections to run (`-s<name>`, repeatable).  Empty means all.
    pub sections: Vec<Section>,
    /// Print usage and exit (`-h`).
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            fetch_delay: DEFAULT_FETCH_DELAY,
            no_wait: false,
            sections: Vec::new(),
            help: false,
        }
    }
}

impl CliArgs {
    /// The sections to run, defaulting to the whole tour.
    pub fn selected(&self) -> &[Section] {
        if self.sections.is_empty() {
            Section::ALL
        } else {
            &self.sections
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("unknown option -{0}")]
    UnknownOption(char),
    #[error("-{0} requires an argument")]
    MissingValue(char),
    #[error("invalid delay {0:?}: expected milliseconds")]
    BadDelay(String),
    #[error("{0}")]
    BadSection(String),
    #[error("unexpected argument {0:?}")]
    Unexpected(String),
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Parse `std::env::args()`.
pub fn parse_args() -> Result<CliArgs, CliError> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    parse_argv(&raw)
}

/// Parse a slice of argument strings (exposed for testing).
pub fn parse_argv(argv: &[String]) -> Result<CliArgs, CliError> {
    let mut args = CliArgs::default();
    let mut i = 0;

    while i < argv.len() {
        let arg = argv[i].as_str();

        if !arg.starts_with('-') || arg == "-" {
            return Err(CliError::Unexpected(arg.to_owned()));
        }

        // Flag letters may be combined (`-nh`); value flags take the rest of
        // the token (`-d500`) or the next argument (`-d 500`).
        let chars: Vec<char> = arg[1..].chars().collect();
        let mut j = 0;
        while j < chars.len() {
            match chars[j] {
                'h' => args.help = true,
                'n' => args.no_wait = true,

                flag @ ('d' | 's') => {
                    let value = if j + 1 < chars.len() {
                        let s: String = chars[j + 1..].iter().collect();
                        j = chars.len();
                        s
                    } else if i + 1 < argv.len() {
                        i += 1;
                        argv[i].clone()
                    } else {
                        return Err(CliError::MissingValue(flag));
                    };
                    if flag == 'd' {
                        let ms: u64 = value.parse().map_err(|_| CliError::BadDelay(value))?;
                        args.fetch_delay = Duration::from_millis(ms);
                    } else {
                        let section = value.parse().map_err(CliError::BadSection)?;
                        args.sections.push(section);
                    }
                }

                other => return Err(CliError::UnknownOption(other)),
            }
            j += 1;
        }

        i += 1;
    }

    Ok(args)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let args = parse_argv(&[]).unwrap();
        assert_eq!(args.fetch_delay, Duration::from_secs(2));
        assert!(!args.no_wait);
        assert!(!args.help);
        assert_eq!(args.selected(), Section::ALL);
    }

    #[test]
    fn delay_attached_and_separate() {
        assert_eq!(
            parse_argv(&argv(&["-d250"])).unwrap().fetch_delay,
            Duration::from_millis(250)
        );
        assert_eq!(
            parse_argv(&argv(&["-d", "0"])).unwrap().fetch_delay,
            Duration::ZERO
        );
    }

    #[test]
    fn combined_flags() {
        let args = parse_argv(&argv(&["-nd10"])).unwrap();
        assert!(args.no_wait);
        assert_eq!(args.fetch_delay, Duration::from_millis(10));
    }

    #[test]
    fn repeated_sections() {
        let args = parse_argv(&argv(&["-sloops", "-s", "enums"])).unwrap();
        assert_eq!(args.selected(), &[Section::Loops, Section::Enums]);
    }

    #[test]
    fn errors() {
        assert_eq!(parse_argv(&argv(&["-x"])), Err(CliError::UnknownOption('x')));
        assert_eq!(parse_argv(&argv(&["-d"])), Err(CliError::MissingValue('d')));
        assert_eq!(
            parse_argv(&argv(&["-dsoon"])),
            Err(CliError::BadDelay("soon".into()))
        );
        assert!(matches!(
            parse_argv(&argv(&["-sbogus"])),
            Err(CliError::BadSection(_))
        ));
        assert_eq!(
            parse_argv(&argv(&["extra"])),
            Err(CliError::Unexpected("extra".into()))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(CliError::MissingValue('s').to_string(), "-s requires an argument");
        assert_eq!(
            CliError::BadSection("unknown section \"x\"".into()).to_string(),
            "unknown section \"x\""
        );
    }
}

//! Command-line and environment configuration for the binary.
//!
//! Environment variables are read first, then command-line flags override them:
//!
//! - `HANOI_DISKS` / `--disks N` (`-n N`): number of disks (default 3)
//! - `HANOI_HISTORY` / `--history M`: moves kept for undo (default 100)
//! - `HANOI_LOCK_ON_WIN` / `--lock-on-win`: refuse moves after the puzzle is solved
//!
//! Unparsable environment values fall back to the defaults; bad flags are errors.

use anyhow::{anyhow, Result};

use crate::core::PuzzleConfig;

pub const USAGE: &str = "\
usage: tui-hanoi [--disks N] [--history M] [--lock-on-win]

Drag a disk with the mouse (or press 1-3 to pick a rod, then 1-3 to drop).
Ctrl+Z undoes the last move, R restarts, Q quits.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(PuzzleConfig),
    Help,
}

/// Build a config from environment variables.
pub fn config_from_env() -> PuzzleConfig {
    config_from_vars(|key| std::env::var(key).ok())
}

/// Build a config from any variable lookup (the environment in production).
pub fn config_from_vars(get: impl Fn(&str) -> Option<String>) -> PuzzleConfig {
    let defaults = PuzzleConfig::default();

    let disk_count = get("HANOI_DISKS")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(defaults.disk_count);

    let history_capacity = get("HANOI_HISTORY")
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(defaults.history_capacity);

    let lock_on_win = get("HANOI_LOCK_ON_WIN")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(defaults.lock_on_win);

    PuzzleConfig {
        disk_count,
        history_capacity,
        lock_on_win,
    }
}

/// Parse command-line arguments (without the program name) on top of `base`.
pub fn parse_args(args: &[String], base: PuzzleConfig) -> Result<Command> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-n" | "--disks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --disks"))?;
                config.disk_count = v
                    .parse::<u8>()
                    .map_err(|_| anyhow!("invalid --disks value: {}", v))?;
            }
            "--history" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --history"))?;
                config.history_capacity = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("invalid --history value: {}", v))?;
            }
            "--lock-on-win" => config.lock_on_win = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    config.validate()?;
    Ok(Command::Play(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_keeps_base() {
        let base = PuzzleConfig::with_disks(4);
        assert_eq!(parse_args(&[], base).unwrap(), Command::Play(base));
    }

    #[test]
    fn flags_override_base() {
        let cmd = parse_args(
            &args(&["--disks", "5", "--history", "10", "--lock-on-win"]),
            PuzzleConfig::default(),
        )
        .unwrap();
        assert_eq!(
            cmd,
            Command::Play(PuzzleConfig {
                disk_count: 5,
                history_capacity: 10,
                lock_on_win: true,
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(
            parse_args(&args(&["-n", "4", "--help"]), PuzzleConfig::default()).unwrap(),
            Command::Help
        );
    }

    #[test]
    fn bad_flags_are_errors() {
        let base = PuzzleConfig::default();
        assert!(parse_args(&args(&["--disks"]), base).is_err());
        assert!(parse_args(&args(&["--disks", "many"]), base).is_err());
        assert!(parse_args(&args(&["--history", "-1"]), base).is_err());
        assert!(parse_args(&args(&["--fast"]), base).is_err());
    }

    #[test]
    fn zero_disks_is_a_config_error() {
        let err = parse_args(&args(&["--disks", "0"]), PuzzleConfig::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidDiskCount(0))
        );
    }

    #[test]
    fn env_values_and_fallbacks() {
        let config = config_from_vars(|key| match key {
            "HANOI_DISKS" => Some("6".to_string()),
            "HANOI_HISTORY" => Some("not a number".to_string()),
            "HANOI_LOCK_ON_WIN" => Some("TRUE".to_string()),
            _ => None,
        });
        assert_eq!(config.disk_count, 6);
        assert_eq!(config.history_capacity, 100);
        assert!(config.lock_on_win);

        assert_eq!(config_from_vars(|_| None), PuzzleConfig::default());
    }
}

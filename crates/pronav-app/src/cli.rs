//! Command-line arguments for the `pronav` binary.

use std::path::PathBuf;

use crate::config::AppError;

pub const USAGE: &str = "pronav: proportional-navigation intercept simulator\n\
\n\
Usage: pronav [options]\n\
\n\
  --config <path>     JSON config file (missing fields take defaults)\n\
  --max-time <secs>   Stop after this much simulated time (default: 120)\n\
  --realtime          Run at wall-clock pace on a loop thread\n\
  --tick-rate <hz>    Ticks per second in --realtime mode (default: 100)\n\
  --trace             Print every step as a JSON line\n\
  --help              Show this message\n";

pub const DEFAULT_MAX_TIME: f64 = 120.0;
pub const DEFAULT_TICK_RATE: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub max_time: f64,
    pub realtime: bool,
    pub tick_rate: f64,
    pub trace: bool,
    pub help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: None,
            max_time: DEFAULT_MAX_TIME,
            realtime: false,
            tick_rate: DEFAULT_TICK_RATE,
            trace: false,
            help: false,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, AppError> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => parsed.config = Some(PathBuf::from(value(&mut iter, arg)?)),
            "--max-time" => parsed.max_time = positive(value(&mut iter, arg)?, arg)?,
            "--tick-rate" => parsed.tick_rate = positive(value(&mut iter, arg)?, arg)?,
            "--realtime" => parsed.realtime = true,
            "--trace" => parsed.trace = true,
            "help" | "--help" | "-h" => parsed.help = true,
            other => return Err(AppError::Usage(format!("unknown argument: {other}"))),
        }
    }

    Ok(parsed)
}

fn value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a String, AppError> {
    iter.next()
        .ok_or_else(|| AppError::Usage(format!("{flag} requires a value")))
}

fn positive(raw: &str, flag: &str) -> Result<f64, AppError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(AppError::Usage(format!(
            "{flag} expects a positive number, got {raw}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let parsed = parse_args(&args(&[
            "--config",
            "run.json",
            "--max-time",
            "30",
            "--realtime",
            "--tick-rate",
            "60",
            "--trace",
        ]))
        .unwrap();

        assert_eq!(parsed.config, Some(PathBuf::from("run.json")));
        assert_eq!(parsed.max_time, 30.0);
        assert!(parsed.realtime);
        assert_eq!(parsed.tick_rate, 60.0);
        assert!(parsed.trace);
        assert!(!parsed.help);
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(&args(&["--config"])).unwrap_err();
        assert!(err.to_string().contains("--config requires a value"));
    }

    #[test]
    fn test_bad_number() {
        assert!(parse_args(&args(&["--max-time", "soon"])).is_err());
        assert!(parse_args(&args(&["--tick-rate", "-5"])).is_err());
        assert!(parse_args(&args(&["--tick-rate", "0"])).is_err());
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_args(&args(&["--fast"])).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }
}

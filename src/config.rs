use crate::refresh::DEFAULT_REFRESH_INTERVAL;

use anyhow::{bail, Context, Error, Result};

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub refresh_interval: Duration,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            title: "Timer".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_args(std::env::args().skip(1))
    }

    /// Parses `--refresh-ms <N>` and `--title <TEXT>`. Program name must already be stripped.
    pub fn from_args<I, S>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--refresh-ms" => {
                    let value = next_value(&mut args, &arg)?;
                    let ms: u64 = value
                        .parse()
                        .with_context(|| format!("Invalid refresh interval: {}", value))?;
                    if ms == 0 {
                        bail!("Refresh interval must be greater than zero");
                    }
                    config.refresh_interval = Duration::from_millis(ms);
                }
                "--title" => {
                    config.title = next_value(&mut args, &arg)?;
                }
                _ => bail!("Unknown argument: {}", arg),
            }
        }

        Ok(config)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .ok_or_else(|| Error::msg(format!("{} requires a value", flag)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = Config::from_args(Vec::<String>::new())?;
        assert_eq!(config, Config::default());
        assert_eq!(config.refresh_interval, Duration::from_millis(100));
        Ok(())
    }

    #[test]
    fn test_overrides() -> Result<()> {
        let config = Config::from_args(["--refresh-ms", "250", "--title", "Laps"])?;
        assert_eq!(config.refresh_interval, Duration::from_millis(250));
        assert_eq!(config.title, "Laps");
        Ok(())
    }

    #[test]
    fn test_invalid() {
        assert!(Config::from_args(["--refresh-ms", "0"]).is_err());
        assert!(Config::from_args(["--refresh-ms", "fast"]).is_err());
        assert!(Config::from_args(["--refresh-ms"]).is_err());
        assert!(Config::from_args(["--title"]).is_err());
        assert!(Config::from_args(["--verbose"]).is_err());
    }
}

use log::warn;
use std::env;

use crate::{Error, Result};

/// Environment variable consulted when `--source` is not given
pub const SOURCE_ENV_VAR: &str = "SSSP_SOURCE";

/// Output format of the demonstration driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for the demonstration driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub source: usize,
    pub format: OutputFormat,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            source: 0,
            format: OutputFormat::Text,
        }
    }
}

impl DriverConfig {
    /// Reads the configuration from the process arguments and environment
    pub fn from_env() -> Result<Self> {
        Self::parse(env::args().skip(1), env::var(SOURCE_ENV_VAR).ok())
    }

    /// Parses `--source <n>` and `--json` from `args`.
    ///
    /// `env_source` is used when no `--source` flag is present; an unparsable
    /// value there is ignored with a warning, while a bad flag is an error.
    pub fn parse<I>(args: I, env_source: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut source_flag = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" | "-s" => {
                    let value = args.next().ok_or_else(|| {
                        Error::InvalidArgument(format!("{} requires a vertex id", arg))
                    })?;
                    source_flag = Some(parse_vertex(&value)?);
                }
                "--json" => config.format = OutputFormat::Json,
                "--text" => config.format = OutputFormat::Text,
                other => {
                    return Err(Error::InvalidArgument(format!("unknown argument '{}'", other)))
                }
            }
        }

        config.source = match (source_flag, env_source) {
            (Some(source), _) => source,
            (None, Some(value)) => parse_vertex(&value).unwrap_or_else(|_| {
                warn!("ignoring {}={:?}, using vertex 0", SOURCE_ENV_VAR, value);
                0
            }),
            (None, None) => 0,
        };

        Ok(config)
    }
}

fn parse_vertex(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("'{}' is not a vertex id", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_to_vertex_zero_text() {
        let config = DriverConfig::parse(args(&[]), None).unwrap();
        assert_eq!(config, DriverConfig::default());
    }

    #[test]
    fn flag_overrides_environment() {
        let config =
            DriverConfig::parse(args(&["--source", "3", "--json"]), Some("2".into())).unwrap();
        assert_eq!(config.source, 3);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn environment_used_without_flag() {
        let config = DriverConfig::parse(args(&[]), Some(" 4 ".into())).unwrap();
        assert_eq!(config.source, 4);
    }

    #[test]
    fn bad_environment_value_falls_back() {
        let config = DriverConfig::parse(args(&[]), Some("north".into())).unwrap();
        assert_eq!(config.source, 0);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(matches!(
            DriverConfig::parse(args(&["--source"]), None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            DriverConfig::parse(args(&["--source", "-1"]), None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            DriverConfig::parse(args(&["--verbose"]), None),
            Err(Error::InvalidArgument(_))
        ));
    }
}

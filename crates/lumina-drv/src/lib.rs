//! The driver: reads a source file, builds a [`Session`], runs the
//! program, and turns the result into a process exit code.
//!
//! The interpreter deliberately has no flag parser — this crate's only
//! configurable surface is the source path and the `LUMINA_LOG` tracing
//! filter override.

use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The driver's configuration: a source file path, plus an optional
/// log-filter override read from `LUMINA_LOG`.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub log_filter: Option<String>,
}

impl Config {
    /// Builds a `Config` from a `std::env::args`-shaped iterator
    /// (argv[0] is skipped). Fails if no source path was given.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> anyhow::Result<Self> {
        args.next();
        let source = args
            .next()
            .ok_or_else(|| anyhow::anyhow!("usage: lumina <file>"))?;
        Ok(Config {
            source: PathBuf::from(source),
            log_filter: std::env::var("LUMINA_LOG").ok(),
        })
    }
}

/// Installs a `tracing_subscriber::fmt` subscriber. Defaults to `info`;
/// `LUMINA_LOG` overrides the filter directive.
pub fn init_logging(filter: Option<&str>) {
    let directive = filter.unwrap_or("info");
    let env_filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
}

/// One interpreter invocation: config plus whatever state accumulates
/// while running it.
pub struct Session {
    pub config: Config,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Reads the source file, parses it, and runs it to completion.
    /// Returns the process exit code: the truncated `last_return` if
    /// it's numeric, `0` otherwise.
    pub fn run(&self) -> anyhow::Result<i32> {
        let text = std::fs::read_to_string(&self.config.source).map_err(|source| {
            lumina_util::LuminaError::Io {
                path: self.config.source.display().to_string(),
                source,
            }
        })?;

        tracing::debug!(path = %self.config.source.display(), "parsing source file");
        let program = lumina_par::parse_program(&text)?;

        let mut ctx = lumina_rt::Context::new();
        tracing::debug!(statements = program.len(), "running program");
        lumina_rt::run_program(&program, &mut ctx)?;

        Ok(ctx.last_return.as_number().map(|n| n as i32).unwrap_or(0))
    }
}

/// Parses `std::env::args`, runs the program, and returns its exit code.
pub fn run() -> anyhow::Result<i32> {
    let config = Config::from_args(std::env::args())?;
    init_logging(config.log_filter.as_deref());
    Session::new(config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_args_requires_a_source_path() {
        let args = vec!["lumina".to_string()];
        assert!(Config::from_args(args.into_iter()).is_err());
    }

    #[test]
    fn config_from_args_takes_the_first_positional_arg() {
        let args = vec!["lumina".to_string(), "prog.lum".to_string()];
        let config = Config::from_args(args.into_iter()).unwrap();
        assert_eq!(config.source, PathBuf::from("prog.lum"));
    }
}

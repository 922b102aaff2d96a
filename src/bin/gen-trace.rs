#![deny(unsafe_code)]

#[path = "driver.rs"]
mod driver;

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use logging::LoggerConfig;

/// Environment variable consulted when no verbosity option is given.
const TRACE_ENV: &str = "GEN_TRACE";

/// Resolve declaration paths and print the nested generator trace.
#[derive(Debug, Parser)]
#[command(name = "gen-trace", version, about)]
struct Args {
    /// Enable the trace (repeatable; any count turns it on).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Force the trace on or off (on/off, true/false, yes/no, 1/0).
    #[arg(long, value_name = "TOGGLE")]
    trace: Option<LoggerConfig>,

    /// Declaration paths such as `module/func/arg`.
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<String>,
}

impl Args {
    /// `--trace` wins over `-v`, which wins over the environment.
    fn logger_config(&self, env_toggle: Option<OsString>) -> Result<LoggerConfig, String> {
        if let Some(config) = self.trace {
            return Ok(config);
        }
        if self.verbose > 0 {
            return Ok(LoggerConfig::from_verbose_level(self.verbose));
        }
        match env_toggle {
            None => Ok(LoggerConfig::disabled()),
            Some(value) => value
                .to_string_lossy()
                .parse()
                .map_err(|error| format!("{TRACE_ENV}: {error}")),
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse_from(env::args_os()) {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match args.logger_config(env::var_os(TRACE_ENV)) {
        Ok(config) => config,
        Err(message) => {
            let _ = writeln!(std::io::stderr(), "gen-trace: {message}");
            return ExitCode::FAILURE;
        }
    };
    config.apply();

    #[cfg(feature = "tracing")]
    logging::init_tracing();

    let tree = driver::DeclTree::from_paths(&args.paths);
    driver::generate(&tree);
    ExitCode::SUCCESS
}

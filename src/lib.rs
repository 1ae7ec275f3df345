use std::io::Write;

use anyhow::{Result, anyhow};
use clap::ArgMatches;
use log::{debug, error};

use crate::cli::{OutputMode, get_config_file, get_inputs, get_output_mode, get_root};
use crate::config::{Config, load_config, locate_config};
use crate::logging::log_conversion;
use crate::naming::{ConverterOptions, PathIdentifierConverter};

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod naming;
pub mod utils;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_verbosity};
    pub use crate::errors::{
        configuration_error, file_operation_error, generic_error, malformed_input_error,
        prefix_mismatch_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{LogLevel, init_logger, log_conversion};
    pub use crate::naming::{
        ConverterOptions, GeneratedName, PathIdentifierConverter, TypeNameGenerator,
    };
    pub use crate::perform_conversion;
}

/// Runs the command line: resolves configuration, converts every input and
/// prints the results to stdout
///
/// # Returns
/// * `Result<usize>` - Number of inputs that failed to convert
///
/// # Errors
/// Returns an error if the configuration cannot be resolved or no input is available
pub fn perform_conversion(argument_matches: &ArgMatches) -> Result<usize> {
    let mode = get_output_mode(argument_matches);
    let config = resolve_configuration(argument_matches, mode)?;
    let converter = config.converter()?;
    let inputs = get_inputs(argument_matches)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    convert_inputs(&converter, &inputs, mode, &mut out)
}

/// Converts each input and writes one line per success
///
/// Failures are logged and counted; conversion carries on with the next input.
///
/// # Errors
/// Returns an error only if writing to `out` fails
pub fn convert_inputs<W: Write>(
    converter: &PathIdentifierConverter,
    inputs: &[String],
    mode: OutputMode,
    out: &mut W,
) -> Result<usize> {
    let mut failures = 0;

    for input in inputs {
        let line = match mode {
            OutputMode::TypeName => converter.compute_type_name(input),
            OutputMode::Split => converter.compute_generated_name(input).map(|name| {
                format!("{}\t{}", name.namespace().unwrap_or_default(), name.type_name())
            }),
            OutputMode::Identifier => converter.convert_to_identifier(input),
        };

        match line {
            Ok(line) => {
                log_conversion(input, &line);
                writeln!(out, "{line}")?;
            }
            Err(e) => {
                error!("Failed to convert '{input}': {e}");
                failures += 1;
            }
        }
    }

    out.flush()?;
    Ok(failures)
}

fn resolve_configuration(argument_matches: &ArgMatches, mode: OutputMode) -> Result<Config> {
    let (config_file, explicit) = get_config_file(argument_matches);

    let config = match locate_config(&config_file) {
        Some(path) => load_config(&path)?,
        None if explicit => {
            return Err(anyhow!("Configuration file not found: {config_file}"));
        }
        None => {
            debug!("No configuration file at {config_file}, using defaults");
            Config::default()
        }
    };

    let mut config = config.with_root_override(get_root(argument_matches));

    // Sanitizing never looks at the root, so it need not be configured
    if mode == OutputMode::Identifier && config.namespace_root.is_none() {
        config.namespace_root = Some(String::new());
    }

    if argument_matches.get_flag("reference") {
        config.options = ConverterOptions::reference();
    }

    config.validate()?;
    Ok(config)
}

use std::ffi::OsString;
use std::io;

use atty::Stream;
use clap::parser::ValueSource;
use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version,
};

use crate::config::expand_path;
use crate::constants::{
    CONFIG_HELP, DEFAULT_CONFIG_PATH, IDENTIFIER_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP,
    PATHS_HELP, REFERENCE_HELP, ROOT_HELP, SPLIT_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::read_paths;

/// What gets printed for each input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full dotted type name
    TypeName,
    /// Namespace and type name separated by a tab
    Split,
    /// Input sanitized into an identifier
    Identifier,
}

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `paths`: Content paths to convert
/// - `config`: Path to the configuration file
/// - `root`: Namespace root override
/// - `identifier`, `split`, `reference`: Output and behavior switches
/// - `verbose`: Increase verbosity level
/// - `log_file`: Additional log destination
pub fn build_command() -> Command {
    let arg_paths = Arg::new("paths")
        .help(PATHS_HELP)
        .num_args(0..)
        .action(ArgAction::Append);

    // define arg for reading from a specific config file
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .help(CONFIG_HELP)
        .default_value(DEFAULT_CONFIG_PATH);

    let arg_root = Arg::new("root")
        .short('r')
        .long("root")
        .help(ROOT_HELP);

    let arg_identifier = Arg::new("identifier")
        .short('i')
        .long("identifier")
        .help(IDENTIFIER_HELP)
        .action(ArgAction::SetTrue)
        .conflicts_with("split");

    let arg_split = Arg::new("split")
        .short('s')
        .long("split")
        .help(SPLIT_HELP)
        .action(ArgAction::SetTrue);

    let arg_reference = Arg::new("reference")
        .long("reference")
        .help(REFERENCE_HELP)
        .action(ArgAction::SetTrue);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_paths)
        .arg(arg_config)
        .arg(arg_root)
        .arg(arg_identifier)
        .arg(arg_split)
        .arg(arg_reference)
        .arg(arg_verbose)
        .arg(log_file)
}

/// Parses the process arguments, exiting with usage on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Parses an explicit argument list
///
/// # Errors
/// Returns the clap error for invalid arguments
pub fn parse_args<I, T>(args: I) -> std::result::Result<ArgMatches, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_command().try_get_matches_from(args)
}

/// Gets the verbosity level from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the expanded log file path, empty when file logging is off
pub fn get_log_file(matches: &ArgMatches) -> String {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());
    if filename.is_empty() {
        filename
    } else {
        expand_path(&filename)
    }
}

pub fn get_output_mode(matches: &ArgMatches) -> OutputMode {
    if matches.get_flag("identifier") {
        OutputMode::Identifier
    } else if matches.get_flag("split") {
        OutputMode::Split
    } else {
        OutputMode::TypeName
    }
}

/// The config file argument, and whether the user gave it explicitly
pub fn get_config_file(matches: &ArgMatches) -> (String, bool) {
    let file = matches
        .get_one::<String>("config")
        .cloned()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let explicit = matches.value_source("config") == Some(ValueSource::CommandLine);
    (file, explicit)
}

pub fn get_root(matches: &ArgMatches) -> Option<&str> {
    matches.get_one::<String>("root").map(String::as_str)
}

/// Collects the inputs from the command line, or from stdin when none are given
///
/// # Errors
/// Returns an error if there are no inputs and stdin is a terminal
pub fn get_inputs(matches: &ArgMatches) -> Result<Vec<String>> {
    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if !paths.is_empty() {
        return Ok(paths);
    }

    if atty::is(Stream::Stdin) {
        return Err(generic_error(
            "No content paths given. Pass them as arguments or pipe them to stdin.",
        ));
    }

    read_paths(io::stdin().lock())
}

/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Separator between segments of a content path
pub const PATH_DELIMITER: char = '/';

/// A namespace root consisting of only this would strip every path bare
pub const ROOT_PATH: &str = "/";

/// Separator between namespace components of a generated name
pub const NAMESPACE_SEPARATOR: char = '.';

/// Word break that underscores are turned into before capitalization
pub const WORD_SEPARATOR: char = ' ';

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "pathid";

/// Help text for the paths positional argument
pub const PATHS_HELP: &str = "Content paths to convert (read from stdin when omitted)";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the root command-line option
pub const ROOT_HELP: &str = "Namespace root to strip from every path (overrides the config file)";

/// Help text for the identifier command-line option
pub const IDENTIFIER_HELP: &str = "Sanitize each input into an identifier instead of a type name";

/// Help text for the split command-line option
pub const SPLIT_HELP: &str = "Print namespace and type name separated by a tab";

/// Help text for the reference command-line option
pub const REFERENCE_HELP: &str = "Reproduce the legacy generator output exactly";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "pathid.yaml";

/// No log file unless one is requested
pub const LOG_FILE_DEFAULT: &str = "";

//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Personal Belongings Manager";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "pb";

/// Store file used when neither `--file` nor the config names one.
pub const DEFAULT_STORE_FILE: &str = "pb.yaml";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Belongings";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PB_CONFIG_DIR";

/// Set to `0` to disable colored output.
pub const COLOR_ENV: &str = "PB_COLOR";

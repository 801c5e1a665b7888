pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(not(windows))]
pub const EXEC_NAME: &str = "stratus";
#[cfg(windows)]
pub const EXEC_NAME: &str = "stratus.exe";

/// Session store location, relative to the home directory.
pub const SESSION_STORE_PATH: &str = ".stratus/session.yml";

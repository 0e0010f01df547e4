/// Creation date format written into the header: "10-16-2026"
pub(crate) const DATE_FORMAT: &str = "%m-%d-%Y";

/// rwxr-xr-x
#[cfg(unix)]
pub(crate) const SCRIPT_MODE: u32 = 0o755;

/// Config file name used under the per-user config directories
pub(crate) const CONFIG_FILE: &str = "config.toml";

/// Directory name under `~/.config` and the platform config dir
pub(crate) const APP_NAME: &str = "pyfile";

pub(crate) const HELP_FOOTER: &str = "Warning: -f overwrites existing files without asking";

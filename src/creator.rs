//! Script file creation
//!
//! Writes the header template to a path, creating parent directories as
//! needed, and marks the result executable on unix.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::error::{CreateError, IoAction};
use crate::template;
use crate::utils::debug_enabled;

/// Create a new script at `path` dated today.
///
/// Fails with [`CreateError::AlreadyExists`] when something is already at
/// `path` and `force` is false.
pub(crate) fn create_script(path: &Path, force: bool) -> Result<(), CreateError> {
    create_script_dated(path, force, Local::now().date_naive())
}

pub(crate) fn create_script_dated(
    path: &Path,
    force: bool,
    date: NaiveDate,
) -> Result<(), CreateError> {
    if path.exists() && !force {
        return Err(CreateError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let Some(name) = template::file_name(path) else {
        return Err(CreateError::InvalidPath {
            path: path.to_path_buf(),
        });
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        if debug_enabled() {
            eprintln!("[DEBUG] Creating directory {}", parent.display());
        }
        fs::create_dir_all(parent).map_err(|source| CreateError::Io {
            path: path.to_path_buf(),
            action: IoAction::CreateDirs,
            source,
        })?;
    }

    let text = template::render(&name, date);
    if debug_enabled() {
        eprintln!("[DEBUG] Writing {} bytes to {}", text.len(), path.display());
    }
    fs::write(path, text).map_err(|source| CreateError::Io {
        path: path.to_path_buf(),
        action: IoAction::Write,
        source,
    })?;

    set_executable(path)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), CreateError> {
    use std::os::unix::fs::PermissionsExt;

    use crate::consts::SCRIPT_MODE;

    if debug_enabled() {
        eprintln!("[DEBUG] Setting mode {:o} on {}", SCRIPT_MODE, path.display());
    }
    fs::set_permissions(path, fs::Permissions::from_mode(SCRIPT_MODE)).map_err(|source| {
        CreateError::Io {
            path: path.to_path_buf(),
            action: IoAction::SetPermissions,
            source,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), CreateError> {
    Ok(())
}

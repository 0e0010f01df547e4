use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CreateError {
    #[error("File exists: use \"-f\" option to force overwrite")]
    AlreadyExists { path: PathBuf },

    #[error("Invalid path \"{}\": no file name", path.display())]
    InvalidPath { path: PathBuf },

    #[error("Failed to {action} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        action: IoAction,
        #[source]
        source: std::io::Error,
    },
}

/// Step of file creation that hit an I/O failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IoAction {
    CreateDirs,
    Write,
    SetPermissions,
}

impl std::fmt::Display for IoAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IoAction::CreateDirs => "create directories for",
            IoAction::Write => "write",
            IoAction::SetPermissions => "set permissions on",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Help requested")]
    HelpRequested,

    #[error("No files given")]
    NoFiles,

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),
}

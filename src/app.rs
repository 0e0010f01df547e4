use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::Cli;
use crate::creator::create_script;
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Outcome counts for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) created: usize,
    pub(crate) failed: usize,
}

/// Create every file in `files`, reporting one line per file to `out`.
///
/// A failure is reported and the loop moves on to the next file.
pub(crate) fn create_all<W: Write>(
    files: &[PathBuf],
    force: bool,
    quiet: bool,
    out: &mut W,
) -> io::Result<Summary> {
    let mut summary = Summary::default();

    for file in files {
        match create_script(file, force) {
            Ok(()) => {
                summary.created += 1;
                if !quiet {
                    writeln!(out, "Created: {}", file.display())?;
                }
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(out, "[{}] {}", file.display(), e)?;
            }
        }
    }

    Ok(summary)
}

/// Run the driver for already-merged CLI options
pub(crate) fn run(cli: &Cli) -> Result<Summary, AppError> {
    if cli.help {
        return Err(AppError::HelpRequested);
    }
    if cli.files.is_empty() {
        return Err(AppError::NoFiles);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary =
        create_all(&cli.files, cli.force, cli.quiet, &mut out).map_err(AppError::Output)?;

    if debug_enabled() {
        eprintln!(
            "[DEBUG] {} created, {} failed",
            summary.created, summary.failed
        );
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn creates_each_file_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        let b = dir.path().join("b.py");
        let mut buf = Vec::new();

        let summary = create_all(&[a.clone(), b.clone()], false, false, &mut buf).unwrap();

        assert_eq!(summary, Summary { created: 2, failed: 0 });
        assert!(a.is_file());
        assert!(b.is_file());
        let text = output(buf);
        assert_eq!(
            text,
            format!("Created: {}\nCreated: {}\n", a.display(), b.display())
        );
    }

    #[test]
    fn failure_does_not_stop_later_files() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let bad = blocker.join("a.py");
        let good = dir.path().join("b.py");
        let mut buf = Vec::new();

        let summary = create_all(&[bad.clone(), good.clone()], false, false, &mut buf).unwrap();

        assert_eq!(summary, Summary { created: 1, failed: 1 });
        assert!(good.is_file());
        let text = output(buf);
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with(&format!("[{}] ", bad.display())));
        assert_eq!(lines.next().unwrap(), format!("Created: {}", good.display()));
    }

    #[test]
    fn existing_file_reported_with_hint() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        fs::write(&a, "keep").unwrap();
        let mut buf = Vec::new();

        let summary = create_all(&[a.clone()], false, false, &mut buf).unwrap();

        assert_eq!(summary.failed, 1);
        assert_eq!(fs::read_to_string(&a).unwrap(), "keep");
        assert_eq!(
            output(buf),
            format!(
                "[{}] File exists: use \"-f\" option to force overwrite\n",
                a.display()
            )
        );
    }

    #[test]
    fn force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        fs::write(&a, "old").unwrap();
        let mut buf = Vec::new();

        let summary = create_all(&[a.clone()], true, false, &mut buf).unwrap();

        assert_eq!(summary.created, 1);
        assert!(fs::read_to_string(&a).unwrap().contains("# File: a.py"));
    }

    #[test]
    fn quiet_only_prints_failures() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        let existing = dir.path().join("e.py");
        fs::write(&existing, "").unwrap();
        let mut buf = Vec::new();

        create_all(&[a, existing.clone()], false, true, &mut buf).unwrap();

        let text = output(buf);
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with(&format!("[{}]", existing.display())));
    }

    #[test]
    fn run_without_files_is_error() {
        use clap::Parser;
        let cli = Cli::parse_from(["pyfile"]);
        assert!(matches!(run(&cli), Err(AppError::NoFiles)));
    }

    #[test]
    fn run_with_help_creates_nothing() {
        use clap::Parser;
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        let cli = Cli::parse_from([
            std::ffi::OsStr::new("pyfile"),
            std::ffi::OsStr::new("-h"),
            a.as_os_str(),
        ]);

        assert!(matches!(run(&cli), Err(AppError::HelpRequested)));
        assert!(!a.exists());
    }
}

//! CLI argument definitions
//!
//! Recognized flags are pulled out of the argument list wherever they
//! appear; everything left over is a file to create, even names that start
//! with `-`.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::Config;
use crate::consts::HELP_FOOTER;

#[derive(Parser, Debug)]
#[command(name = "pyfile")]
#[command(
    about = "Creates an empty python script file to expedite the writing of utility programs",
    version,
    after_help = HELP_FOOTER,
    disable_help_flag = true,
    args_override_self = true
)]
pub(crate) struct Cli {
    /// Python files to create
    #[arg(value_name = "FILE")]
    pub(crate) files: Vec<PathBuf>,

    /// Force overwrite if a file already exists (be careful)
    #[arg(short, long)]
    pub(crate) force: bool,

    /// Only report failures
    #[arg(short, long)]
    pub(crate) quiet: bool,

    /// Enable debug output (show each step on stderr)
    #[arg(long)]
    pub(crate) debug: bool,

    /// Print this help message
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub(crate) help: bool,
}

impl Cli {
    pub(crate) fn parse_env() -> Self {
        Self::parse_from(split_flags(std::env::args_os()))
    }

    /// Merge config file values into CLI (CLI args take precedence).
    /// Force only ever comes from the command line.
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.quiet && config.quiet {
            self.quiet = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        self
    }
}

/// Reorder `args` (program name first) into `prog <flags...> -- <files...>`.
///
/// An argument is a flag only if it is a known `--long` or a cluster of
/// known short letters. Anything after a user-supplied `--` is a file.
pub(crate) fn split_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();
    let shorts: Vec<char> = cmd.get_arguments().filter_map(|a| a.get_short()).collect();
    let longs: Vec<&str> = cmd.get_arguments().filter_map(|a| a.get_long()).collect();

    let mut args = args.into_iter().map(Into::into);
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut files = Vec::new();
    let mut escaped = false;

    for arg in args {
        if escaped {
            files.push(arg);
            continue;
        }
        if arg == "--" {
            escaped = true;
            continue;
        }
        let is_flag = match arg.to_str() {
            Some(s) => {
                if let Some(long) = s.strip_prefix("--") {
                    longs.contains(&long)
                } else if let Some(cluster) = s.strip_prefix('-') {
                    !cluster.is_empty() && cluster.chars().all(|c| shorts.contains(&c))
                } else {
                    false
                }
            }
            None => false,
        };
        if is_flag {
            flags.push(arg);
        } else {
            files.push(arg);
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(files);
    flags
}

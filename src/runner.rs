//! Process execution seam.
//!
//! Everything that touches the host (tool lookup and spawning) goes through
//! [`ToolRunner`] so the deploy flow can be exercised without curl installed.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Host operations needed to run an external tool
pub trait ToolRunner {
    /// Resolve `tool` on the search path, `None` if it is not installed
    fn which(&self, tool: &str) -> Option<PathBuf>;

    /// Run `program` with `args` to completion and return its exit code.
    ///
    /// `Ok(None)` means the process ended without an exit code (killed by a
    /// signal).
    fn exec(&self, program: &Path, args: &[String]) -> io::Result<Option<i32>>;
}

/// Runs tools on the local machine with inherited stdio
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    /// Search path override; `None` uses `PATH`
    search_path: Option<OsString>,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look tools up in `paths` instead of `PATH`
    pub fn with_search_path(paths: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }
}

impl ToolRunner for SystemRunner {
    fn which(&self, tool: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(tool, Some(paths), cwd).ok()
            }
            None => which::which(tool).ok(),
        }
    }

    fn exec(&self, program: &Path, args: &[String]) -> io::Result<Option<i32>> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.code())
    }
}

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::core::errors::{KeyarmorError, Result};
use crate::core::models::tool_output::ToolOutput;
use crate::core::traits::key_tool::KeyTool;

/// Default name of the GnuPG binary, looked up on `PATH`.
pub const DEFAULT_GPG_BIN: &str = "gpg";

/// `KeyTool` that shells out to the system `gpg` binary.
///
/// Stdout and stderr are captured separately; stdin is closed so gpg never
/// waits on the terminal for input.
pub struct GpgTool {
    /// Path to the gpg binary (defaults to "gpg").
    gpg_path: PathBuf,
    /// Display name used in error messages.
    program: String,
}

impl GpgTool {
    /// Create a tool with a custom gpg binary path.
    pub fn with_path(gpg_path: PathBuf) -> Self {
        let program = gpg_path.display().to_string();
        Self { gpg_path, program }
    }

    pub fn path(&self) -> &Path {
        &self.gpg_path
    }

    /// First line of `gpg --version`, or `None` if gpg is not usable.
    pub fn version(&self) -> Option<String> {
        let output = Command::new(&self.gpg_path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()
            .filter(|o| o.status.success())?;
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|l| l.trim().to_string())
    }
}

impl KeyTool for GpgTool {
    fn run(&self, args: &[&str]) -> Result<ToolOutput> {
        debug!(gpg = %self.program, ?args, "running gpg");
        let output = Command::new(&self.gpg_path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| KeyarmorError::ToolLaunch {
                program: self.program.clone(),
                reason: e.to_string(),
            })?;
        Ok(output.into())
    }

    fn program(&self) -> &str {
        &self.program
    }
}

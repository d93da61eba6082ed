use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::cli::context::Settings;
use crate::cli::output;
use crate::core::errors::{KeyarmorError, Result};

/// Execute `keyarmor public <KEY_ID>`.
pub fn execute_public(
    settings: &Settings,
    key_id: &str,
    out_file: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let armored = settings.exporter().export_public_key(key_id)?;
    emit(&armored, out_file, 0o644)?;
    if let Some(path) = out_file
        && !quiet
    {
        output::success(&format!(
            "Public key {key_id} written to {}",
            path.display()
        ));
    }
    Ok(())
}

/// Execute `keyarmor secret <KEY_ID>`.
pub fn execute_secret(
    settings: &Settings,
    key_id: &str,
    out_file: Option<&Path>,
    quiet: bool,
) -> Result<()> {
    let armored = settings.exporter().export_secret_key(key_id)?;
    emit(&armored, out_file, 0o600)?;
    if let Some(path) = out_file
        && !quiet
    {
        output::success(&format!(
            "Secret key {key_id} written to {}",
            path.display()
        ));
    }
    Ok(())
}

/// Write key bytes unchanged to `out_file` (created with `mode` on Unix)
/// or to stdout.
fn emit(armored: &[u8], out_file: Option<&Path>, mode: u32) -> Result<()> {
    let Some(path) = out_file else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(armored)?;
        stdout.flush()?;
        return Ok(());
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let to_output_error = |e: std::io::Error| KeyarmorError::OutputFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    let mut file = options.open(path).map_err(to_output_error)?;
    file.write_all(armored).map_err(to_output_error)?;
    Ok(())
}

use crate::cli::context::Settings;
use crate::cli::output;
use crate::core::errors::Result;

/// Execute `keyarmor status`.
pub fn execute(settings: &Settings) -> Result<()> {
    output::header("keyarmor status");

    let gpg = settings.gpg_tool();
    output::field("gpg", &gpg.path().display().to_string());
    match gpg.version() {
        Some(version) => output::field("Version", &version),
        None => {
            output::field("Version", "unavailable");
            output::warning("gpg could not be run. Install GnuPG or pass --gpg <path>.");
        }
    }

    let cache = match (&settings.cache_path, settings.cache_enabled) {
        (Some(path), _) => path.display().to_string(),
        (None, true) => "unavailable (no home directory)".to_string(),
        (None, false) => "disabled".to_string(),
    };
    output::field("Cache", &cache);
    Ok(())
}

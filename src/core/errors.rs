use std::path::PathBuf;

/// All domain errors for keyarmor.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger. Cache faults never show up here:
/// they degrade to a cache miss or an unwritten cache.
#[derive(Debug, thiserror::Error)]
pub enum KeyarmorError {
    #[error(
        "Failed to run '{program}': {reason}\n\n  \
         Check that GnuPG is installed and on your PATH,\n  \
         or point keyarmor at it with --gpg <path> (env KEYARMOR_GPG)."
    )]
    ToolLaunch { program: String, reason: String },

    #[error("'{program}' exited with {status}: {stderr}")]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Got error while exporting gpg key: '{message}'")]
    KeyExport { message: String },

    #[error("Key cache at {path} is unusable: {detail}")]
    CacheUnusable { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Cannot write key to {path}: {reason}")]
    OutputFailed { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KeyarmorError>;

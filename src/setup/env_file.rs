//! Secrets file bootstrap from the generated template.

use std::path::Path;

use super::SetupError;

/// What [`bootstrap_env_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// The secrets file was already present and left untouched.
    AlreadyExists,
    /// The secrets file was created from the template.
    Created,
    /// Neither file exists; the template must be generated first.
    TemplateMissing,
}

/// Create the secrets file from the template if it does not exist yet.
///
/// An existing secrets file is never modified, so running this repeatedly
/// is safe.
pub fn bootstrap_env_file(secrets: &Path, template: &Path) -> Result<EnvFileStatus, SetupError> {
    if secrets.exists() {
        return Ok(EnvFileStatus::AlreadyExists);
    }
    if !template.exists() {
        return Ok(EnvFileStatus::TemplateMissing);
    }

    let content = std::fs::read_to_string(template).map_err(|e| SetupError::Io {
        path: template.to_path_buf(),
        source: e,
    })?;
    std::fs::write(secrets, content).map_err(|e| SetupError::Io {
        path: secrets.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(from = %template.display(), to = %secrets.display(), "created env file");
    Ok(EnvFileStatus::Created)
}

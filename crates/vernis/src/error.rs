//! CLI errors.

use std::path::PathBuf;
use vernis_atelier::{RegistryError, SectionError};
use vernis_relief::PropsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Props(#[from] PropsError),

    #[error("expected AXIS=VALUE, got '{0}'")]
    InvalidSet(String),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

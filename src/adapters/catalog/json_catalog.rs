//! Implements MinistryCatalogPort from a JSON document on disk.
//!
//! Read once at process init and never mutated afterwards.

use crate::domain::{DomainError, MinistryDefinition};
use crate::ports::MinistryCatalogPort;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Catalog document version this build understands.
pub const CATALOG_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    version: u32,
    ministries: Vec<MinistryDefinition>,
}

/// Ministry catalog loaded from an external JSON file.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    ministries: Vec<MinistryDefinition>,
}

impl JsonCatalog {
    /// Load and validate the catalog at `path`.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Catalog(format!("read {}: {}", path.display(), e)))?;
        let catalog = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            ministries = catalog.ministries.len(),
            "loaded ministry catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        let file: CatalogFile = serde_json::from_str(content)
            .map_err(|e| DomainError::Catalog(format!("invalid catalog JSON: {}", e)))?;
        if file.version != CATALOG_FORMAT_VERSION {
            return Err(DomainError::Catalog(format!(
                "unsupported catalog version {} (expected {})",
                file.version, CATALOG_FORMAT_VERSION
            )));
        }
        for ministry in &file.ministries {
            ministry.validate()?;
        }
        Ok(Self {
            ministries: file.ministries,
        })
    }
}

impl MinistryCatalogPort for JsonCatalog {
    fn ministries(&self) -> &[MinistryDefinition] {
        &self.ministries
    }
}

//! Outbound ports. Application calls into data and lookup adapters.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, GiftKey, GiftScores, MinistryDefinition};

/// Display-name lookup for gifts. Used only to render descriptions.
pub trait GiftNamePort: Send + Sync {
    fn display_name(&self, gift: GiftKey) -> Option<String>;
}

/// Display name for `gift`, or the raw key when the lookup misses.
pub fn display_name_or_key(names: &dyn GiftNamePort, gift: GiftKey) -> String {
    names
        .display_name(gift)
        .unwrap_or_else(|| gift.as_str().to_string())
}

/// Read-only ministry catalog, loaded once at startup.
pub trait MinistryCatalogPort: Send + Sync {
    fn ministries(&self) -> &[MinistryDefinition];
}

/// Source of a user's raw gift scores (file, quiz export, ...).
#[async_trait::async_trait]
pub trait ScoreSourcePort: Send + Sync {
    async fn load_scores(&self) -> Result<GiftScores, DomainError>;
}

//! Gift display-name tables. Implement GiftNamePort.

use crate::domain::GiftKey;
use crate::ports::GiftNamePort;
use std::collections::HashMap;

/// Portuguese names used throughout the application.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortugueseGiftNames;

impl GiftNamePort for PortugueseGiftNames {
    fn display_name(&self, gift: GiftKey) -> Option<String> {
        let name = match gift {
            GiftKey::Prophecy => "Profecia",
            GiftKey::Service => "Serviço",
            GiftKey::Teaching => "Ensino",
            GiftKey::Exhortation => "Exortação",
            GiftKey::Giving => "Contribuição",
            GiftKey::Leadership => "Liderança",
            GiftKey::Mercy => "Misericórdia",
        };
        Some(name.to_string())
    }
}

/// Map-backed name table. Gifts without an entry fall back to their raw key.
#[derive(Debug, Clone, Default)]
pub struct TableGiftNames {
    names: HashMap<GiftKey, String>,
}

impl TableGiftNames {
    pub fn new(names: impl IntoIterator<Item = (GiftKey, String)>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }
}

impl GiftNamePort for TableGiftNames {
    fn display_name(&self, gift: GiftKey) -> Option<String> {
        self.names.get(&gift).cloned()
    }
}

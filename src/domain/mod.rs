//! Core domain layer. No external I/O dependencies.
//!
//! Gift keys, score maps, the synergy matrix and the output records live here.

pub mod entities;
pub mod errors;
pub mod gift;
pub mod synergy;

pub use entities::{
    DominancePattern, GiftCompatibility, MinistryDefinition, MinistryRecommendation,
    ProfileInsight, ProfileReport, RankedGift,
};
pub use errors::DomainError;
pub use gift::{GiftKey, GiftScores};
pub use synergy::{SynergyEntry, SynergyRelation, synergy_entry};

//! Application use cases. Scoring services over the domain tables.

pub mod compatibility_service;
pub mod insight_service;
pub mod ministry_service;
pub mod profile_service;

pub use compatibility_service::CompatibilityService;
pub use insight_service::InsightService;
pub use ministry_service::{MAX_RECOMMENDATIONS, MinistryService};
pub use profile_service::{DEFAULT_TOP_GIFTS, ProfileService};

//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by UI/adapter into the application
//! - Outbound: Called by application into data sources and lookup tables

pub mod inbound;
pub mod outbound;

pub use inbound::InputPort;
pub use outbound::{GiftNamePort, MinistryCatalogPort, ScoreSourcePort, display_name_or_key};

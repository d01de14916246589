//! gift-profile: spiritual gifts scoring engine with Hexagonal Architecture.
//!
//! Ranks a user's gifts, scores gift synergies, recommends ministries and
//! classifies the profile shape. The scoring core is pure and total.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;

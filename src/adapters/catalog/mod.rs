//! Ministry catalogs. Implement MinistryCatalogPort.
//!
//! Built-in table by default; a versioned JSON file can replace it at startup.

pub mod builtin;
pub mod json_catalog;

pub use builtin::BuiltinCatalog;
pub use json_catalog::{CATALOG_FORMAT_VERSION, JsonCatalog};

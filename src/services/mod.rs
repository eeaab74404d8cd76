// Service exports
pub mod catalog;

pub use catalog::{InfluencerCatalog, CatalogError};

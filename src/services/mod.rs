// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;
pub mod ordered_collection;


pub use catalog_service::{CatalogService, CatalogTotals};
pub use ordered_collection::OrderedCollectionManager;

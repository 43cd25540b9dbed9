//! Product catalog domain.
//!
//! This crate joins products to their categories and owners and derives the
//! rows a catalog view shows from the active filter criteria. It is pure
//! domain logic: apart from reading data files, no IO and no rendering.

pub mod engine;
pub mod error;
pub mod filter;
pub mod model;
pub mod reference;

pub use engine::{derive_visible_products, enrich_products};
pub use error::{CatalogError, CatalogResult};
pub use filter::{CategorySelection, FilterAction, FilterState};
pub use model::{Category, EnrichedProduct, Product, Sex, User};
pub use reference::{DanglingReference, ReferenceData};

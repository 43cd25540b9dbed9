//! `catalogview-viewer`
//!
//! **Responsibility:** presentation adapters for the product catalog.
//!
//! This crate provides:
//! - The view model every renderer shares (rows, control state, empty indicator)
//! - A viewer session owning the filter state
//! - A terminal renderer and CLI
//! - A Leptos browser frontend (WASM builds only)

pub mod config;
pub mod presenter;
pub mod render;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::DataSource;
pub use presenter::{CatalogView, ControlPanel, ProductRow, NO_MATCHING_MESSAGE};
pub use session::ViewerSession;

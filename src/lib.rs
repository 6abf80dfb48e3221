//! Searchable CSS utility-class cheatsheet.
//!
//! This crate loads a static JSON catalogue of utility classes, normalizes it
//! into categories → utility groups → class entries, and answers search
//! queries with a filtered catalogue plus the set of groups to show expanded.
//!
//! The binary `tailsheet` prints filtered results as text or JSON; the
//! `tailsheet-gui` binary (feature `egui`) is the interactive viewer.

pub mod builtin;
pub mod catalogue;
pub mod color;
pub mod config;
pub mod debounce;
pub mod docs;
pub mod error;
pub mod logging;
pub mod model;
pub mod report;
pub mod search;
pub mod source;
pub mod view;

// Optional GUI functionality lives behind the `egui` feature flag.
#[cfg(feature = "egui")]
pub mod egui_app;

pub use catalogue::{load_catalogue, CatalogueBuilder};
pub use config::SheetConfig;
pub use error::{Result, SheetError};
pub use model::{Catalogue, Category, ClassEntry, GroupId, UtilityGroup};
pub use search::{search, MemoizedIndex, Query, SearchIndex, SearchOutcome};
pub use view::{SheetView, Theme};

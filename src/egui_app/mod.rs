//! Egui-based interactive cheatsheet viewer (feature = "egui").
//!
//! The toolkit-independent state lives in [`crate::view::SheetView`]; this
//! module only renders it and forwards input.

#![cfg(feature = "egui")]

mod state;
mod text;
mod ui;

pub use state::CheatsheetApp;
pub use text::{gradient_stops, highlight_query_job};

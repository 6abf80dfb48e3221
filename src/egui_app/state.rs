#![cfg(feature = "egui")]

use std::sync::Arc;

use eframe::egui;

use crate::config::SheetConfig;
use crate::model::Catalogue;
use crate::view::{SheetView, Theme};

/// Interactive Egui application showing a searchable cheatsheet.
pub struct CheatsheetApp {
    pub view: SheetView,
    /// Buffer bound to the search field.
    pub search_text: String,
    /// Recompute count the collapsing headers were last synced to.
    pub(super) synced_generation: Option<u64>,
    /// Theme last pushed to the egui context.
    pub(super) applied_theme: Option<Theme>,
}

impl CheatsheetApp {
    /// Create a new app over a catalogue built at session start.
    pub fn new(catalogue: Arc<Catalogue>, config: &SheetConfig) -> Self {
        Self {
            view: SheetView::new(catalogue, config),
            search_text: String::new(),
            synced_generation: None,
            applied_theme: None,
        }
    }

    /// Start in the given theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        if self.view.theme() != theme {
            self.view.toggle_theme();
        }
        self
    }
}

impl eframe::App for CheatsheetApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        super::ui::update(self, ctx, frame);
    }
}

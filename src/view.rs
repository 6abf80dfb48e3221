//! Toolkit-independent state of the cheatsheet view.
//!
//! [`SheetView`] owns everything a renderer needs between frames: the raw
//! text in the search field, the debounced query actually applied, the
//! filtered catalogue with its expansion set, the theme, and pending focus
//! requests from the search shortcut. The egui front end drives it once per
//! frame; tests drive it with synthetic instants.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::config::SheetConfig;
use crate::debounce::Debouncer;
use crate::docs::docs_url_with_base;
use crate::model::{Catalogue, GroupId, UtilityGroup};
use crate::search::{search, MemoizedIndex, Query, SearchOutcome};

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// True for the focus-search chord: K with Ctrl, or Cmd on macOS.
///
/// `command` is the platform's primary modifier as reported by the toolkit.
pub fn is_focus_search_shortcut(command: bool, key: char) -> bool {
    command && key.eq_ignore_ascii_case(&'k')
}

pub struct SheetView {
    catalogue: Arc<Catalogue>,
    index: MemoizedIndex,
    docs_base: String,
    raw_query: String,
    applied: Query,
    debouncer: Debouncer<String>,
    outcome: SearchOutcome,
    theme: Theme,
    focus_requested: bool,
    recomputations: u64,
}

impl SheetView {
    /// Create a view over a catalogue built at session start.
    pub fn new(catalogue: Arc<Catalogue>, config: &SheetConfig) -> Self {
        let index = MemoizedIndex::new(Arc::clone(&catalogue));
        let outcome = SearchOutcome {
            catalogue: (*catalogue).clone(),
            expanded: HashSet::new(),
        };
        Self {
            catalogue,
            index,
            docs_base: config.docs_base.clone(),
            raw_query: String::new(),
            applied: Query::default(),
            debouncer: Debouncer::new(config.debounce),
            outcome,
            theme: Theme::default(),
            focus_requested: false,
            recomputations: 0,
        }
    }

    pub fn catalogue(&self) -> &Arc<Catalogue> {
        &self.catalogue
    }

    /// Text currently in the search field.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// The query the visible results were computed from.
    pub fn applied_query(&self) -> &Query {
        &self.applied
    }

    /// Record a change of the search field. Results update on a later [`tick`](Self::tick).
    pub fn on_input(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.debouncer.push(text.clone(), now);
        self.raw_query = text;
    }

    /// Apply the debounced query if its quiet period has elapsed.
    ///
    /// Returns true when results were recomputed. A fired value that
    /// normalizes to the already-applied query recomputes nothing.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(text) = self.debouncer.poll(now) else {
            return false;
        };
        let query = Query::new(&text);
        if query == self.applied {
            return false;
        }
        let index = self.index.get(&self.catalogue);
        self.outcome = search(&self.catalogue, index, &query);
        self.applied = query;
        self.recomputations += 1;
        debug!(
            query = self.applied.as_str(),
            recomputations = self.recomputations,
            "view recomputed"
        );
        true
    }

    /// How long until a pending input is applied, if any.
    pub fn pending_delay(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Filtered catalogue for the applied query.
    pub fn visible(&self) -> &Catalogue {
        &self.outcome.catalogue
    }

    pub fn expanded(&self) -> &HashSet<GroupId> {
        &self.outcome.expanded
    }

    pub fn is_expanded(&self, group: &UtilityGroup) -> bool {
        self.outcome.is_expanded(group)
    }

    /// Number of times filtering and expansion have been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// How many times the search index has been built for this view.
    pub fn index_builds(&self) -> u32 {
        self.index.builds()
    }

    pub fn docs_url(&self, group: &UtilityGroup) -> String {
        docs_url_with_base(&self.docs_base, &group.title)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Feed a key press; returns true when the view consumed it.
    pub fn handle_shortcut(&mut self, command: bool, key: char) -> bool {
        if is_focus_search_shortcut(command, key) {
            self.focus_requested = true;
            return true;
        }
        false
    }

    /// Take a pending request to focus the search field.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

use std::time::Duration;

use crate::catalogue::DEFAULT_SKIP_LEADING;
use crate::docs::DOCS_BASE_URL;

/// Quiet period after the last keystroke before a query is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// Session settings. The binaries fill this from their command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Leading data-file categories to ignore (covered by the built-ins).
    pub skip_leading: usize,
    /// Prepend the built-in categories to the data-file ones.
    pub include_builtin: bool,
    pub debounce: Duration,
    pub docs_base: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            skip_leading: DEFAULT_SKIP_LEADING,
            include_builtin: true,
            debounce: DEFAULT_DEBOUNCE,
            docs_base: DOCS_BASE_URL.to_string(),
        }
    }
}

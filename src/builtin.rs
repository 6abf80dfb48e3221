//! Categories that ship with the viewer instead of coming from the data file.
//!
//! These stand in for the leading records of the data file, which is why
//! [`crate::catalogue::CatalogueBuilder`] skips [`crate::catalogue::DEFAULT_SKIP_LEADING`]
//! source categories by default.

use once_cell::sync::Lazy;

use crate::model::{Category, ClassEntry, UtilityGroup};

/// The built-in categories, initialized on first access.
pub fn builtin_categories() -> &'static [Category] {
    static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(build_categories);
    &CATEGORIES
}

fn entry(name: &str, css: &str) -> ClassEntry {
    ClassEntry::new(name, css)
}

fn group(title: &str, entries: Vec<ClassEntry>) -> UtilityGroup {
    UtilityGroup {
        title: title.to_string(),
        description: None,
        entries,
    }
}

fn category(title: &str, color_tag: &str, groups: Vec<UtilityGroup>) -> Category {
    Category {
        title: title.to_string(),
        color_tag: color_tag.to_string(),
        groups,
    }
}

fn build_categories() -> Vec<Category> {
    vec![
        category(
            "Typography",
            "from-purple-500 to-indigo-600",
            vec![
                group(
                    "font-family",
                    vec![
                        entry(".font-sans", "font-family: ui-sans-serif, system-ui, sans-serif;"),
                        entry(".font-serif", "font-family: ui-serif, Georgia, serif;"),
                        entry(".font-mono", "font-family: ui-monospace, monospace;"),
                    ],
                ),
                group(
                    "font-size",
                    vec![
                        entry(".text-xs", "font-size: 0.75rem; line-height: 1rem;"),
                        entry(".text-sm", "font-size: 0.875rem; line-height: 1.25rem;"),
                        entry(".text-base", "font-size: 1rem; line-height: 1.5rem;"),
                        entry(".text-lg", "font-size: 1.125rem; line-height: 1.75rem;"),
                        entry(".text-xl", "font-size: 1.25rem; line-height: 1.75rem;"),
                    ],
                ),
            ],
        ),
        category(
            "Layout",
            "from-blue-500 to-cyan-500",
            vec![
                group(
                    "display",
                    vec![
                        entry(".block", "display: block;"),
                        entry(".inline-block", "display: inline-block;"),
                        entry(".inline", "display: inline;"),
                        entry(".flex", "display: flex;"),
                        entry(".inline-flex", "display: inline-flex;"),
                        entry(".table", "display: table;"),
                        entry(".grid", "display: grid;"),
                        entry(".hidden", "display: none;"),
                    ],
                ),
                group(
                    "position",
                    vec![
                        entry(".static", "position: static;"),
                        entry(".fixed", "position: fixed;"),
                        entry(".absolute", "position: absolute;"),
                        entry(".relative", "position: relative;"),
                        entry(".sticky", "position: sticky;"),
                    ],
                ),
            ],
        ),
        category(
            "Flexbox & Grid",
            "from-emerald-500 to-teal-500",
            vec![
                group(
                    "flex-direction",
                    vec![
                        entry(".flex-row", "flex-direction: row;"),
                        entry(".flex-row-reverse", "flex-direction: row-reverse;"),
                        entry(".flex-col", "flex-direction: column;"),
                        entry(".flex-col-reverse", "flex-direction: column-reverse;"),
                    ],
                ),
                group(
                    "grid-template-columns",
                    vec![
                        entry(".grid-cols-1", "grid-template-columns: repeat(1, minmax(0, 1fr));"),
                        entry(".grid-cols-2", "grid-template-columns: repeat(2, minmax(0, 1fr));"),
                        entry(".grid-cols-3", "grid-template-columns: repeat(3, minmax(0, 1fr));"),
                        entry(".grid-cols-4", "grid-template-columns: repeat(4, minmax(0, 1fr));"),
                    ],
                ),
            ],
        ),
        category(
            "Spacing",
            "from-amber-500 to-orange-500",
            vec![
                group(
                    "padding",
                    vec![
                        entry(".p-0", "padding: 0px;"),
                        entry(".p-1", "padding: 0.25rem;"),
                        entry(".p-2", "padding: 0.5rem;"),
                        entry(".p-3", "padding: 0.75rem;"),
                        entry(".p-4", "padding: 1rem;"),
                    ],
                ),
                group(
                    "margin",
                    vec![
                        entry(".m-0", "margin: 0px;"),
                        entry(".m-1", "margin: 0.25rem;"),
                        entry(".m-2", "margin: 0.5rem;"),
                        entry(".m-3", "margin: 0.75rem;"),
                        entry(".m-4", "margin: 1rem;"),
                    ],
                ),
            ],
        ),
        category(
            "Layout",
            "from-pink-500 to-rose-500",
            vec![group(
                "aspect-ratio",
                vec![
                    entry(".aspect-[16/9]", "aspect-ratio: 16 / 9;"),
                    entry(".aspect-[4/3]", "aspect-ratio: 4 / 3;"),
                    entry(".aspect-[1/1]", "aspect-ratio: 1 / 1;"),
                ],
            )],
        ),
    ]
}

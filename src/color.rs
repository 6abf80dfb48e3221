//! Category color tags.
//!
//! A color tag is a gradient descriptor in utility-class form, e.g.
//! `"from-blue-500 to-cyan-500"`. Categories get theirs from a fixed title
//! table; renderers resolve the two stops to RGB with [`tag_stops`].

/// Tag given to categories whose title is not in the table.
pub const DEFAULT_COLOR_TAG: &str = "from-gray-500 to-slate-600";

const COLOR_TAGS: &[(&str, &str)] = &[
    ("Layout", "from-blue-500 to-cyan-500"),
    ("Flexbox & Grid", "from-emerald-500 to-teal-500"),
    ("Flexbox", "from-emerald-500 to-teal-500"),
    ("Grid", "from-green-500 to-emerald-600"),
    ("Box Alignment", "from-lime-500 to-green-600"),
    ("Spacing", "from-amber-500 to-orange-500"),
    ("Sizing", "from-orange-500 to-red-500"),
    ("Typography", "from-purple-500 to-indigo-600"),
    ("Backgrounds", "from-sky-500 to-blue-600"),
    ("Borders", "from-slate-500 to-zinc-600"),
    ("Effects", "from-fuchsia-500 to-pink-500"),
    ("Filters", "from-violet-500 to-purple-600"),
    ("Tables", "from-stone-500 to-neutral-600"),
    ("Transitions & Animation", "from-pink-500 to-rose-500"),
    ("Transforms", "from-rose-500 to-red-600"),
    ("Interactivity", "from-cyan-500 to-sky-600"),
    ("SVG", "from-yellow-500 to-amber-600"),
    ("Accessibility", "from-teal-500 to-cyan-600"),
];

/// Look up the color tag for a category title (trimmed, ASCII case-insensitive).
pub fn color_tag_for(title: &str) -> &'static str {
    let title = title.trim();
    COLOR_TAGS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(title))
        .map(|(_, tag)| *tag)
        .unwrap_or(DEFAULT_COLOR_TAG)
}

/// Resolve a `from-<color>-<shade> to-<color>-<shade>` tag into its two RGB stops.
pub fn tag_stops(tag: &str) -> Option<([u8; 3], [u8; 3])> {
    let mut from = None;
    let mut to = None;
    for token in tag.split_whitespace() {
        if let Some(rest) = token.strip_prefix("from-") {
            from = stop_rgb(rest);
        } else if let Some(rest) = token.strip_prefix("to-") {
            to = stop_rgb(rest);
        }
    }
    Some((from?, to?))
}

fn stop_rgb(stop: &str) -> Option<[u8; 3]> {
    let (name, shade) = stop.rsplit_once('-')?;
    parse_hex(palette_hex(name, shade.parse().ok()?)?)
}

/// Hex value of a palette color at shade 500 or 600.
pub fn palette_hex(name: &str, shade: u16) -> Option<&'static str> {
    let (s500, s600) = match name.to_ascii_lowercase().as_str() {
        "slate" => ("#64748b", "#475569"),
        "gray" => ("#6b7280", "#4b5563"),
        "zinc" => ("#71717a", "#52525b"),
        "neutral" => ("#737373", "#525252"),
        "stone" => ("#78716c", "#57534e"),
        "red" => ("#ef4444", "#dc2626"),
        "orange" => ("#f97316", "#ea580c"),
        "amber" => ("#f59e0b", "#d97706"),
        "yellow" => ("#eab308", "#ca8a04"),
        "lime" => ("#84cc16", "#65a30d"),
        "green" => ("#22c55e", "#16a34a"),
        "emerald" => ("#10b981", "#059669"),
        "teal" => ("#14b8a6", "#0d9488"),
        "cyan" => ("#06b6d4", "#0891b2"),
        "sky" => ("#0ea5e9", "#0284c7"),
        "blue" => ("#3b82f6", "#2563eb"),
        "indigo" => ("#6366f1", "#4f46e5"),
        "violet" => ("#8b5cf6", "#7c3aed"),
        "purple" => ("#a855f7", "#9333ea"),
        "fuchsia" => ("#d946ef", "#c026d3"),
        "pink" => ("#ec4899", "#db2777"),
        "rose" => ("#f43f5e", "#e11d48"),
        _ => return None,
    };
    match shade {
        500 => Some(s500),
        600 => Some(s600),
        _ => None,
    }
}

/// Parse `#rrggbb`.
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let h = hex.strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    Some([
        u8::from_str_radix(&h[0..2], 16).ok()?,
        u8::from_str_radix(&h[2..4], 16).ok()?,
        u8::from_str_radix(&h[4..6], 16).ok()?,
    ])
}

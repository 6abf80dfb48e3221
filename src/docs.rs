//! Outbound documentation links.

/// Base of the per-utility documentation pages.
pub const DOCS_BASE_URL: &str = "https://tailwindcss.com/docs/";

/// Convert a utility title to kebab-case.
///
/// Lowercases, splits camelCase humps, and collapses every run of
/// non-alphanumeric characters into a single `-`; leading and trailing
/// separators are dropped. `"Flex Direction"` → `"flex-direction"`,
/// `"Flexbox & Grid"` → `"flexbox-grid"`, `"fontFamily"` → `"font-family"`.
pub fn kebab_case(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_sep = false;
    let mut prev_lower = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower {
                pending_sep = true;
            }
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            prev_lower = ch.is_lowercase() || ch.is_numeric();
            out.extend(ch.to_lowercase());
        } else {
            pending_sep = true;
            prev_lower = false;
        }
    }
    out
}

/// Documentation URL for a utility title under the default base.
pub fn docs_url(title: &str) -> String {
    docs_url_with_base(DOCS_BASE_URL, title)
}

/// Documentation URL for a utility title under `base`.
pub fn docs_url_with_base(base: &str, title: &str) -> String {
    let slug = kebab_case(title);
    if base.ends_with('/') {
        format!("{base}{slug}")
    } else {
        format!("{base}/{slug}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_handles_spaces_symbols_and_humps() {
        assert_eq!(kebab_case("Flex Direction"), "flex-direction");
        assert_eq!(kebab_case("Flexbox & Grid"), "flexbox-grid");
        assert_eq!(kebab_case("fontFamily"), "font-family");
        assert_eq!(kebab_case("  --z-index--  "), "z-index");
        assert_eq!(kebab_case("grid-template-columns"), "grid-template-columns");
        assert_eq!(kebab_case(""), "");
    }

    #[test]
    fn base_without_trailing_slash_is_joined() {
        assert_eq!(
            docs_url_with_base("https://example.test/docs", "Padding"),
            "https://example.test/docs/padding"
        );
    }
}

use tailsheet::color::{color_tag_for, palette_hex, parse_hex, tag_stops, DEFAULT_COLOR_TAG};
use tailsheet::docs::{docs_url, kebab_case};

#[test]
fn test_color_tag_lookup() {
    assert_eq!(color_tag_for("Layout"), "from-blue-500 to-cyan-500");
    assert_eq!(color_tag_for("  spacing "), "from-amber-500 to-orange-500");
    assert_eq!(color_tag_for("Unknown Things"), DEFAULT_COLOR_TAG);
    assert_eq!(color_tag_for(""), DEFAULT_COLOR_TAG);
}

#[test]
fn test_tag_stops_resolve_palette() {
    let (from, to) = tag_stops("from-blue-500 to-cyan-500").unwrap();
    assert_eq!(from, [0x3b, 0x82, 0xf6]);
    assert_eq!(to, [0x06, 0xb6, 0xd4]);
    assert!(tag_stops(DEFAULT_COLOR_TAG).is_some());
    assert!(tag_stops("from-blue-500").is_none());
    assert!(tag_stops("from-chartreuse-500 to-cyan-500").is_none());
}

#[test]
fn test_palette_and_hex_parsing() {
    assert_eq!(palette_hex("rose", 600), Some("#e11d48"));
    assert_eq!(palette_hex("rose", 700), None);
    assert_eq!(parse_hex("#ffffff"), Some([255, 255, 255]));
    assert_eq!(parse_hex("ffffff"), None);
    assert_eq!(parse_hex("#fff"), None);
}

#[test]
fn test_docs_url_kebab_cases_title() {
    assert_eq!(docs_url("Flex Direction"), "https://tailwindcss.com/docs/flex-direction");
    assert_eq!(docs_url("grid-template-columns"), "https://tailwindcss.com/docs/grid-template-columns");
    assert_eq!(kebab_case("Transitions & Animation"), "transitions-animation");
}

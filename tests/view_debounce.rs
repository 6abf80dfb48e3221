use std::sync::Arc;
use std::time::{Duration, Instant};

use tailsheet::builtin::builtin_categories;
use tailsheet::debounce::Debouncer;
use tailsheet::view::is_focus_search_shortcut;
use tailsheet::{Catalogue, SheetConfig, SheetView, Theme};

fn view() -> SheetView {
    let catalogue = Arc::new(Catalogue::new(builtin_categories().to_vec()));
    SheetView::new(catalogue, &SheetConfig::default())
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_rapid_keystrokes_recompute_once_with_final_value() {
    let t0 = Instant::now();
    let mut v = view();
    let mut fired = 0;
    for (i, text) in ["f", "fl", "fle", "flex"].into_iter().enumerate() {
        let at = t0 + ms(40 * i as u64);
        v.on_input(text, at);
        assert_eq!(v.raw_query(), text);
        if v.tick(at + ms(10)) {
            fired += 1;
        }
    }
    assert_eq!(fired, 0);
    assert_eq!(v.recomputations(), 0);
    assert!(v.applied_query().is_empty());

    // last keystroke at 120ms; quiet period ends at 270ms
    assert!(!v.tick(t0 + ms(269)));
    assert!(v.tick(t0 + ms(270)));
    assert!(!v.tick(t0 + ms(500)));
    assert_eq!(v.recomputations(), 1);
    assert_eq!(v.applied_query().as_str(), "flex");
    assert!(v.visible().groups().any(|g| g.title == "flex-direction"));
}

#[test]
fn test_initial_view_shows_everything_collapsed() {
    let v = view();
    assert_eq!(v.visible(), v.catalogue().as_ref());
    assert!(v.expanded().is_empty());
    assert!(v.visible().groups().all(|g| !v.is_expanded(g)));
    assert_eq!(v.pending_delay(Instant::now()), None);
}

#[test]
fn test_pending_delay_tracks_latest_keystroke() {
    let t0 = Instant::now();
    let mut v = view();
    v.on_input("p", t0);
    v.on_input("pa", t0 + ms(100));
    assert_eq!(v.pending_delay(t0 + ms(100)), Some(ms(150)));
    assert_eq!(v.pending_delay(t0 + ms(200)), Some(ms(50)));
}

#[test]
fn test_unchanged_debounced_query_does_not_recompute() {
    let t0 = Instant::now();
    let mut v = view();
    v.on_input("flex", t0);
    assert!(v.tick(t0 + ms(150)));

    // typed and erased back to the same normalized query
    v.on_input("fle", t0 + ms(200));
    v.on_input("FLEX", t0 + ms(220));
    assert!(!v.tick(t0 + ms(400)));
    assert_eq!(v.recomputations(), 1);

    v.on_input("", t0 + ms(500));
    assert!(v.tick(t0 + ms(650)));
    assert_eq!(v.visible(), v.catalogue().as_ref());
    assert!(v.expanded().is_empty());
}

#[test]
fn test_index_is_built_once_per_view() {
    let t0 = Instant::now();
    let mut v = view();
    for (i, q) in ["flex", "grid", "padding"].into_iter().enumerate() {
        let at = t0 + ms(1000 * i as u64);
        v.on_input(q, at);
        assert!(v.tick(at + ms(150)));
    }
    assert_eq!(v.recomputations(), 3);
    assert_eq!(v.index_builds(), 1);
}

#[test]
fn test_no_match_query_empties_view() {
    let t0 = Instant::now();
    let mut v = view();
    v.on_input("NONEXISTENT_TOKEN_ZZZ", t0);
    assert!(v.tick(t0 + ms(150)));
    assert!(v.visible().is_empty());
    assert!(v.expanded().is_empty());
}

#[test]
fn test_theme_toggle_round_trips() {
    let mut v = view();
    assert_eq!(v.theme(), Theme::Light);
    v.toggle_theme();
    assert!(v.theme().is_dark());
    v.toggle_theme();
    assert_eq!(v.theme(), Theme::Light);
}

#[test]
fn test_focus_shortcut_requires_command_modifier() {
    assert!(is_focus_search_shortcut(true, 'k'));
    assert!(is_focus_search_shortcut(true, 'K'));
    assert!(!is_focus_search_shortcut(false, 'k'));
    assert!(!is_focus_search_shortcut(true, 'j'));

    let mut v = view();
    assert!(!v.handle_shortcut(false, 'k'));
    assert!(!v.take_focus_request());
    assert!(v.handle_shortcut(true, 'k'));
    assert!(v.take_focus_request());
    // request is consumed
    assert!(!v.take_focus_request());
}

#[test]
fn test_docs_url_uses_configured_base() {
    let catalogue = Arc::new(Catalogue::new(builtin_categories().to_vec()));
    let config = SheetConfig {
        docs_base: "https://docs.example.test/".to_string(),
        ..SheetConfig::default()
    };
    let v = SheetView::new(Arc::clone(&catalogue), &config);
    let g = catalogue.groups().next().unwrap();
    assert_eq!(v.docs_url(g), "https://docs.example.test/font-family");
}

#[test]
fn test_debouncer_supersedes_pending_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(ms(150));
    d.push("a", t0);
    d.push("b", t0 + ms(100));
    assert_eq!(d.poll(t0 + ms(150)), None);
    assert_eq!(d.poll(t0 + ms(250)), Some("b"));
    assert_eq!(d.poll(t0 + ms(400)), None);

    d.push("c", t0 + ms(500));
    d.cancel();
    assert!(!d.is_pending());
    assert_eq!(d.poll(t0 + ms(1000)), None);
}

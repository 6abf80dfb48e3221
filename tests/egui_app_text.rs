#![cfg(feature = "egui")]

use eframe::egui::Color32;
use tailsheet::egui_app::{gradient_stops, highlight_query_job};

#[test]
fn test_highlight_job_splits_on_matches() {
    let job = highlight_query_job(".flex-row", "ROW", Color32::WHITE);
    assert_eq!(job.text, ".flex-row");
    assert_eq!(job.sections.len(), 2);
    assert_eq!(job.sections[1].format.background, Color32::from_rgb(253, 224, 71));
}

#[test]
fn test_highlight_job_without_query_is_single_section() {
    let job = highlight_query_job(".p-4", "", Color32::WHITE);
    assert_eq!(job.sections.len(), 1);
}

#[test]
fn test_highlight_job_keeps_whitespace_in_query() {
    let job = highlight_query_job("padding: 1rem;", ": ", Color32::WHITE);
    assert_eq!(job.sections.len(), 3);
    assert_eq!(&job.text[job.sections[1].byte_range.clone()], ": ");
    let job = highlight_query_job(".p-4", "p ", Color32::WHITE);
    assert_eq!(job.sections.len(), 1);
}

#[test]
fn test_highlight_job_handles_width_changing_lowercase() {
    // "İ" lowercases to 3 bytes, "ẞ" to 2: same total length, shifted offsets
    let job = highlight_query_job("İẞ", "ß", Color32::WHITE);
    assert_eq!(job.text, "İẞ");
    assert_eq!(job.sections.len(), 2);
    assert_eq!(&job.text[job.sections[0].byte_range.clone()], "İ");
    assert_eq!(&job.text[job.sections[1].byte_range.clone()], "ẞ");
    assert_eq!(job.sections[1].format.background, Color32::from_rgb(253, 224, 71));

    let job = highlight_query_job("İx", "i", Color32::WHITE);
    assert_eq!(&job.text[job.sections[0].byte_range.clone()], "İ");
    assert_eq!(job.sections[0].format.background, Color32::from_rgb(253, 224, 71));
}

#[test]
fn test_gradient_stops_fall_back_for_unknown_tags() {
    let (from, _) = gradient_stops("from-blue-500 to-cyan-500");
    assert_eq!(from, Color32::from_rgb(0x3b, 0x82, 0xf6));
    assert_eq!(gradient_stops("nonsense"), gradient_stops(tailsheet::color::DEFAULT_COLOR_TAG));
}

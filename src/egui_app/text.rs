#![cfg(feature = "egui")]

use eframe::egui::{Color32, FontId, TextFormat};
use eframe::egui::text::LayoutJob;

use crate::color::{tag_stops, DEFAULT_COLOR_TAG};

/// Monospace case-insensitive highlighter that builds a LayoutJob for `text`,
/// highlighting occurrences of `query`.
///
/// Matching runs on a lowercased copy. Every byte of that copy remembers the
/// source character it came from, so highlight bounds always land on
/// character boundaries of `text` even when lowercasing changes widths.
pub fn highlight_query_job(text: &str, query: &str, color: Color32) -> LayoutJob {
    let plain = TextFormat {
        font_id: FontId::monospace(13.0),
        color,
        ..Default::default()
    };
    let mut job = LayoutJob::default();
    let ql = query.to_lowercase();
    if ql.is_empty() {
        job.append(text, 0.0, plain);
        return job;
    }

    let mut lowered = String::with_capacity(text.len());
    let mut origin: Vec<(usize, usize)> = Vec::with_capacity(text.len());
    for (at, c) in text.char_indices() {
        let span = (at, at + c.len_utf8());
        for lc in c.to_lowercase() {
            lowered.push(lc);
            origin.extend(std::iter::repeat_n(span, lc.len_utf8()));
        }
    }

    let mut hit = plain.clone();
    hit.background = Color32::from_rgb(253, 224, 71);
    hit.color = Color32::BLACK;
    let mut i = 0;
    let mut k = 0;
    while let Some(pos) = lowered[k..].find(&ql) {
        let found = k + pos;
        k = found + ql.len();
        let start = origin[found].0.max(i);
        let end = origin[k - 1].1;
        if start >= end {
            continue;
        }
        if start > i {
            job.append(&text[i..start], 0.0, plain.clone());
        }
        job.append(&text[start..end], 0.0, hit.clone());
        i = end;
    }
    if i < text.len() {
        job.append(&text[i..], 0.0, plain);
    }
    job
}

/// Header gradient colors for a category color tag.
pub fn gradient_stops(tag: &str) -> (Color32, Color32) {
    let ([r1, g1, b1], [r2, g2, b2]) = tag_stops(tag)
        .or_else(|| tag_stops(DEFAULT_COLOR_TAG))
        .unwrap_or(([107, 114, 128], [71, 85, 105]));
    (Color32::from_rgb(r1, g1, b1), Color32::from_rgb(r2, g2, b2))
}

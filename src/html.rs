use log::*;
use serde::Deserialize;
use std::fmt::Write;

use crate::archive::{DateGroup, Page};
use crate::text::escape_quotes;

pub const ARTICLES_MARKER: &str = "<!-- archive:articles -->";
pub const PAGINATION_MARKER: &str = "<!-- archive:pagination -->";
pub const YEAR_MARKER: &str = "<!-- archive:year -->";

/// Text shown around the generated links.
#[derive(PartialEq, Eq, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub previous: String,
    pub next: String,
    /// Prefix of the "page 2 / 3" indicator.
    pub page: String,
    pub copy: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            previous: "Previous".to_string(),
            next: "Next".to_string(),
            page: "page".to_string(),
            copy: "Copy link".to_string(),
        }
    }
}

/// Titles go into the link text as they are. Attribute values only get `"`
/// escaped.
pub fn article_list(groups: &[DateGroup<'_>], labels: &Labels) -> String {
    let mut html = String::new();
    for group in groups {
        let _ = writeln!(html, r#"<section class="archive-group">"#);
        let _ = writeln!(html, r#"<h2 class="archive-date">{}</h2>"#, group.date);
        let _ = writeln!(html, "<ul>");
        for a in &group.articles {
            let url = escape_quotes(&a.url());
            let _ = writeln!(
                html,
                r#"<li><a href="{url}" target="_blank" rel="noopener">{title}</a> <button type="button" class="copy-link" data-title="{data_title}" data-path="{url}">{copy}</button></li>"#,
                title = a.title,
                data_title = escape_quotes(&a.title),
                copy = labels.copy,
            );
        }
        let _ = writeln!(html, "</ul>");
        let _ = writeln!(html, "</section>");
    }
    html
}

pub fn pagination(page: &Page<'_>, labels: &Labels) -> String {
    let mut html = String::new();
    let _ = writeln!(html, r#"<nav class="pagination">"#);
    if let Some(url) = page.prev_url() {
        let _ = writeln!(html, r#"<a class="prev" href="{}">{}</a>"#, url, labels.previous);
    }
    let _ = writeln!(
        html,
        r#"<span class="page-number">{} {} / {}</span>"#,
        labels.page, page.number, page.total
    );
    if let Some(url) = page.next_url() {
        let _ = writeln!(html, r#"<a class="next" href="{}">{}</a>"#, url, labels.next);
    }
    let _ = writeln!(html, "</nav>");
    html
}

/// The site template with its three markers located up front.
pub struct PageTemplate {
    text: String,
    /// (offset, marker index) for each marker found, sorted by offset.
    slots: Vec<(usize, usize)>,
}

const MARKERS: [&str; 3] = [ARTICLES_MARKER, PAGINATION_MARKER, YEAR_MARKER];

impl PageTemplate {
    pub fn new(text: String) -> PageTemplate {
        let mut slots = Vec::new();
        for (i, marker) in MARKERS.iter().enumerate() {
            match text.find(marker) {
                Some(offset) => slots.push((offset, i)),
                None => warn!("template has no {} marker", marker),
            }
        }
        slots.sort_unstable();
        PageTemplate { text, slots }
    }

    /// Replaces the first occurrence of each marker. Markers inside the
    /// substituted values are left alone.
    pub fn render(&self, articles: &str, pagination: &str, year: i32) -> String {
        let year = year.to_string();
        let values = [articles, pagination, year.as_str()];

        let mut out = String::with_capacity(self.text.len() + articles.len() + pagination.len());
        let mut pos = 0;
        for &(offset, i) in &self.slots {
            out.push_str(&self.text[pos..offset]);
            out.push_str(values[i]);
            pos = offset + MARKERS[i].len();
        }
        out.push_str(&self.text[pos..]);
        out
    }
}

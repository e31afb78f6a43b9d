use anyhow::Context;
use log::*;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::text;
use crate::Result;

/// Directory, relative to the output root, that holds the copied articles.
pub const ARTICLE_DIR: &str = "pages";

/// One dated HTML file from the source directory.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Article {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Relative to the output root, e.g. `pages/2024-03-05-Hello.html`.
    pub path: String,
    pub filename: String,
}

impl Article {
    /// Returns `None` for anything that is not named `YYYY-MM-DD-<title>.html`.
    pub fn from_filename(filename: &str) -> Option<Article> {
        static ARTICLE_FILENAME: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?P<date>[0-9]{4}-[0-9]{2}-[0-9]{2})-(?P<title>.*)\.html$").unwrap()
        });

        if filename == "index.html" || !filename.ends_with(".html") {
            return None;
        }
        let caps = ARTICLE_FILENAME.captures(filename)?;
        Some(Article {
            title: text::decode_title(&caps["title"]),
            date: caps["date"].to_string(),
            path: format!("{}/{}", ARTICLE_DIR, filename),
            filename: filename.to_string(),
        })
    }

    /// Root-relative link to the copied article.
    pub fn url(&self) -> String {
        format!("/{}", self.path)
    }
}

/// Parses every regular file directly under `dir`. Anything else is skipped.
pub fn collect(dir: &Path) -> Result<Vec<Article>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list source directory {}", dir.display()))?;

    let mut articles = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            debug!("{:?} => not utf-8 => skipped", name);
            continue;
        };
        match Article::from_filename(name) {
            Some(article) => articles.push(article),
            None => trace!("{:32} => not an article", name),
        }
    }
    Ok(articles)
}

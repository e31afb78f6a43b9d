pub use anyhow::Result;
use anyhow::{bail, Context};
use chrono::Datelike;
use log::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::archive;
use crate::article::{self, ARTICLE_DIR};
use crate::html::{self, Labels, PageTemplate};

#[derive(PartialEq, Eq, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flat directory of `YYYY-MM-DD-<title>.html` files and other assets.
    pub src_dir: PathBuf,
    pub template: PathBuf,
    /// Removed and rebuilt on every run.
    pub out_dir: PathBuf,
    pub posts_per_page: usize,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            src_dir: PathBuf::from("pages"),
            template: PathBuf::from("template.html"),
            out_dir: PathBuf::from("dist"),
            posts_per_page: 10,
            labels: Labels::default(),
        }
    }
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&s)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.posts_per_page == 0 {
            bail!("posts_per_page must be at least 1");
        }
        Ok(())
    }
}

/// What a build produced.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Summary {
    pub articles: usize,
    pub pages: usize,
}

pub struct Site {
    config: Config,
}

impl Site {
    pub fn new(config: Config) -> Site {
        Site { config }
    }

    pub fn build(&self) -> Result<Summary> {
        self.config.validate()?;
        self.reset_out_dir()?;
        self.copy_files()?;

        let mut articles = article::collect(&self.config.src_dir)?;
        if articles.is_empty() {
            info!(
                "No articles in {}, no pages written",
                self.config.src_dir.display()
            );
            return Ok(Summary {
                articles: 0,
                pages: 0,
            });
        }
        archive::sort_newest_first(&mut articles);

        let per_page = self.config.posts_per_page;
        let total = archive::page_count(articles.len(), per_page);
        info!("Found {} articles, {} pages", articles.len(), total);

        let template = std::fs::read_to_string(&self.config.template).with_context(|| {
            format!("failed to read template {}", self.config.template.display())
        })?;
        let template = PageTemplate::new(template);
        let year = chrono::Local::now().year();

        for page in archive::paginate(&articles, per_page) {
            let list = html::article_list(&page.groups(), &self.config.labels);
            let nav = html::pagination(&page, &self.config.labels);
            let out_file = page.output_path(&self.config.out_dir);
            info!(
                "Page {}/{}: {} articles => {}",
                page.number,
                page.total,
                page.articles.len(),
                out_file.display()
            );
            if let Some(dir) = out_file.parent() {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&out_file, template.render(&list, &nav, year))
                .with_context(|| format!("failed to write {}", out_file.display()))?;
        }

        info!("Built {} pages", total);
        Ok(Summary {
            articles: articles.len(),
            pages: total,
        })
    }

    fn reset_out_dir(&self) -> Result<()> {
        self.check_out_dir()?;
        let out_dir = &self.config.out_dir;
        match std::fs::remove_dir_all(out_dir) {
            Ok(()) => debug!("Removed {}", out_dir.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("failed to remove {}", out_dir.display()))
            }
        }
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;
        Ok(())
    }

    /// The output directory is deleted and the source is copied into it, so
    /// neither may contain the other.
    fn check_out_dir(&self) -> Result<()> {
        let src_dir = &self.config.src_dir;
        let src_dir = src_dir
            .canonicalize()
            .with_context(|| format!("failed to open source directory {}", src_dir.display()))?;
        let out_dir = resolve(&self.config.out_dir)?;

        if out_dir == src_dir {
            bail!("output directory {} is the source directory", out_dir.display());
        } else if out_dir.starts_with(&src_dir) {
            bail!(
                "output directory {} is inside source directory {}",
                out_dir.display(),
                src_dir.display()
            );
        } else if src_dir.starts_with(&out_dir) {
            bail!(
                "output directory {} contains source directory {}",
                out_dir.display(),
                src_dir.display()
            );
        }
        Ok(())
    }

    fn copy_files(&self) -> Result<()> {
        let src_dir = &self.config.src_dir;
        let out_dir = self.config.out_dir.join(ARTICLE_DIR);
        info!("Copy files: {} => {}", src_dir.display(), out_dir.display());
        for entry in walkdir::WalkDir::new(src_dir).sort_by_file_name() {
            let entry = entry?;
            let src_path = entry.path();
            let relative_path = src_path.strip_prefix(src_dir)?;
            let out_path = out_dir.join(relative_path);
            trace!("{:32} => {}", relative_path.display(), out_path.display());

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&out_path)?;
            } else {
                std::fs::copy(src_path, &out_path).with_context(|| {
                    format!("failed to copy {} => {}", src_path.display(), out_path.display())
                })?;
            }
        }
        Ok(())
    }
}

/// Absolute form of `path`, which may not exist yet: the deepest existing
/// ancestor is canonicalized and the rest appended.
fn resolve(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    let mut tail = Vec::new();
    let mut existing = path.as_path();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                existing = parent;
            }
            _ => break,
        }
    }
    let mut resolved = existing
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", path.display()))?;
    resolved.extend(tail.into_iter().rev());
    Ok(resolved)
}

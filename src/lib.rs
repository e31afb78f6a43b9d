pub mod archive;
pub mod article;
pub mod html;
mod site;
mod text;

pub use site::{Config, Result, Site, Summary};

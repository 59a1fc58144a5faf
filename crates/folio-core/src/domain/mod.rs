//! Domain entities - the core business objects.

mod category;
mod content;
mod post;
mod site;
mod stats;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use content::{WORDS_PER_MINUTE, estimate_read_time, normalize_tags, render_body, slugify};
pub use post::{NewPost, Post, PostPatch};
pub use site::SiteConfig;
pub use stats::{BlogStats, CategorySummary};

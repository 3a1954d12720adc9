pub mod config;
pub mod content;
pub mod error;
pub mod router;
pub mod tabs;
pub mod types;

pub use config::{SiteConfig, parse_site_toml};
pub use content::ContentStore;
pub use error::{Error, Result};
pub use router::Route;
pub use tabs::{NavOutcome, TabController};
pub use types::*;

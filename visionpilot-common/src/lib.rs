//! Platform-independent core of the VisionPilot site: the route table, the
//! navigation shell, page transitions, per-page UI state and the static
//! content the pages render.

pub mod accordion;
pub mod analytics;
pub mod chart;
pub mod config;
pub mod content;
pub mod demo;
pub mod error;
pub mod nav;
pub mod pointer;
pub mod route;
pub mod scroll;
pub mod transition;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
pub use route::Page;

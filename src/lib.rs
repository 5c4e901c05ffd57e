//! Display helpers for OpenStreetMap place records: links, labels, distances, icons
//! and the zoom level picker, as text or ready-escaped HTML fragments.

pub mod config;
pub mod data;
pub mod errors;
pub mod format;
pub mod helpers;
pub mod markup;

pub use config::Config;
pub use data::{osm::OsmType, Place};
pub use format::{Formatter, ZoomSelection};
pub use helpers::HelperRegistry;
pub use markup::{escape_html, HelperOutput, SafeString};

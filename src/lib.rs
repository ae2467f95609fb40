pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};

pub use crate::core::{
    airport_lookup::AirportDirectory,
    engine::ItineraryEngine,
    pipeline::ItineraryPipeline,
    render::strip_styles,
    scanner::{prettify, prettify_all},
    whitespace::normalize as normalize_whitespace,
};
pub use crate::domain::model::{AirportRecord, PrettifiedItinerary, RenderMode};
pub use crate::utils::error::{ItineraryError, Result};

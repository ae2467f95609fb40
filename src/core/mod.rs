pub mod airport_lookup;
pub mod engine;
pub mod pipeline;
pub mod render;
pub mod scanner;
pub mod timestamp;
pub mod whitespace;

pub use crate::domain::model::{
    AirportRecord, ItineraryReport, ItinerarySource, PrettifiedItinerary, RenderMode,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

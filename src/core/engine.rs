use crate::core::{ItineraryReport, Pipeline};
use crate::utils::error::Result;

pub struct ItineraryEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ItineraryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ItineraryReport> {
        tracing::info!("Starting itinerary processing");

        // Extract
        let source = self.pipeline.extract().await?;
        tracing::debug!(
            "Read {} bytes of itinerary text and {} bytes of airport lookup",
            source.text.len(),
            source.airport_lookup.len()
        );

        // Transform
        let itinerary = self.pipeline.transform(source).await?;
        tracing::debug!("Prettified itinerary is {} bytes", itinerary.plain.len());

        // Load
        let output_path = self.pipeline.load(&itinerary).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(ItineraryReport {
            output_path,
            itinerary,
        })
    }
}

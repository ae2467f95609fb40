/// One row of the airport lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirportRecord {
    pub name: String,
    pub iso_country: String,
    pub municipality: String,
    pub icao_code: String,
    pub iata_code: String,
    pub coordinates: String,
}

impl AirportRecord {
    pub fn has_municipality(&self) -> bool {
        !self.municipality.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Highlighted,
}

/// Both renderings of one itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrettifiedItinerary {
    pub plain: String,
    pub highlighted: String,
}

/// Raw inputs gathered by the extract phase.
#[derive(Debug, Clone)]
pub struct ItinerarySource {
    pub text: String,
    pub airport_lookup: Vec<u8>,
}

/// Outcome of one engine run.
#[derive(Debug, Clone)]
pub struct ItineraryReport {
    pub output_path: String,
    pub itinerary: PrettifiedItinerary,
}

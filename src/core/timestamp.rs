use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use std::sync::LazyLock;

const UTC_FORMAT: &str = "%Y-%m-%dT%H:%MZ";
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

// chrono accepts short or signed fields, so the fixed-width shape is checked first.
static TIMESTAMP_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2})$").unwrap()
});

/// A timestamp taken from a `D(..)`, `T12(..)` or `T24(..)` token.
///
/// Wall-clock fields are kept in the offset written in the itinerary;
/// nothing is converted between zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItineraryTimestamp {
    inner: DateTime<FixedOffset>,
}

impl ItineraryTimestamp {
    /// Accepts `YYYY-MM-DDTHH:MMZ`, then `YYYY-MM-DDTHH:MM±HH:MM`.
    pub fn parse(raw: &str) -> Option<Self> {
        if !TIMESTAMP_SHAPE.is_match(raw) {
            return None;
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, UTC_FORMAT) {
            return Some(Self {
                inner: Utc.from_utc_datetime(&naive).fixed_offset(),
            });
        }

        DateTime::<FixedOffset>::parse_from_str(raw, OFFSET_FORMAT)
            .ok()
            .map(|inner| Self { inner })
    }

    /// `15 Mar 2025`
    pub fn date(&self) -> String {
        self.inner.format("%d %b %Y").to_string()
    }

    /// `02:30PM`
    pub fn time_12h(&self) -> String {
        self.inner.format("%I:%M%p").to_string()
    }

    /// `14:30`
    pub fn time_24h(&self) -> String {
        self.inner.format("%H:%M").to_string()
    }

    /// `(-04:00)`; UTC is always shown as `(+00:00)`.
    pub fn offset_label(&self) -> String {
        format!("({})", self.inner.format("%:z"))
    }
}

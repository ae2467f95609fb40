use crate::core::airport_lookup::AirportDirectory;
use crate::core::render::{renderer_for, Renderer};
use crate::core::timestamp::ItineraryTimestamp;
use crate::core::whitespace;
use crate::domain::model::{PrettifiedItinerary, RenderMode};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static IATA_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\*?)#([A-Z]{3})").unwrap());
static ICAO_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\*?)##([A-Z]{4})").unwrap());
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"D\(([0-9T:.Z+-]{16,})\)").unwrap());
static TIME12_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T12\(([0-9T:.Z+-]{16,})\)").unwrap());
static TIME24_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"T24\(([0-9T:.Z+-]{16,})\)").unwrap());

/// Token grammars, in the order their passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Iata,
    Icao,
    Date,
    Time12,
    Time24,
}

impl TokenKind {
    pub const PASS_ORDER: [TokenKind; 5] = [
        TokenKind::Iata,
        TokenKind::Icao,
        TokenKind::Date,
        TokenKind::Time12,
        TokenKind::Time24,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            TokenKind::Iata => &*IATA_TOKEN,
            TokenKind::Icao => &*ICAO_TOKEN,
            TokenKind::Date => &*DATE_TOKEN,
            TokenKind::Time12 => &*TIME12_TOKEN,
            TokenKind::Time24 => &*TIME24_TOKEN,
        }
    }
}

/// Rewrites itinerary tokens against an airport directory.
///
/// Anything that does not resolve (unknown code, unparsable timestamp) is
/// copied through unchanged.
pub struct Scanner<'a> {
    directory: &'a AirportDirectory,
    renderer: &'a dyn Renderer,
}

impl<'a> Scanner<'a> {
    pub fn new(directory: &'a AirportDirectory, renderer: &'a dyn Renderer) -> Self {
        Self {
            directory,
            renderer,
        }
    }

    /// Runs every token pass; whitespace is left untouched.
    pub fn rewrite(&self, content: &str) -> String {
        TokenKind::PASS_ORDER
            .iter()
            .fold(content.to_string(), |text, kind| self.run_pass(*kind, &text))
    }

    fn run_pass(&self, kind: TokenKind, content: &str) -> String {
        let mut misses = 0usize;
        let rewritten = kind.pattern().replace_all(content, |caps: &Captures| {
            let rendered = match kind {
                TokenKind::Iata | TokenKind::Icao => self.render_airport(caps),
                TokenKind::Date | TokenKind::Time12 | TokenKind::Time24 => {
                    self.render_timestamp(kind, &caps[1])
                }
            };
            rendered.unwrap_or_else(|| {
                misses += 1;
                caps[0].to_string()
            })
        });

        if misses > 0 {
            tracing::debug!("{:?} pass left {} token(s) unresolved", kind, misses);
        }
        rewritten.into_owned()
    }

    fn render_airport(&self, caps: &Captures) -> Option<String> {
        let wants_city = &caps[1] == "*";
        let airport = self.directory.lookup(&caps[2])?;

        if wants_city && airport.has_municipality() {
            Some(self.renderer.city(&airport.municipality))
        } else {
            Some(self.renderer.airport_name(&airport.name))
        }
    }

    fn render_timestamp(&self, kind: TokenKind, raw: &str) -> Option<String> {
        let ts = ItineraryTimestamp::parse(raw)?;
        let rendered = match kind {
            TokenKind::Date => self.renderer.date(&ts.date()),
            TokenKind::Time12 => self.renderer.time(&ts.time_12h(), &ts.offset_label()),
            TokenKind::Time24 => self.renderer.time(&ts.time_24h(), &ts.offset_label()),
            TokenKind::Iata | TokenKind::Icao => return None,
        };
        Some(rendered)
    }
}

/// Rewrites tokens and normalizes whitespace for one rendering mode.
pub fn prettify(content: &str, directory: &AirportDirectory, mode: RenderMode) -> String {
    let scanner = Scanner::new(directory, renderer_for(mode));
    whitespace::normalize(&scanner.rewrite(content))
}

/// Produces the plain and the highlighted rendering of the same text.
pub fn prettify_all(content: &str, directory: &AirportDirectory) -> PrettifiedItinerary {
    PrettifiedItinerary {
        plain: prettify(content, directory, RenderMode::Plain),
        highlighted: prettify(content, directory, RenderMode::Highlighted),
    }
}

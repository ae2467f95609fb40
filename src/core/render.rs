use crate::domain::model::RenderMode;
use regex::Regex;
use std::sync::LazyLock;

const RESET: &str = "\x1b[0m";

static ANSI_SGR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").unwrap());

/// Categories of resolved text that the highlighted rendering colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    AirportName,
    City,
    Date,
    Time,
    Offset,
}

impl Style {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Style::AirportName => "\x1b[32m", // green
            Style::City => "\x1b[36m",        // cyan
            Style::Date => "\x1b[35m",        // magenta
            Style::Time => "\x1b[34m",        // blue
            Style::Offset => "\x1b[33m",      // yellow
        }
    }
}

/// Turns resolved token values into output text.
pub trait Renderer: Send + Sync {
    fn styled(&self, style: Style, text: &str) -> String;

    fn airport_name(&self, name: &str) -> String {
        self.styled(Style::AirportName, name)
    }

    fn city(&self, city: &str) -> String {
        self.styled(Style::City, city)
    }

    fn date(&self, date: &str) -> String {
        self.styled(Style::Date, date)
    }

    fn time(&self, time: &str, offset: &str) -> String {
        format!(
            "{} {}",
            self.styled(Style::Time, time),
            self.styled(Style::Offset, offset)
        )
    }
}

/// Bare text, safe to write to a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn styled(&self, _style: Style, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI-coloured text for terminals. Every span ends with a reset.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighlightRenderer;

impl Renderer for HighlightRenderer {
    fn styled(&self, style: Style, text: &str) -> String {
        format!("{}{}{}", style.ansi_code(), text, RESET)
    }
}

pub fn renderer_for(mode: RenderMode) -> &'static dyn Renderer {
    match mode {
        RenderMode::Plain => &PlainRenderer,
        RenderMode::Highlighted => &HighlightRenderer,
    }
}

/// Removes ANSI SGR sequences (colour/reset markers) from `text`.
pub fn strip_styles(text: &str) -> String {
    ANSI_SGR.replace_all(text, "").into_owned()
}

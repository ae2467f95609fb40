pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_file_extensions, validate_path, validate_required_field,
    Validate,
};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "itinerary-prettifier"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Turns itinerary placeholders into customer-friendly text")
)]
#[cfg_attr(
    feature = "cli",
    command(after_help = "Example: itinerary-prettifier ./input.txt ./output.txt ./airport-lookup.csv")
)]
pub struct CliConfig {
    /// Itinerary text containing airport and date/time placeholders
    pub input: Option<String>,

    /// Where the plain prettified itinerary is written
    pub output: Option<String>,

    /// Airport lookup CSV
    pub airport_lookup: Option<String>,

    /// TOML file supplying any paths not given on the command line
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Print the processed itinerary without colours
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_color: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn new(input: &str, output: &str, airport_lookup: &str) -> Self {
        Self {
            input: Some(input.to_string()),
            output: Some(output.to_string()),
            airport_lookup: Some(airport_lookup.to_string()),
            ..Self::default()
        }
    }

    /// 命令列參數優先，缺少的欄位由 TOML 設定補上
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if self.input.is_none() {
            self.input = Some(toml.input.path.clone());
        }
        if self.output.is_none() {
            self.output = Some(toml.output.path.clone());
        }
        if self.airport_lookup.is_none() {
            self.airport_lookup = Some(toml.lookup.path.clone());
        }
        if !toml.color_enabled() {
            self.no_color = true;
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or_default()
    }

    fn airport_lookup_path(&self) -> &str {
        self.airport_lookup.as_deref().unwrap_or_default()
    }

    fn color_enabled(&self) -> bool {
        !self.no_color
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field("input", &self.input)?;
        let output = validate_required_field("output", &self.output)?;
        let lookup = validate_required_field("airport_lookup", &self.airport_lookup)?;

        validate_path("input", input)?;
        validate_path("output", output)?;
        validate_path("airport_lookup", lookup)?;
        validate_file_extensions("airport_lookup", &[lookup.as_str()], &["csv"])?;
        validate_distinct_paths("output", output, &[input.as_str(), lookup.as_str()])?;

        Ok(())
    }
}

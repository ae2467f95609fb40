use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ItineraryError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_file_extensions, validate_non_empty_string, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: PathConfig,
    pub output: PathConfig,
    pub lookup: PathConfig,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ItineraryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ItineraryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ITINERARY_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn color_enabled(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.color)
            .unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn airport_lookup_path(&self) -> &str {
        &self.lookup.path
    }

    fn color_enabled(&self) -> bool {
        TomlConfig::color_enabled(self)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input.path", &self.input.path)?;
        validate_non_empty_string("output.path", &self.output.path)?;
        validate_non_empty_string("lookup.path", &self.lookup.path)?;
        validate_path("input.path", &self.input.path)?;
        validate_path("output.path", &self.output.path)?;
        validate_path("lookup.path", &self.lookup.path)?;
        validate_file_extensions("lookup.path", &[self.lookup.path.as_str()], &["csv"])?;
        validate_distinct_paths(
            "output.path",
            &self.output.path,
            &[self.input.path.as_str(), self.lookup.path.as_str()],
        )?;
        Ok(())
    }
}

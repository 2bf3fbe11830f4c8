use crate::domain::model::CandidateList;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAP_BASE_URL: &str =
    "https://kartor.stockholm.se/bios/dpwebmap/cust_sth/sbk/sthlm_sse/DPWebMap.html?";
pub const DEFAULT_LAYERS: &str = "TTTB000000000T";
pub const DEFAULT_ZOOM: u8 = 7;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub page: ElementIds,
    #[serde(default)]
    pub candidates: CandidateList,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Fixed part of the embedded map URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub base_url: String,
    pub zoom: u8,
    pub layers: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_MAP_BASE_URL.to_string(),
            zoom: DEFAULT_ZOOM,
            layers: DEFAULT_LAYERS.to_string(),
        }
    }
}

/// Registration options of the autocomplete widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub selector: String,
    #[serde(rename = "minChars", alias = "min_chars")]
    pub min_chars: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selector: "#addressinput".to_string(),
            min_chars: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub input_id: String,
    pub frame_id: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            input_id: "addressinput".to_string(),
            frame_id: "mapframe".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: Option<String>,
    pub max_prefix_chars: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            max_prefix_chars: 3,
        }
    }
}

impl SearchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MAP_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex::Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("map.base_url", &self.map.base_url)?;
        validation::validate_non_empty_string("map.layers", &self.map.layers)?;
        validation::validate_non_empty_string("widget.selector", &self.widget.selector)?;
        validation::validate_non_empty_string("page.input_id", &self.page.input_id)?;
        validation::validate_non_empty_string("page.frame_id", &self.page.frame_id)?;
        validation::validate_positive_number(
            "store.max_prefix_chars",
            self.store.max_prefix_chars,
            1,
        )?;

        if let Some(path) = &self.store.path {
            validation::validate_non_empty_string("store.path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Candidate;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        assert_eq!(config.map, MapConfig::default());
        assert_eq!(config.widget.selector, "#addressinput");
        assert_eq!(config.widget.min_chars, 1);
        assert_eq!(config.page.frame_id, "mapframe");
        assert_eq!(config.candidates.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let content = r##"
[map]
base_url = "https://maps.example.com/view.html?"
zoom = 9
layers = "TTF"

[widget]
selector = "#street"
minChars = 2

[page]
input_id = "street"
frame_id = "map"

[[candidates]]
label = "Hornsgatan 12"
tag = "g"

[[candidates]]
label = "Kv. Lejonet 3"
tag = "f"
"##;
        let config = SearchConfig::from_toml_str(content).unwrap();
        assert_eq!(config.map.zoom, 9);
        assert_eq!(config.widget.selector, "#street");
        assert_eq!(config.widget.min_chars, 2);
        assert_eq!(config.page.input_id, "street");
        assert_eq!(
            config.candidates.as_slice(),
            &[
                Candidate::new("Hornsgatan 12", 'g'),
                Candidate::new("Kv. Lejonet 3", 'f')
            ]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_chars_snake_case_alias() {
        let config = SearchConfig::from_toml_str("[widget]\nmin_chars = 0\n").unwrap();
        assert_eq!(config.widget.min_chars, 0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STHLM_MAP_SEARCH_TEST_LAYERS", "ABC");
        let config =
            SearchConfig::from_toml_str("[map]\nlayers = \"${STHLM_MAP_SEARCH_TEST_LAYERS}\"\n")
                .unwrap();
        assert_eq!(config.map.layers, "ABC");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = SearchConfig::from_toml_str("[map]\nbase_url = \"ftp://x\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            SearchConfig::from_toml_str("[map\n"),
            Err(SearchError::ConfigValidationError { .. })
        ));
    }
}

use crate::config::Settings;
use crate::core::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub itinerary_service: ServiceConfig,
    pub recommend_service: ServiceConfig,
    pub http: Option<HttpConfig>,
    pub listing: Option<ListingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    pub page_size: Option<usize>,
    pub featured_limit: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlannerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ITINERARY_API_URL})，未設定的變數保留原文
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            itinerary_api_url: self.itinerary_service.base_url.clone(),
            recommend_api_url: self.recommend_service.base_url.clone(),
            timeout_secs: self
                .http
                .as_ref()
                .and_then(|h| h.timeout_seconds)
                .unwrap_or(defaults.timeout_secs),
            page_size: self
                .listing
                .as_ref()
                .and_then(|l| l.page_size)
                .unwrap_or(defaults.page_size),
            featured_limit: self
                .listing
                .as_ref()
                .and_then(|l| l.featured_limit)
                .unwrap_or(defaults.featured_limit),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn itinerary_api_url(&self) -> &str {
        &self.itinerary_service.base_url
    }

    fn recommend_api_url(&self) -> &str {
        &self.recommend_service.base_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.settings().timeout_secs
    }

    fn page_size(&self) -> usize {
        self.settings().page_size
    }

    fn featured_limit(&self) -> usize {
        self.settings().featured_limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.settings().validate()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("itinerary_service.base_url", &self.itinerary_api_url)?;
        validate_url("recommend_service.base_url", &self.recommend_api_url)?;
        validate_range("http.timeout_seconds", self.timeout_secs, 1, 300)?;
        validate_positive_number("listing.page_size", self.page_size, 1)?;
        validate_positive_number("listing.featured_limit", self.featured_limit, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[itinerary_service]
base_url = "http://itineraries.internal:8000"

[recommend_service]
base_url = "http://recommend.internal:8001"

[http]
timeout_seconds = 15

[listing]
page_size = 12
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.itinerary_api_url(), "http://itineraries.internal:8000");
        assert_eq!(config.request_timeout_secs(), 15);
        assert_eq!(config.page_size(), 12);
        assert_eq!(config.featured_limit(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_RECOMMEND_API_URL", "https://recommend.example.com");

        let toml_content = r#"
[itinerary_service]
base_url = "http://localhost:8000"

[recommend_service]
base_url = "${TEST_RECOMMEND_API_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.recommend_api_url(), "https://recommend.example.com");

        std::env::remove_var("TEST_RECOMMEND_API_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[itinerary_service]
base_url = "invalid-url"

[recommend_service]
base_url = "http://localhost:8001"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let toml_content = r#"
[itinerary_service]
base_url = "http://localhost:8000"

[recommend_service]
base_url = "http://localhost:8001"

[listing]
page_size = 0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listing.page_size"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[itinerary_service]
base_url = "http://localhost:8000"

[recommend_service]
base_url = "http://localhost:8001"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.recommend_api_url(), "http://localhost:8001");
    }

    #[test]
    fn test_empty_base_url_is_missing() {
        let toml_content = r#"
[itinerary_service]
base_url = ""

[recommend_service]
base_url = "http://localhost:8001"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PlannerError::MissingConfigError { field }) if field == "itinerary_service.base_url"
        ));
    }

    #[test]
    fn test_missing_section_is_config_error() {
        let err = TomlConfig::from_toml_str("[itinerary_service]\nbase_url = \"x\"\n").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigError { .. }));
    }
}

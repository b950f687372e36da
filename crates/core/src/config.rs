use crate::errors::CoreError;
use crate::models::settings::{DataSource, Settings};
use crate::providers::http::HttpDataProvider;
use crate::providers::static_data::StaticDataProvider;
use crate::providers::traits::DataProvider;

/// Prefix of environment overrides, e.g. `FINANCE_DASH_LOG_LEVEL=debug`
/// or `FINANCE_DASH_DATA_SOURCE__BASE_URL=...`.
pub const ENV_PREFIX: &str = "FINANCE_DASH";

/// Load settings: built-in defaults, then the optional TOML file, then
/// environment variables.
pub fn load(path: Option<&str>) -> Result<Settings, CoreError> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(::config::File::with_name(path).required(false));
    }
    builder = builder.add_source(
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    validate(settings)
}

/// Normalise and check a settings value.
pub fn validate(mut settings: Settings) -> Result<Settings, CoreError> {
    let currency = settings.currency.trim().to_uppercase();
    if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::Config(format!(
            "Invalid currency code '{}': must be exactly 3 ASCII letters (e.g., USD, EUR, PLN)",
            settings.currency
        )));
    }
    settings.currency = currency;

    if let DataSource::Http { base_url } = &settings.data_source {
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "Invalid base_url '{base_url}': must start with http:// or https://"
            )));
        }
    }

    Ok(settings)
}

impl Settings {
    /// Build the data provider these settings point at.
    pub fn build_provider(&self) -> Result<Box<dyn DataProvider>, CoreError> {
        match &self.data_source {
            DataSource::Mock => Ok(Box::new(
                StaticDataProvider::mock()?.with_delays(self.mock_delays_ms),
            )),
            DataSource::Http { base_url } => Ok(Box::new(HttpDataProvider::new(base_url.clone()))),
        }
    }
}

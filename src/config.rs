use std::net::SocketAddr;

use anyhow::Context as _;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directives, e.g. `info` or `sendai_info_api=debug`.
    pub level: String,
    pub api: ApiConfig,
    pub http: HttpClientConfig,
    pub weather: WeatherConfig,
    pub news: NewsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub bind: SocketAddr,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub lat: f64,
    pub lon: f64,
    pub units: String,
    pub lang: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    pub api_key: Option<String>,
    pub url: String,
    pub country: String,
    pub query: String,
    pub page_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".into(),
            api: ApiConfig::default(),
            http: HttpClientConfig::default(),
            weather: WeatherConfig::default(),
            news: NewsConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("sendai-info-api/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: "https://api.openweathermap.org/data/2.5/weather".into(),
            lat: 38.2682,
            lon: 140.8694,
            units: "metric".into(),
            lang: "ja".into(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: "https://newsapi.org/v2/top-headlines".into(),
            country: "jp".into(),
            query: "仙台".into(),
            page_size: 5,
        }
    }
}

impl WeatherConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

impl NewsConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }
}

fn non_empty(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty())
}

impl Config {
    /// Layers defaults, `config/default.yaml`, `config/local.yaml` and
    /// `APP__*` environment variables. The provider secrets come from
    /// `WEATHER_API_KEY` and `NEWS_API_KEY`.
    pub fn load() -> anyhow::Result<Self> {
        let config = ::config::Config::builder()
            .add_source(::config::File::with_name("config/default").required(false))
            .add_source(::config::File::with_name("config/local").required(false))
            .add_source(::config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("weather.api_key", std::env::var("WEATHER_API_KEY").ok())
            .context("weather api key override")?
            .set_override_option("news.api_key", std::env::var("NEWS_API_KEY").ok())
            .context("news api key override")?
            .build()
            .context("failed to build config")?;

        config
            .try_deserialize()
            .context("failed to deserialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_sendai() {
        let config = Config::default();

        assert_eq!(config.weather.lat, 38.2682);
        assert_eq!(config.weather.lon, 140.8694);
        assert_eq!(config.weather.units, "metric");
        assert_eq!(config.news.country, "jp");
        assert_eq!(config.news.query, "仙台");
        assert_eq!(config.news.page_size, 5);
        assert_eq!(config.api.bind.port(), 8000);
    }

    #[test]
    fn blank_api_keys_count_as_missing() {
        let mut config = Config::default();
        assert_eq!(config.weather.api_key(), None);

        config.weather.api_key = Some("   ".into());
        config.news.api_key = Some(String::new());
        assert_eq!(config.weather.api_key(), None);
        assert_eq!(config.news.api_key(), None);

        config.news.api_key = Some(" secret ".into());
        assert_eq!(config.news.api_key(), Some("secret"));
    }

    #[test]
    fn partial_sources_keep_defaults() {
        let config: Config = ::config::Config::builder()
            .set_override("news.page_size", 3)
            .and_then(|b| b.set_override("api.bind", "127.0.0.1:9000"))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(config.news.page_size, 3);
        assert_eq!(config.news.country, "jp");
        assert_eq!(config.api.bind.port(), 9000);
        assert_eq!(config.weather.lang, "ja");
    }

    // Both cases share one test because they mutate process-wide env vars.
    #[test]
    fn load_maps_provider_secrets() {
        std::env::set_var("WEATHER_API_KEY", "weather-secret");
        std::env::set_var("NEWS_API_KEY", "news-secret");
        std::env::remove_var("APP__NEWS__API_KEY");

        let config = Config::load().unwrap();
        assert_eq!(config.weather.api_key(), Some("weather-secret"));
        assert_eq!(config.news.api_key(), Some("news-secret"));

        std::env::remove_var("NEWS_API_KEY");
        std::env::set_var("APP__NEWS__API_KEY", "from-app-env");

        let config = Config::load().unwrap();
        assert_eq!(config.weather.api_key(), Some("weather-secret"));
        assert_eq!(config.news.api_key(), Some("from-app-env"));

        std::env::remove_var("WEATHER_API_KEY");
        std::env::remove_var("APP__NEWS__API_KEY");
    }
}

use serde::{Deserialize, Serialize};

/// Current conditions at the configured location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub description: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: i64,
    pub icon_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub source_name: String,
    pub url: String,
    /// ISO-8601 timestamp as reported by the provider.
    pub published_at: String,
}

/// Body of `GET /api/sendai-info`. A `None` field means that provider could
/// not be fetched; it is serialized as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendaiInfo {
    pub weather: Option<WeatherInfo>,
    pub news: Option<Vec<NewsArticle>>,
}

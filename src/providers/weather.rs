use serde::{Deserialize, Serialize};

use super::{get_json, settle, ProviderError};
use crate::config::WeatherConfig;
use crate::models::WeatherInfo;

#[derive(Serialize)]
struct OwQuery<'a> {
    lat: f64,
    lon: f64,
    appid: &'a str,
    units: &'a str,
    lang: &'a str,
}

#[derive(Deserialize)]
struct OwCurrentResponse {
    weather: Vec<OwWeather>,
    main: OwMain,
}

#[derive(Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Deserialize)]
struct OwMain {
    temp: f64,
    #[serde(deserialize_with = "deserialize_whole_number")]
    humidity: i64,
}

/// Accepts `40` and `40.0` alike, rejects `40.5`.
fn deserialize_whole_number<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    let n = f64::deserialize(d)?;
    if n.is_finite() && n.fract() == 0.0 {
        Ok(n as i64)
    } else {
        Err(serde::de::Error::custom(format!("expected a whole number, got {n}")))
    }
}

/// Current weather from OpenWeatherMap, or `None` if it could not be fetched.
#[tracing::instrument(skip_all)]
pub async fn fetch_weather(client: &reqwest::Client, config: &WeatherConfig) -> Option<WeatherInfo> {
    settle("weather", try_fetch_weather(client, config).await)
}

async fn try_fetch_weather(
    client: &reqwest::Client,
    config: &WeatherConfig,
) -> Result<WeatherInfo, ProviderError> {
    let api_key = config.api_key().ok_or(ProviderError::MissingApiKey)?;

    let query = OwQuery {
        lat: config.lat,
        lon: config.lon,
        appid: api_key,
        units: &config.units,
        lang: &config.lang,
    };

    let parsed: OwCurrentResponse = get_json(client, &config.url, &query).await?;

    let OwCurrentResponse { weather, main } = parsed;
    let current = weather.into_iter().next().ok_or(ProviderError::EmptyWeather)?;

    Ok(WeatherInfo {
        description: current.description,
        temperature: main.temp,
        humidity: main.humidity,
        icon_id: current.icon,
    })
}

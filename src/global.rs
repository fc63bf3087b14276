use std::sync::Arc;

use anyhow::Context as _;

use crate::config::Config;

pub struct Global {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl Global {
    pub fn init(config: Config) -> anyhow::Result<Arc<Self>> {
        let http_client = reqwest::Client::builder()
            .user_agent(&config.http.user_agent)
            .build()
            .context("http client")?;

        if config.weather.api_key().is_none() {
            tracing::warn!("WEATHER_API_KEY is not set, weather will always be absent");
        }

        if config.news.api_key().is_none() {
            tracing::warn!("NEWS_API_KEY is not set, news will always be absent");
        }

        Ok(Arc::new(Self { config, http_client }))
    }
}

use std::sync::Arc;

use tokio::task::JoinError;

use crate::global::Global;
use crate::models::{NewsArticle, SendaiInfo, WeatherInfo};
use crate::providers::{news, weather};

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("no upstream source returned data")]
    AllSourcesUnavailable,
}

/// Fetches weather and news concurrently and merges whatever succeeded.
///
/// Each provider runs in its own task so a panic in one is reported as
/// absence for that source only.
#[tracing::instrument(skip_all)]
pub async fn aggregate(global: &Arc<Global>) -> Result<SendaiInfo, AggregateError> {
    let weather_task = tokio::spawn({
        let global = global.clone();
        async move { weather::fetch_weather(&global.http_client, &global.config.weather).await }
    });

    let news_task = tokio::spawn({
        let global = global.clone();
        async move { news::fetch_news(&global.http_client, &global.config.news).await }
    });

    let (weather, news) = tokio::join!(weather_task, news_task);

    combine(joined("weather", weather), joined("news", news))
}

fn joined<T>(source: &'static str, result: Result<Option<T>, JoinError>) -> Option<T> {
    result.unwrap_or_else(|e| {
        tracing::error!(source, error = %e, "fetch task failed");
        None
    })
}

fn combine(
    weather: Option<WeatherInfo>,
    news: Option<Vec<NewsArticle>>,
) -> Result<SendaiInfo, AggregateError> {
    if weather.is_none() && news.is_none() {
        tracing::error!("all upstream sources failed");
        return Err(AggregateError::AllSourcesUnavailable);
    }

    Ok(SendaiInfo { weather, news })
}

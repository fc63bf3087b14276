use serde::{Deserialize, Serialize};

use super::{get_json, settle, ProviderError};
use crate::config::NewsConfig;
use crate::models::NewsArticle;

#[derive(Serialize)]
struct HeadlinesQuery<'a> {
    #[serde(rename = "apiKey")]
    api_key: &'a str,
    country: &'a str,
    q: &'a str,
    #[serde(rename = "pageSize")]
    page_size: u32,
}

#[derive(Deserialize)]
struct HeadlinesResponse {
    articles: Vec<Article>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: String,
    source: ArticleSource,
    url: String,
    published_at: String,
}

#[derive(Deserialize)]
struct ArticleSource {
    name: String,
}

impl From<Article> for NewsArticle {
    fn from(article: Article) -> Self {
        Self {
            title: article.title,
            source_name: article.source.name,
            url: article.url,
            published_at: article.published_at,
        }
    }
}

/// Top headlines from NewsAPI in provider order, or `None` if they could not
/// be fetched. One malformed article discards the whole list.
#[tracing::instrument(skip_all)]
pub async fn fetch_news(client: &reqwest::Client, config: &NewsConfig) -> Option<Vec<NewsArticle>> {
    settle("news", try_fetch_news(client, config).await)
}

async fn try_fetch_news(
    client: &reqwest::Client,
    config: &NewsConfig,
) -> Result<Vec<NewsArticle>, ProviderError> {
    let api_key = config.api_key().ok_or(ProviderError::MissingApiKey)?;

    let query = HeadlinesQuery {
        api_key,
        country: &config.country,
        q: &config.query,
        page_size: config.page_size,
    };

    let parsed: HeadlinesResponse = get_json(client, &config.url, &query).await?;

    Ok(parsed
        .articles
        .into_iter()
        .take(config.page_size as usize)
        .map(NewsArticle::from)
        .collect())
}

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod news;
pub mod weather;

const MAX_LOGGED_BODY: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("api key is not configured")]
    MissingApiKey,
    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("response contained no weather entries")]
    EmptyWeather,
}

/// Sends one GET request and decodes a 2xx body as `T`.
pub(crate) async fn get_json<T, Q>(
    client: &reqwest::Client,
    url: &str,
    query: &Q,
) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let resp = client.get(url).query(query).send().await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(ProviderError::Status {
            status,
            body: truncate_body(&body),
        });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Collapses a provider result into absence, logging why it is absent.
pub(crate) fn settle<T>(provider: &'static str, result: Result<T, ProviderError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(ProviderError::MissingApiKey) => {
            tracing::warn!(provider, "api key is not configured, skipping request");
            None
        }
        Err(ProviderError::Status { status, body }) => {
            tracing::error!(provider, status = status.as_u16(), body = %body, "upstream returned an error status");
            None
        }
        Err(e) => {
            tracing::error!(provider, error = %e, "failed to fetch from upstream");
            None
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() > MAX_LOGGED_BODY {
        let head: String = body.chars().take(MAX_LOGGED_BODY).collect();
        format!("{head}...")
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "仙".repeat(MAX_LOGGED_BODY + 10);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), MAX_LOGGED_BODY + 3);
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn settle_maps_every_error_to_none() {
        assert_eq!(settle("weather", Ok(1)), Some(1));
        assert_eq!(settle::<i32>("weather", Err(ProviderError::MissingApiKey)), None);
        assert_eq!(settle::<i32>("news", Err(ProviderError::EmptyWeather)), None);
        assert_eq!(
            settle::<i32>(
                "news",
                Err(ProviderError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".into(),
                })
            ),
            None
        );
    }
}

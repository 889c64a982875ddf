use crate::modules::provider::external::CommonHttpHandler;
use crate::modules::provider::traits::{FetchOutcome, RatingProviderClient, RatingSample};
use crate::shared::domain::value_objects::RatingProvider;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

use super::dto::ImdbDocument;

const BASE_URL: &str = "https://www.imdb.com/title";
// IMDb has no rating API; title pages are fetched with a browser
// user-agent and the embedded structured-data block is read instead.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";
const CALLS_PER_SECOND: usize = 2;

pub struct ImdbClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
    json_block: Regex,
}

impl ImdbClient {
    pub fn new() -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(30, BROWSER_USER_AGENT)?;
        let json_block = Regex::new(r#"(?s)<script type="application/ld\+json">(.*?)</script>"#)
            .map_err(|e| AppError::ConfigError(format!("Invalid IMDb extractor pattern: {}", e)))?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            rate_limiter: Arc::new(RateLimiter::new(CALLS_PER_SECOND)),
            json_block,
        })
    }

    /// Movies, shows and episodes all have their own title page, so a single
    /// lookup covers the whole capability set.
    async fn fetch_title_rating(&self, imdb_id: &str) -> AppResult<Option<RatingSample>> {
        self.rate_limiter.wait_for_slot().await;

        let url = format!("{}/{}/", self.base_url, imdb_id);
        let result = self.request_page(&url).await;
        // Calls are recorded per attempt, parse outcome notwithstanding.
        self.rate_limiter.record_call().await;
        let body = result?;

        let Some(block) = self.json_block.captures(&body).and_then(|c| c.get(1)) else {
            return Ok(None);
        };

        let document: ImdbDocument = serde_json::from_str(block.as_str())
            .map_err(|e| AppError::ApiError(format!("Failed to parse IMDb rating data: {}", e)))?;

        let Some(aggregate) = document.aggregate_rating else {
            return Ok(None);
        };

        match (aggregate.rating(), aggregate.votes()) {
            (Some(rating), Some(votes)) => Ok(Some(RatingSample {
                provider: RatingProvider::Imdb,
                rating,
                votes,
            })),
            _ => Ok(None),
        }
    }

    async fn request_page(&self, url: &str) -> AppResult<String> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        CommonHttpHandler::handle_response_status(response.status(), "IMDb")?;
        Ok(response.text().await?)
    }

    fn into_outcome(&self, imdb_id: &str, result: AppResult<Option<RatingSample>>) -> FetchOutcome {
        match result {
            Ok(Some(sample)) => FetchOutcome::Sample(sample),
            Ok(None) => {
                debug!("No IMDb rating data found for {}", imdb_id);
                FetchOutcome::NoData
            }
            Err(e) => {
                warn!("Error fetching IMDb rating for {}: {}", imdb_id, e);
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl RatingProviderClient for ImdbClient {
    fn provider(&self) -> RatingProvider {
        RatingProvider::Imdb
    }

    async fn fetch_movie_rating(&self, imdb_id: &str) -> FetchOutcome {
        let result = self.fetch_title_rating(imdb_id).await;
        self.into_outcome(imdb_id, result)
    }

    async fn fetch_show_rating(&self, imdb_id: &str) -> FetchOutcome {
        let result = self.fetch_title_rating(imdb_id).await;
        self.into_outcome(imdb_id, result)
    }

    async fn fetch_episode_rating(
        &self,
        episode_imdb_id: &str,
        _show_imdb_id: &str,
        _season: i32,
        _episode: i32,
    ) -> FetchOutcome {
        let result = self.fetch_title_rating(episode_imdb_id).await;
        self.into_outcome(episode_imdb_id, result)
    }
}

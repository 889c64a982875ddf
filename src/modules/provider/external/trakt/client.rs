use crate::modules::provider::external::CommonHttpHandler;
use crate::modules::provider::traits::{FetchOutcome, RatingProviderClient, RatingSample};
use crate::shared::domain::value_objects::RatingProvider;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, warn};

use super::dto::TraktRatingResponse;

const BASE_URL: &str = "https://api.trakt.tv";
// Key and user-agent from Kodi's official TV show scraper.
const API_KEY: &str = "90901c6be3b2de5a4fa0edf9ab5c75e9a5a0fef2b4ee7373d8b63dcf61f95697";
const API_VERSION: &str = "2";
const USER_AGENT: &str = "Kodi TV Show scraper by Team Kodi; contact pkscout@kodi.tv";
const CALLS_PER_SECOND: usize = 2;

pub struct TraktClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl TraktClient {
    pub fn new() -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(30, USER_AGENT)?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
            rate_limiter: Arc::new(RateLimiter::new(CALLS_PER_SECOND)),
        })
    }

    async fn fetch_endpoint(&self, url: &str, extended: bool) -> AppResult<Option<RatingSample>> {
        self.rate_limiter.wait_for_slot().await;

        let result = self.request_json(url, extended).await;
        // Calls are recorded per attempt, parse outcome notwithstanding.
        self.rate_limiter.record_call().await;
        let data = result?;

        match (data.rating, data.votes) {
            (Some(rating), Some(votes)) => Ok(Some(RatingSample {
                provider: RatingProvider::Trakt,
                rating,
                votes,
            })),
            _ => Ok(None),
        }
    }

    async fn request_json(&self, url: &str, extended: bool) -> AppResult<TraktRatingResponse> {
        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("trakt-api-key", API_KEY)
            .header("trakt-api-version", API_VERSION);
        if extended {
            request = request.query(&[("extended", "full")]);
        }

        let response = request.send().await?;
        CommonHttpHandler::handle_response_status(response.status(), "Trakt")?;

        response
            .json::<TraktRatingResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Trakt response: {}", e)))
    }

    fn into_outcome(&self, id: &str, result: AppResult<Option<RatingSample>>) -> FetchOutcome {
        match result {
            Ok(Some(sample)) => FetchOutcome::Sample(sample),
            Ok(None) => {
                debug!("No Trakt rating data found for {}", id);
                FetchOutcome::NoData
            }
            Err(e) => {
                warn!("Error fetching Trakt rating for {}: {}", id, e);
                FetchOutcome::Failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl RatingProviderClient for TraktClient {
    fn provider(&self) -> RatingProvider {
        RatingProvider::Trakt
    }

    async fn fetch_movie_rating(&self, imdb_id: &str) -> FetchOutcome {
        let url = format!("{}/movies/{}", self.base_url, imdb_id);
        let result = self.fetch_endpoint(&url, true).await;
        self.into_outcome(imdb_id, result)
    }

    async fn fetch_show_rating(&self, imdb_id: &str) -> FetchOutcome {
        let url = format!("{}/shows/{}", self.base_url, imdb_id);
        let result = self.fetch_endpoint(&url, true).await;
        self.into_outcome(imdb_id, result)
    }

    async fn fetch_episode_rating(
        &self,
        _episode_imdb_id: &str,
        show_imdb_id: &str,
        season: i32,
        episode: i32,
    ) -> FetchOutcome {
        // Specials land in season 0, which the episode-ratings endpoint does
        // not cover; those fall back to the show-level rating.
        if season > 0 && episode > 0 {
            let url = format!(
                "{}/shows/{}/seasons/{}/episodes/{}/ratings",
                self.base_url, show_imdb_id, season, episode
            );
            let result = self.fetch_endpoint(&url, false).await;
            self.into_outcome(show_imdb_id, result)
        } else {
            self.fetch_show_rating(show_imdb_id).await
        }
    }
}

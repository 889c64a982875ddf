use crate::shared::domain::value_objects::RatingProvider;
use async_trait::async_trait;

/// One (rating, vote-count) sample from a single provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSample {
    pub provider: RatingProvider,
    /// 0.0-10.0 scale.
    pub rating: f64,
    pub votes: u64,
}

impl RatingSample {
    /// Only strictly positive ratings with at least one vote count toward
    /// the aggregate.
    pub fn contributes(&self) -> bool {
        self.rating > 0.0 && self.votes > 0
    }
}

/// Result of one provider lookup. Fetch failures are folded in here and
/// logged at the client; a lookup never surfaces as `Err` to the runner.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Sample(RatingSample),
    NoData,
    Failed(String),
}

/// Lookup capabilities every enabled provider client implements.
#[async_trait]
pub trait RatingProviderClient: Send + Sync {
    /// Provider this client fetches from
    fn provider(&self) -> RatingProvider;

    async fn fetch_movie_rating(&self, imdb_id: &str) -> FetchOutcome;

    async fn fetch_show_rating(&self, imdb_id: &str) -> FetchOutcome;

    /// Episode lookups carry both cross-reference ids: IMDb resolves the
    /// episode's own id, Trakt resolves the show id plus season/episode.
    async fn fetch_episode_rating(
        &self,
        episode_imdb_id: &str,
        show_imdb_id: &str,
        season: i32,
        episode: i32,
    ) -> FetchOutcome;
}

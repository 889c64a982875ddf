pub mod aggregation;
pub mod external;
pub mod traits;

// Re-exports for easy external access
pub use crate::shared::domain::value_objects::RatingProvider;
pub use aggregation::{AggregateResult, RatingAggregator};
pub use external::{imdb::ImdbClient, trakt::TraktClient};
pub use traits::{FetchOutcome, RatingProviderClient, RatingSample};

use crate::shared::errors::AppResult;
use std::sync::Arc;

/// Build one client per enabled provider, in configuration order.
pub fn build_clients(
    providers: &[RatingProvider],
) -> AppResult<Vec<Arc<dyn RatingProviderClient>>> {
    providers
        .iter()
        .map(|provider| {
            Ok(match provider {
                RatingProvider::Imdb => Arc::new(ImdbClient::new()?) as Arc<dyn RatingProviderClient>,
                RatingProvider::Trakt => {
                    Arc::new(TraktClient::new()?) as Arc<dyn RatingProviderClient>
                }
            })
        })
        .collect()
}

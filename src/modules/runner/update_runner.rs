use crate::modules::catalog::{CatalogSelector, CatalogWriter, MediaItem};
use crate::modules::provider::aggregation::{round_one_decimal, RatingAggregator};
use crate::modules::provider::{FetchOutcome, RatingProviderClient, RatingSample};
use crate::shared::errors::AppResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Terminal state of one item's pass through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    Updated { old: f64, new: f64 },
    Unchanged,
    NoData,
}

/// Per-cycle accounting across all processed items.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CycleSummary {
    pub updated: usize,
    pub unchanged: usize,
    pub no_data: usize,
    pub failed: usize,
}

impl CycleSummary {
    pub fn total(&self) -> usize {
        self.updated + self.unchanged + self.no_data + self.failed
    }
}

/// Orchestrates selection, fetch, aggregation and write-back for one
/// refresh cycle. Items and providers are processed sequentially; every
/// failure is contained at the item boundary so one bad title never stops
/// the rest of the catalog from being refreshed.
pub struct UpdateRunner {
    selector: CatalogSelector,
    writer: CatalogWriter,
    clients: Vec<Arc<dyn RatingProviderClient>>,
    update_movies: bool,
    update_tvshows: bool,
}

impl UpdateRunner {
    pub fn new(
        selector: CatalogSelector,
        writer: CatalogWriter,
        clients: Vec<Arc<dyn RatingProviderClient>>,
        update_movies: bool,
        update_tvshows: bool,
    ) -> Self {
        Self {
            selector,
            writer,
            clients,
            update_movies,
            update_tvshows,
        }
    }

    /// One full pass over the eligible catalog.
    pub async fn refresh_library(&self, now: DateTime<Utc>) -> CycleSummary {
        let mut summary = CycleSummary::default();

        if self.update_movies {
            info!("Starting movie ratings update");
            let movies = self.selector.select_movies(now).await;
            self.process_items(&movies, &mut summary).await;
        }

        if self.update_tvshows {
            info!("Starting TV show episode ratings update");
            let episodes = self.selector.select_episodes(now).await;
            self.process_items(&episodes, &mut summary).await;
        }

        summary
    }

    async fn process_items(&self, items: &[MediaItem], summary: &mut CycleSummary) {
        for item in items {
            match self.process_item(item).await {
                Ok(ItemOutcome::Updated { old, new }) => {
                    info!("{} - Rating: {} -> {}", item.label(), old, new);
                    summary.updated += 1;
                }
                Ok(ItemOutcome::Unchanged) => {
                    debug!("{} - rating unchanged", item.label());
                    summary.unchanged += 1;
                }
                Ok(ItemOutcome::NoData) => {
                    debug!("{} - no provider returned a usable rating", item.label());
                    summary.no_data += 1;
                }
                Err(e) => {
                    error!("Error updating {}: {}", item.label(), e);
                    summary.failed += 1;
                }
            }
        }
    }

    async fn process_item(&self, item: &MediaItem) -> AppResult<ItemOutcome> {
        let samples = self.collect_samples(item).await;

        let Some(result) = RatingAggregator::aggregate(&samples) else {
            return Ok(ItemOutcome::NoData);
        };

        let old_rating = round_one_decimal(item.stored_rating());
        if !rating_changed(old_rating, result.rating) {
            return Ok(ItemOutcome::Unchanged);
        }

        self.writer
            .write_rating(item.catalog_id(), item.kind(), result.rating)
            .await;

        Ok(ItemOutcome::Updated {
            old: old_rating,
            new: result.rating,
        })
    }

    /// Consult every enabled provider for the item. Absent and failed
    /// lookups are logged here; only real samples go to the aggregator.
    async fn collect_samples(&self, item: &MediaItem) -> Vec<RatingSample> {
        let mut samples = Vec::with_capacity(self.clients.len());

        for client in &self.clients {
            let outcome = match item {
                MediaItem::Movie(movie) => client.fetch_movie_rating(&movie.imdb_id).await,
                MediaItem::Episode(episode) => {
                    client
                        .fetch_episode_rating(
                            &episode.imdb_id,
                            &episode.show_imdb_id,
                            episode.season,
                            episode.episode,
                        )
                        .await
                }
            };

            match outcome {
                FetchOutcome::Sample(sample) => {
                    info!(
                        "New rating from {}: {} ({} votes)",
                        sample.provider, sample.rating, sample.votes
                    );
                    samples.push(sample);
                }
                FetchOutcome::NoData => {
                    debug!("{} returned no rating for {}", client.provider(), item.label());
                }
                FetchOutcome::Failed(reason) => {
                    error!(
                        "Error fetching {} rating for {}: {}",
                        client.provider(),
                        item.label(),
                        reason
                    );
                }
            }
        }

        samples
    }
}

/// Ratings are compared at one-decimal precision, the catalog's own scale.
fn rating_changed(old: f64, new: f64) -> bool {
    (old * 10.0).round() as i64 != (new * 10.0).round() as i64
}

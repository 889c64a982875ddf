use super::dto::{EpisodeRecord, EpisodesResponse, MoviesResponse, TvShowsResponse};
use super::models::{EpisodeItem, MediaItem, MovieItem};
use super::transport::CatalogTransport;
use crate::shared::errors::AppResult;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, warn};

const AIR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Selects the catalog entries eligible for a refresh cycle and extracts
/// their provider cross-reference ids. Catalog failures degrade to an empty
/// selection; items failing a filter are silently excluded.
pub struct CatalogSelector {
    transport: Arc<dyn CatalogTransport>,
    movie_years_back: i32,
    tvshow_months_back: u32,
}

impl CatalogSelector {
    pub fn new(
        transport: Arc<dyn CatalogTransport>,
        movie_years_back: i32,
        tvshow_months_back: u32,
    ) -> Self {
        Self {
            transport,
            movie_years_back,
            tvshow_months_back,
        }
    }

    /// Movies released inside the years-back window that carry an IMDb id.
    pub async fn select_movies(&self, now: DateTime<Utc>) -> Vec<MediaItem> {
        let response = match self.query_movies().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error querying catalog movies: {}", e);
                return Vec::new();
            }
        };

        let cutoff_year = now.year() - self.movie_years_back;
        debug!(
            "Found {} movies, cutoff year: {}",
            response.movies.len(),
            cutoff_year
        );

        let recent: Vec<MediaItem> = response
            .movies
            .into_iter()
            .filter(|movie| movie.year >= cutoff_year)
            .filter_map(|movie| {
                let imdb_id = movie.imdb_id()?.to_string();
                Some(MediaItem::Movie(MovieItem {
                    movie_id: movie.movieid,
                    title: movie.title,
                    year: movie.year,
                    stored_rating: movie.rating,
                    imdb_id,
                }))
            })
            .collect();

        debug!("After year filter: {} movies", recent.len());
        recent
    }

    /// Episodes first aired inside the months-back window that carry both
    /// their own IMDb id and their show's.
    pub async fn select_episodes(&self, now: DateTime<Utc>) -> Vec<MediaItem> {
        let show_map = match self.query_show_ids().await {
            Ok(map) => map,
            Err(e) => {
                error!("Error querying catalog shows: {}", e);
                return Vec::new();
            }
        };

        let response = match self.query_episodes().await {
            Ok(response) => response,
            Err(e) => {
                error!("Error querying catalog episodes: {}", e);
                return Vec::new();
            }
        };

        let cutoff = (now - Duration::days(self.tvshow_months_back as i64 * 30)).date_naive();
        debug!(
            "Found {} total episodes, cutoff air date: {}",
            response.episodes.len(),
            cutoff
        );

        let recent: Vec<MediaItem> = response
            .episodes
            .into_iter()
            .filter_map(|episode| {
                let first_aired = parse_recent_air_date(&episode, cutoff)?;
                let show_imdb_id = show_map.get(&episode.tvshowid)?.clone();
                let imdb_id = episode.imdb_id()?.to_string();
                Some(MediaItem::Episode(EpisodeItem {
                    episode_id: episode.episodeid,
                    show_title: episode.showtitle,
                    season: episode.season,
                    episode: episode.episode,
                    first_aired,
                    stored_rating: episode.rating,
                    imdb_id,
                    show_imdb_id,
                }))
            })
            .collect();

        debug!("Found {} recent episodes with IMDb ids", recent.len());
        recent
    }

    async fn query_movies(&self) -> AppResult<MoviesResponse> {
        let params = json!({
            "properties": ["uniqueid", "rating", "year", "title"]
        });
        let result = self
            .transport
            .execute("VideoLibrary.GetMovies", params)
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    async fn query_show_ids(&self) -> AppResult<HashMap<i64, String>> {
        let params = json!({
            "properties": ["uniqueid"]
        });
        let result = self
            .transport
            .execute("VideoLibrary.GetTVShows", params)
            .await?;
        let response: TvShowsResponse = serde_json::from_value(result)?;

        Ok(response
            .tvshows
            .iter()
            .filter_map(|show| Some((show.tvshowid, show.imdb_id()?.to_string())))
            .collect())
    }

    async fn query_episodes(&self) -> AppResult<EpisodesResponse> {
        let params = json!({
            "properties": [
                "season",
                "episode",
                "firstaired",
                "rating",
                "showtitle",
                "tvshowid",
                "uniqueid"
            ]
        });
        let result = self
            .transport
            .execute("VideoLibrary.GetEpisodes", params)
            .await?;
        Ok(serde_json::from_value(result)?)
    }
}

/// Air date inside the window, or `None`. Malformed dates are logged and
/// treated as not recent.
fn parse_recent_air_date(episode: &EpisodeRecord, cutoff: NaiveDate) -> Option<NaiveDate> {
    if episode.firstaired.is_empty() {
        return None;
    }

    match NaiveDate::parse_from_str(&episode.firstaired, AIR_DATE_FORMAT) {
        Ok(air_date) if air_date >= cutoff => Some(air_date),
        Ok(_) => None,
        Err(_) => {
            warn!("Invalid air date format: {}", episode.firstaired);
            None
        }
    }
}

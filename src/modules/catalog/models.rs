use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Episode,
}

/// A movie eligible for refresh, with its IMDb-scheme cross-reference id.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieItem {
    pub movie_id: i64,
    pub title: String,
    pub year: i32,
    pub stored_rating: f64,
    pub imdb_id: String,
}

/// An episode eligible for refresh. Carries two cross-reference ids because
/// providers key episode lookups differently: IMDb wants the episode's own
/// id, Trakt wants the show id plus season/episode numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeItem {
    pub episode_id: i64,
    pub show_title: String,
    pub season: i32,
    pub episode: i32,
    pub first_aired: NaiveDate,
    pub stored_rating: f64,
    pub imdb_id: String,
    pub show_imdb_id: String,
}

/// One catalog entry selected for a refresh cycle. Transient: produced by
/// the selector and consumed within the same cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaItem {
    Movie(MovieItem),
    Episode(EpisodeItem),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Episode(_) => MediaKind::Episode,
        }
    }

    /// Catalog-internal id used for write-back.
    pub fn catalog_id(&self) -> i64 {
        match self {
            MediaItem::Movie(movie) => movie.movie_id,
            MediaItem::Episode(episode) => episode.episode_id,
        }
    }

    pub fn stored_rating(&self) -> f64 {
        match self {
            MediaItem::Movie(movie) => movie.stored_rating,
            MediaItem::Episode(episode) => episode.stored_rating,
        }
    }

    /// Human-readable identity for logs.
    pub fn label(&self) -> String {
        match self {
            MediaItem::Movie(movie) => format!("Movie: {}", movie.title),
            MediaItem::Episode(episode) => format!(
                "{} S{:02}E{:02}",
                episode.show_title, episode.season, episode.episode
            ),
        }
    }
}

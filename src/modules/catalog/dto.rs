use serde::Deserialize;
use std::collections::HashMap;

/// Wire records for the catalog's VideoLibrary queries. Only the properties
/// the selector asks for are modeled; everything else is ignored.

#[derive(Debug, Clone, Deserialize)]
pub struct MoviesResponse {
    #[serde(default)]
    pub movies: Vec<MovieRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieRecord {
    pub movieid: i64,
    pub title: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub uniqueid: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvShowsResponse {
    #[serde(default)]
    pub tvshows: Vec<ShowRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowRecord {
    pub tvshowid: i64,
    #[serde(default)]
    pub uniqueid: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodesResponse {
    #[serde(default)]
    pub episodes: Vec<EpisodeRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeRecord {
    pub episodeid: i64,
    #[serde(default)]
    pub season: i32,
    #[serde(default)]
    pub episode: i32,
    #[serde(default)]
    pub firstaired: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub showtitle: String,
    pub tvshowid: i64,
    #[serde(default)]
    pub uniqueid: HashMap<String, String>,
}

impl MovieRecord {
    pub fn imdb_id(&self) -> Option<&str> {
        non_empty(self.uniqueid.get("imdb"))
    }
}

impl ShowRecord {
    pub fn imdb_id(&self) -> Option<&str> {
        non_empty(self.uniqueid.get("imdb"))
    }
}

impl EpisodeRecord {
    pub fn imdb_id(&self) -> Option<&str> {
        non_empty(self.uniqueid.get("imdb"))
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|id| !id.is_empty())
}

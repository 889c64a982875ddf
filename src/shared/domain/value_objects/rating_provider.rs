use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported external rating providers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RatingProvider {
    /// IMDb title-page scrape - default provider
    #[serde(rename = "imdb")]
    Imdb,
    /// Trakt REST API
    #[serde(rename = "trakt")]
    Trakt,
}

impl fmt::Display for RatingProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RatingProvider::Imdb => "imdb",
            RatingProvider::Trakt => "trakt",
        };
        write!(f, "{}", name)
    }
}

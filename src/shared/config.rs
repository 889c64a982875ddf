use crate::shared::domain::value_objects::RatingProvider;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::warn;

/// Service configuration, read once at startup.
///
/// Every option has a default so the service can run against a local
/// catalog without any environment set up.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub use_imdb: bool,
    pub use_trakt: bool,
    pub update_movies: bool,
    pub update_tvshows: bool,
    /// Movies released within this many years are refreshed.
    pub movie_years_back: i32,
    /// Episodes first aired within this many months (30-day months) are refreshed.
    pub tvshow_months_back: u32,
    /// Minimum days between two refresh cycles.
    pub update_interval_days: u32,
    /// Catalog JSON-RPC endpoint.
    pub catalog_url: String,
    /// Where the schedule state file lives.
    pub state_path: PathBuf,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            use_imdb: true,
            use_trakt: false,
            update_movies: true,
            update_tvshows: true,
            movie_years_back: 2,
            tvshow_months_back: 3,
            update_interval_days: 7,
            catalog_url: "http://127.0.0.1:8080/jsonrpc".to_string(),
            state_path: PathBuf::from("ratings-refresher-state.json"),
        }
    }
}

impl RefreshConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            use_imdb: env_flag("RATINGS_USE_IMDB", defaults.use_imdb),
            use_trakt: env_flag("RATINGS_USE_TRAKT", defaults.use_trakt),
            update_movies: env_flag("RATINGS_UPDATE_MOVIES", defaults.update_movies),
            update_tvshows: env_flag("RATINGS_UPDATE_TVSHOWS", defaults.update_tvshows),
            movie_years_back: env_value("RATINGS_MOVIE_YEARS_BACK", defaults.movie_years_back),
            tvshow_months_back: env_value(
                "RATINGS_TVSHOW_MONTHS_BACK",
                defaults.tvshow_months_back,
            ),
            update_interval_days: env_value(
                "RATINGS_UPDATE_INTERVAL_DAYS",
                defaults.update_interval_days,
            ),
            catalog_url: env::var("RATINGS_CATALOG_URL").unwrap_or(defaults.catalog_url),
            state_path: env::var("RATINGS_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
        }
    }

    /// Providers to consult this cycle. At least one provider must be
    /// enabled; when both are off the config corrects itself to IMDb.
    pub fn enabled_providers(&self) -> Vec<RatingProvider> {
        let mut providers = Vec::new();
        if self.use_imdb {
            providers.push(RatingProvider::Imdb);
        }
        if self.use_trakt {
            providers.push(RatingProvider::Trakt);
        }

        if providers.is_empty() {
            warn!("No rating provider enabled, defaulting to IMDb");
            providers.push(RatingProvider::Imdb);
        }

        providers
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

fn env_value<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

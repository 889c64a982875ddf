//! Shared test doubles and canned catalog payload builders.

#![allow(dead_code)]

use async_trait::async_trait;
use latest_ratings::modules::catalog::CatalogTransport;
use latest_ratings::shared::errors::{AppError, AppResult};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Catalog transport double: serves prepared results per RPC method and
/// records every call for assertions.
pub struct FakeCatalogTransport {
    results: HashMap<String, Value>,
    calls: Mutex<Vec<(String, Value)>>,
    fail_all: bool,
}

impl FakeCatalogTransport {
    pub fn new() -> Self {
        Self {
            results: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            fail_all: false,
        }
    }

    /// A transport where every call fails, as if the catalog were offline.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::new()
        }
    }

    pub fn with_result(mut self, method: &str, result: Value) -> Self {
        self.results.insert(method.to_string(), result);
        self
    }

    /// Params of every recorded call to `method`, in call order.
    pub fn calls_to(&self, method: &str) -> Vec<Value> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, params)| params.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogTransport for FakeCatalogTransport {
    async fn execute(&self, method: &str, params: Value) -> AppResult<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));

        if self.fail_all {
            return Err(AppError::CatalogError("catalog offline".to_string()));
        }

        self.results.get(method).cloned().ok_or_else(|| {
            AppError::CatalogError(format!("Empty response from {} call", method))
        })
    }
}

pub fn movie(movieid: i64, title: &str, year: i32, rating: f64, imdb_id: Option<&str>) -> Value {
    let uniqueid = match imdb_id {
        Some(id) => json!({ "imdb": id }),
        None => json!({}),
    };
    json!({
        "movieid": movieid,
        "title": title,
        "year": year,
        "rating": rating,
        "uniqueid": uniqueid,
    })
}

pub fn movies_result(movies: Vec<Value>) -> Value {
    json!({ "movies": movies })
}

pub fn show(tvshowid: i64, imdb_id: Option<&str>) -> Value {
    let uniqueid = match imdb_id {
        Some(id) => json!({ "imdb": id }),
        None => json!({}),
    };
    json!({
        "tvshowid": tvshowid,
        "uniqueid": uniqueid,
    })
}

pub fn shows_result(tvshows: Vec<Value>) -> Value {
    json!({ "tvshows": tvshows })
}

#[allow(clippy::too_many_arguments)]
pub fn episode(
    episodeid: i64,
    showtitle: &str,
    season: i32,
    episode_num: i32,
    firstaired: &str,
    rating: f64,
    tvshowid: i64,
    imdb_id: Option<&str>,
) -> Value {
    let uniqueid = match imdb_id {
        Some(id) => json!({ "imdb": id }),
        None => json!({}),
    };
    json!({
        "episodeid": episodeid,
        "showtitle": showtitle,
        "season": season,
        "episode": episode_num,
        "firstaired": firstaired,
        "rating": rating,
        "tvshowid": tvshowid,
        "uniqueid": uniqueid,
    })
}

pub fn episodes_result(episodes: Vec<Value>) -> Value {
    json!({ "episodes": episodes })
}

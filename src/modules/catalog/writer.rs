use super::models::MediaKind;
use super::transport::CatalogTransport;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// Pushes an updated rating back into the catalog. Write failures are
/// logged and absorbed; a broken write never aborts the batch.
pub struct CatalogWriter {
    transport: Arc<dyn CatalogTransport>,
}

impl CatalogWriter {
    pub fn new(transport: Arc<dyn CatalogTransport>) -> Self {
        Self { transport }
    }

    pub async fn write_rating(&self, item_id: i64, kind: MediaKind, rating: f64) {
        let (method, id_field) = match kind {
            MediaKind::Movie => ("VideoLibrary.SetMovieDetails", "movieid"),
            MediaKind::Episode => ("VideoLibrary.SetEpisodeDetails", "episodeid"),
        };

        let params = json!({
            id_field: item_id,
            "rating": rating,
        });

        match self.transport.execute(method, params).await {
            Ok(result) => debug!("{} response: {}", method, result),
            Err(e) => error!("Error in {} for id {}: {}", method, item_id, e),
        }
    }
}

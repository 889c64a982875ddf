pub mod dto;
pub mod models;
pub mod selector;
pub mod transport;
pub mod writer;

// Re-exports for easy external access
pub use models::{EpisodeItem, MediaItem, MediaKind, MovieItem};
pub use selector::CatalogSelector;
pub use transport::{CatalogTransport, HttpCatalogTransport};
pub use writer::CatalogWriter;

pub mod common;
pub mod imdb;
pub mod trakt;

pub use common::CommonHttpHandler;

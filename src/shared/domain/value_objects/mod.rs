mod rating_provider;

pub use rating_provider::RatingProvider;

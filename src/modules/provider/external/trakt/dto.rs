use serde::Deserialize;

/// Rating fields shared by the movie, show and episode-ratings endpoints.
/// The movie/show summaries only carry them with `extended=full`.
#[derive(Debug, Clone, Deserialize)]
pub struct TraktRatingResponse {
    pub rating: Option<f64>,
    pub votes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rating_fields_and_ignores_the_rest() {
        let response: TraktRatingResponse = serde_json::from_str(
            r#"{"title":"The Matrix","year":1999,"rating":8.34567,"votes":29051,"language":"en"}"#,
        )
        .unwrap();
        assert_eq!(response.rating, Some(8.34567));
        assert_eq!(response.votes, Some(29051));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let response: TraktRatingResponse = serde_json::from_str(r#"{"title":"Unrated"}"#).unwrap();
        assert_eq!(response.rating, None);
        assert_eq!(response.votes, None);
    }
}

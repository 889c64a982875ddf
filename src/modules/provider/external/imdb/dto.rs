use serde::Deserialize;
use serde_json::Value;

/// Slice of the `application/ld+json` document embedded in a title page.
#[derive(Debug, Clone, Deserialize)]
pub struct ImdbDocument {
    #[serde(rename = "aggregateRating")]
    pub aggregate_rating: Option<ImdbAggregateRating>,
}

/// `ratingValue` and `ratingCount` arrive as numbers on most pages and as
/// strings on some; both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ImdbAggregateRating {
    #[serde(rename = "ratingValue")]
    pub rating_value: Option<Value>,
    #[serde(rename = "ratingCount")]
    pub rating_count: Option<Value>,
}

impl ImdbAggregateRating {
    pub fn rating(&self) -> Option<f64> {
        coerce_f64(self.rating_value.as_ref()?)
    }

    pub fn votes(&self) -> Option<u64> {
        coerce_u64(self.rating_count.as_ref()?)
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_aggregate_rating() {
        let document: ImdbDocument = serde_json::from_str(
            r#"{"@type":"Movie","aggregateRating":{"ratingValue":8.5,"ratingCount":1000}}"#,
        )
        .unwrap();
        let aggregate = document.aggregate_rating.unwrap();
        assert_eq!(aggregate.rating(), Some(8.5));
        assert_eq!(aggregate.votes(), Some(1000));
    }

    #[test]
    fn parses_string_aggregate_rating() {
        let document: ImdbDocument = serde_json::from_str(
            r#"{"aggregateRating":{"ratingValue":"7.9","ratingCount":"12,345"}}"#,
        )
        .unwrap();
        let aggregate = document.aggregate_rating.unwrap();
        assert_eq!(aggregate.rating(), Some(7.9));
        assert_eq!(aggregate.votes(), Some(12345));
    }

    #[test]
    fn missing_aggregate_rating_is_none() {
        let document: ImdbDocument = serde_json::from_str(r#"{"@type":"Movie"}"#).unwrap();
        assert!(document.aggregate_rating.is_none());
    }
}

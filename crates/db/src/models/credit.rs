//! Top-N credit listings (directors, actors).

use serde::Serialize;
use sqlx::FromRow;

/// One name in a top-directors or top-actors listing.
///
/// `profile_path` is the first non-empty image path seen for the name across
/// all films; it is omitted from the JSON entirely when no film carries one.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEntry {
    pub name: String,
    pub film_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case_with_profile_path() {
        let entry = CreditEntry {
            name: "Akira Kurosawa".into(),
            film_count: 9,
            profile_path: Some("/p/kurosawa.jpg".into()),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Akira Kurosawa",
                "filmCount": 9,
                "profilePath": "/p/kurosawa.jpg",
            })
        );
    }

    #[test]
    fn omits_missing_profile_path() {
        let entry = CreditEntry {
            name: "Unknown".into(),
            film_count: 1,
            profile_path: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("profilePath").is_none());
    }
}

//! Provider response envelopes.
//!
//! Every response carries a `Response` flag (`"True"` / `"False"`); failures
//! add an `Error` message and omit the payload fields, so bodies are first
//! parsed as loose JSON, checked, and only then decoded into typed envelopes.
//!
//! ```json
//! {"Search":[{"Title":"Dune","Year":"2021","imdbID":"tt1160419","Type":"movie","Poster":"N/A"}],
//!  "totalResults":"27","Response":"True"}
//! ```

use crate::domain::movie::{available, split_list};
use crate::domain::{MovieDetails, MovieSummary, ReelmarkError, Result};
use crate::provider::SearchPage;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Search", default)]
    search: Vec<MovieSummary>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsEnvelope {
    #[serde(flatten)]
    summary: MovieSummary,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "Rated")]
    rated: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "imdbRating")]
    rating: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Writer")]
    writer: Option<String>,
}

/// Rejects bodies whose `Response` flag is not `"True"`.
fn check_response(body: &Value, fallback: &str) -> Result<()> {
    let ok = body
        .get("Response")
        .and_then(Value::as_str)
        .is_some_and(|flag| flag.eq_ignore_ascii_case("true"));

    if ok {
        return Ok(());
    }

    let message = body
        .get("Error")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(fallback);
    Err(ReelmarkError::Provider(message.to_string()))
}

/// Decodes a search response body.
///
/// An unparsable `totalResults` counts as zero.
///
/// # Errors
///
/// [`ReelmarkError::Provider`] for `Response: "False"`, [`ReelmarkError::Decode`]
/// for malformed bodies.
pub fn decode_search(body: &str) -> Result<SearchPage> {
    let value: Value = serde_json::from_str(body)?;
    check_response(&value, "Failed to search movies")?;

    let envelope: SearchEnvelope = serde_json::from_value(value)?;
    let total_results = envelope
        .total_results
        .and_then(|total| total.trim().parse::<usize>().ok())
        .unwrap_or(0);

    Ok(SearchPage {
        items: envelope.search,
        total_results,
    })
}

/// Decodes a details response body.
///
/// # Errors
///
/// [`ReelmarkError::Provider`] for `Response: "False"`, [`ReelmarkError::Decode`]
/// for malformed bodies.
pub fn decode_details(body: &str) -> Result<MovieDetails> {
    let value: Value = serde_json::from_str(body)?;
    check_response(&value, "Failed to fetch movie details")?;

    let envelope: DetailsEnvelope = serde_json::from_value(value)?;
    Ok(MovieDetails {
        summary: envelope.summary,
        director: envelope.director.and_then(available),
        plot: envelope.plot.and_then(available),
        runtime: envelope.runtime.and_then(available),
        rated: envelope.rated.and_then(available),
        genres: split_list(envelope.genre),
        rating: envelope.rating.and_then(available),
        cast: split_list(envelope.actors),
        writer: envelope.writer.and_then(available),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_decodes_items_and_total() {
        let body = r#"{
            "Search": [
                {"Title":"Dune","Year":"2021","imdbID":"tt1160419","Type":"movie","Poster":"https://img/dune.jpg"},
                {"Title":"Dune","Year":"1984","imdbID":"tt0087182","Type":"movie","Poster":"N/A"}
            ],
            "totalResults": "27",
            "Response": "True"
        }"#;

        let page = decode_search(body).unwrap();
        assert_eq!(page.total_results, 27);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "tt1160419");
        assert_eq!(page.items[0].poster.as_deref(), Some("https://img/dune.jpg"));
        assert_eq!(page.items[1].poster, None);
    }

    #[test]
    fn false_response_carries_provider_message() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        match decode_search(body) {
            Err(ReelmarkError::Provider(message)) => assert_eq!(message, "Movie not found!"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn missing_response_flag_is_a_failure() {
        let err = decode_details(r#"{"Title":"Dune"}"#).unwrap_err();
        assert!(matches!(err, ReelmarkError::Provider(m) if m == "Failed to fetch movie details"));
    }

    #[test]
    fn garbage_total_counts_as_zero() {
        let body = r#"{"Search":[],"totalResults":"lots","Response":"True"}"#;
        assert_eq!(decode_search(body).unwrap().total_results, 0);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        assert!(matches!(decode_search("<html>"), Err(ReelmarkError::Decode(_))));
    }

    #[test]
    fn details_split_lists_and_drop_sentinels() {
        let body = r#"{
            "Title":"Arrival","Year":"2016","imdbID":"tt2543164","Type":"movie","Poster":"N/A",
            "Director":"Denis Villeneuve","Plot":"A linguist works with the military.",
            "Runtime":"116 min","Rated":"PG-13","Genre":"Drama, Mystery, Sci-Fi",
            "imdbRating":"7.9","Actors":"Amy Adams, Jeremy Renner, Forest Whitaker",
            "Writer":"N/A","Response":"True"
        }"#;

        let details = decode_details(body).unwrap();
        assert_eq!(details.id(), "tt2543164");
        assert_eq!(details.genres, vec!["Drama", "Mystery", "Sci-Fi"]);
        assert_eq!(details.cast.len(), 3);
        assert_eq!(details.writer, None);
        assert_eq!(details.rating.as_deref(), Some("7.9"));
        assert_eq!(details.to_summary().title, "Arrival");
    }
}

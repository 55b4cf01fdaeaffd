use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reelmark::provider::{MovieProvider, OmdbClient, SearchQuery};
use reelmark::{Config, ReelmarkError};
use serde_json::json;
use std::collections::HashMap;

async fn omdb(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.get("apikey").map(String::as_str) != Some("test-key") {
        return Json(json!({"Response": "False", "Error": "Invalid API key!"})).into_response();
    }

    if let Some(id) = params.get("i") {
        return match id.as_str() {
            "tt1160419" => Json(json!({
                "Title": "Dune",
                "Year": "2021",
                "Rated": "PG-13",
                "Runtime": "155 min",
                "Genre": "Action, Adventure, Drama",
                "Director": "Denis Villeneuve",
                "Writer": "N/A",
                "Actors": "Timothée Chalamet, Rebecca Ferguson, Zendaya",
                "Plot": "A noble family becomes embroiled in a war.",
                "Poster": "https://img/dune.jpg",
                "imdbRating": "8.0",
                "imdbID": "tt1160419",
                "Type": "movie",
                "Response": "True"
            }))
            .into_response(),
            "tt500" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            _ => Json(json!({"Response": "False", "Error": "Incorrect IMDb ID."})).into_response(),
        };
    }

    let term = params.get("s").cloned().unwrap_or_default();
    let page = params.get("page").cloned().unwrap_or_default();
    let year = params.get("y").cloned().unwrap_or_else(|| "any".to_string());

    if term == "zzzz" {
        return Json(json!({"Response": "False", "Error": "Movie not found!"})).into_response();
    }

    Json(json!({
        "Search": [
            {"Title": term, "Year": year, "imdbID": format!("tt-{term}-{page}"), "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "27",
        "Response": "True"
    }))
    .into_response()
}

async fn client_with_key(api_key: &str) -> OmdbClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let app = Router::new().route("/", get(omdb));
        axum::serve(listener, app).await.expect("serve");
    });

    let config = Config {
        api_key: Some(api_key.to_string()),
        base_url: format!("http://{addr}/"),
        ..Config::default()
    };
    OmdbClient::from_config(&config).expect("client")
}

#[tokio::test]
async fn search_sends_term_page_and_year() {
    let client = client_with_key("test-key").await;

    let page = client
        .search(&SearchQuery::new("dune", 2))
        .await
        .expect("search page");
    assert_eq!(page.total_results, 27);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "tt-dune-2");
    assert_eq!(page.items[0].year, "any");
    assert!(page.items[0].poster.is_none());

    let filtered = client
        .search(&SearchQuery::new("action", 1).with_year(Some(2023)))
        .await
        .expect("filtered page");
    assert_eq!(filtered.items[0].year, "2023");
}

#[tokio::test]
async fn details_decode_list_fields() {
    let client = client_with_key("test-key").await;

    let details = client.details("tt1160419").await.expect("details");

    assert_eq!(details.summary.title, "Dune");
    assert_eq!(details.summary.poster.as_deref(), Some("https://img/dune.jpg"));
    assert_eq!(details.genres, ["Action", "Adventure", "Drama"]);
    assert_eq!(details.cast.len(), 3);
    assert_eq!(details.rating.as_deref(), Some("8.0"));
    assert!(details.writer.is_none());
}

#[tokio::test]
async fn provider_reported_failure_is_a_provider_error() {
    let client = client_with_key("test-key").await;

    let err = client
        .search(&SearchQuery::new("zzzz", 1))
        .await
        .expect_err("no results");
    assert!(matches!(err, ReelmarkError::Provider(ref message) if message == "Movie not found!"));
    assert!(err.is_retryable());

    let err = client.details("tt0").await.expect_err("bad id");
    assert!(matches!(err, ReelmarkError::Provider(ref message) if message == "Incorrect IMDb ID."));
}

#[tokio::test]
async fn http_status_failure_is_an_http_error() {
    let client = client_with_key("test-key").await;

    let err = client.details("tt500").await.expect_err("server error");

    assert!(matches!(err, ReelmarkError::Http(_)));
}

#[tokio::test]
async fn wrong_key_surfaces_provider_message() {
    let client = client_with_key("other-key").await;

    let err = client
        .search(&SearchQuery::new("dune", 1))
        .await
        .expect_err("rejected key");

    assert_eq!(err.to_string(), "Provider error: Invalid API key!");
}

#[test]
fn missing_api_key_is_a_config_error() {
    let config = Config {
        api_key: Some("   ".to_string()),
        ..Config::default()
    };

    assert!(matches!(OmdbClient::from_config(&config), Err(ReelmarkError::Config(_))));
}

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use marquee_core::model::Category;
use marquee_core::{
    CatalogError, CatalogRequest, CatalogSource, StaticCatalogSource,
    TmdbCatalogSource, TmdbSettings,
};
use serde::Deserialize;
use serde_json::json;
use url::Url;

#[derive(Debug, Deserialize)]
struct ListingParams {
    api_key: String,
    language: String,
    page: u32,
}

async fn listing(
    Path((kind, list)): Path<(String, String)>,
    Query(params): Query<ListingParams>,
) -> impl IntoResponse {
    match params.api_key.as_str() {
        "good" => {}
        "busy" => {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({
                    "status_code": 25,
                    "status_message": "slow down"
                })),
            );
        }
        "broken" => {
            return (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "status_code": 46,
                    "status_message": "Upstream offline."
                })),
            );
        }
        _ => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "status_code": 7,
                    "status_message": "Invalid API key"
                })),
            );
        }
    }

    let body = match (kind.as_str(), list.as_str()) {
        ("movie", "now_playing") => json!({
            "dates": { "maximum": "2024-06-19", "minimum": "2024-05-08" },
            "page": params.page,
            "results": [
                {
                    "id": 1022789,
                    "title": "Inside Out 2",
                    "overview": params.language,
                    "backdrop_path": "/stKGOm8UyhuLPR9sZLjs5AkmncA.jpg",
                    "poster_path": null
                },
                {
                    "id": 653346,
                    "title": "Kingdom of the Planet of the Apes",
                    "backdrop_path": "",
                    "poster_path": "/gKkl37BQuKTanygYQG1pyYgLVgf.jpg"
                }
            ],
            "total_pages": 1,
            "total_results": 2
        }),
        ("tv", "on_the_air") => json!({
            "page": params.page,
            "results": [
                {
                    "id": 94997,
                    "name": "House of the Dragon",
                    "overview": null
                }
            ],
            "total_pages": 1,
            "total_results": 1
        }),
        _ => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "status_code": 34,
                    "status_message": "not found"
                })),
            );
        }
    };
    (StatusCode::OK, Json(body))
}

async fn spawn_server() -> Url {
    let app = Router::new().route("/3/{kind}/{list}", get(listing));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    Url::parse(&format!("http://{addr}/3")).expect("base url")
}

fn source(base: &Url, key: &str) -> TmdbCatalogSource {
    let settings = TmdbSettings::new(key)
        .expect("settings")
        .with_api_base(base.clone());
    TmdbCatalogSource::new(settings).expect("client")
}

#[tokio::test]
async fn fetches_now_playing_page() {
    let base = spawn_server().await;
    let request = CatalogRequest::first_page(Category::MovieNowPlaying)
        .with_language("de-DE");
    let page = source(&base, "good").fetch(&request).await.expect("page");

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].title, "Inside Out 2");
    assert_eq!(page.results[0].overview, "de-DE");
    assert_eq!(page.results[1].backdrop_path.as_deref(), Some(""));
    assert!(page.dates.is_some());
}

#[tokio::test]
async fn tv_names_become_titles() {
    let base = spawn_server().await;
    let page = source(&base, "good")
        .fetch(&CatalogRequest::first_page(Category::TvOnTheAir))
        .await
        .expect("page");
    assert_eq!(page.results[0].title, "House of the Dragon");
    assert_eq!(page.results[0].overview, "");
    assert!(page.dates.is_none());
}

#[tokio::test]
async fn maps_http_failures() {
    let base = spawn_server().await;
    let request = CatalogRequest::first_page(Category::MovieNowPlaying);

    let err = source(&base, "nope").fetch(&request).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidApiKey), "{err:?}");

    let err = source(&base, "busy").fetch(&request).await.unwrap_err();
    assert!(matches!(err, CatalogError::RateLimited), "{err:?}");

    let err = source(&base, "broken").fetch(&request).await.unwrap_err();
    match err {
        CatalogError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Upstream offline.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn fixture_source_serves_demo_listings() {
    let source = StaticCatalogSource::demo();
    for category in Category::ALL {
        let page = source
            .fetch(&CatalogRequest::first_page(category))
            .await
            .expect("fixture page");
        assert!(page.results.len() > 1);
    }

    let empty = StaticCatalogSource::new();
    let err = empty
        .fetch(&CatalogRequest::first_page(Category::TvOnTheAir))
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::NotFound));
}

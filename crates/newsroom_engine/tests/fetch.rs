use std::time::Duration;

use newsroom_engine::{
    ArticleRecord, DateField, FailureKind, FetchSettings, NewsApi, RecommendationRecord,
    ReqwestNewsApi,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ReqwestNewsApi {
    ReqwestNewsApi::new(FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    })
    .expect("api")
}

#[tokio::test]
async fn featured_requests_count_and_decodes_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/featured"))
        .and(query_param("num_articles", "6"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 4, "title": "Harbour reopens", "date": "2024-01-15", "link": "https://n.example/4"},
            {"id": 9, "title": "Storm warning", "date": 1705312800000_i64},
            {"id": 2, "title": "No date"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let articles = api_for(&server).featured(6).await.expect("featured ok");
    assert_eq!(
        articles,
        vec![
            ArticleRecord {
                id: 4,
                title: "Harbour reopens".to_string(),
                date: Some(DateField::Text("2024-01-15".to_string())),
                link: Some("https://n.example/4".to_string()),
            },
            ArticleRecord {
                id: 9,
                title: "Storm warning".to_string(),
                date: Some(DateField::Millis(1_705_312_800_000)),
                link: None,
            },
            ArticleRecord {
                id: 2,
                title: "No date".to_string(),
                date: None,
                link: None,
            },
        ]
    );
}

#[tokio::test]
async fn recommendations_hit_article_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recommend/42"))
        .and(query_param("num_recs", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 7, "title": "Related", "date": "2024-02-01", "link": "https://n.example/7", "score": 0.873}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let recs = api_for(&server)
        .recommendations(42, 5)
        .await
        .expect("recommendations ok");
    assert_eq!(
        recs,
        vec![RecommendationRecord {
            id: Some(7),
            title: "Related".to_string(),
            date: Some(DateField::Text("2024-02-01".to_string())),
            score: 0.873,
            link: "https://n.example/7".to_string(),
        }]
    );
}

#[tokio::test]
async fn empty_array_is_a_successful_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let articles = api_for(&server).featured(6).await.expect("featured ok");
    assert!(articles.is_empty());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/recommend/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Article ID not found"})))
        .mount(&server)
        .await;

    let err = api_for(&server).recommendations(999, 5).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/featured"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"articles": []})))
        .mount(&server)
        .await;

    let err = api_for(&server).featured(6).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/featured"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!([])),
        )
        .mount(&server)
        .await;

    let api = ReqwestNewsApi::new(FetchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    })
    .unwrap();

    let err = api.featured(6).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/featured"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Length", "11")
                .set_body_string("[0123456789"),
        )
        .mount(&server)
        .await;

    let api = ReqwestNewsApi::new(FetchSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..FetchSettings::default()
    })
    .unwrap();

    let err = api.featured(6).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let api = ReqwestNewsApi::new(FetchSettings {
        // Port 9 (discard) on localhost is expected to refuse connections.
        base_url: "http://127.0.0.1:9".to_string(),
        connect_timeout: Duration::from_millis(500),
        ..FetchSettings::default()
    })
    .unwrap();

    let err = api.featured(6).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::Network | FailureKind::Timeout));
}

#[tokio::test]
async fn schemeless_backend_url_fails_requests_not_construction() {
    let api = ReqwestNewsApi::new(FetchSettings {
        base_url: "localhost:8000".to_string(),
        ..FetchSettings::default()
    })
    .expect("client still builds");

    assert_eq!(
        api.featured(6).await.unwrap_err().kind,
        FailureKind::InvalidUrl
    );
    assert_eq!(
        api.recommendations(1, 5).await.unwrap_err().kind,
        FailureKind::InvalidUrl
    );
}

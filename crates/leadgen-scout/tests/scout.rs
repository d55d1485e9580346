//! Integration tests for the scout stage using wiremock news providers.

use leadgen_core::{CoreError, PipelineFiles, QueryStrategy, RawLead};
use leadgen_scout::{run_scout, GNewsClient, NewsApiClient, NewsProvider, ScoutError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gnews(base_url: &str) -> NewsProvider {
    NewsProvider::GNews(
        GNewsClient::with_base_url("gnews-key", 5, 5, "leadgen-test/0.1", base_url)
            .expect("gnews client"),
    )
}

fn newsapi(base_url: &str) -> NewsProvider {
    NewsProvider::NewsApi(
        NewsApiClient::with_base_url("newsapi-key", 5, 5, "leadgen-test/0.1", base_url)
            .expect("newsapi client"),
    )
}

fn write_icps(files: &PipelineFiles) {
    let icps = json!({
        "ideal_customer_profiles": [
            {
                "icp_name": "AI Insurer",
                "industry_vertical": ["Insurance"],
                "buying_signals": ["hiring AI engineers"]
            },
            {
                "icp_name": "AI Bank",
                "industry_vertical": ["Banking"]
            }
        ]
    });
    std::fs::write(&files.icp_profiles, icps.to_string()).unwrap();
}

fn gnews_body(articles: &[(&str, &str)]) -> serde_json::Value {
    let articles: Vec<_> = articles
        .iter()
        .map(|(url, title)| {
            json!({
                "title": title,
                "description": "d",
                "content": "c",
                "url": url,
                "image": null,
                "publishedAt": "2025-01-01T00:00:00Z",
                "source": {"name": "GNews Source", "url": "https://gsrc.example"}
            })
        })
        .collect();
    json!({"totalArticles": articles.len(), "articles": articles})
}

fn newsapi_body(articles: &[(&str, &str)]) -> serde_json::Value {
    let articles: Vec<_> = articles
        .iter()
        .map(|(url, title)| {
            json!({
                "source": {"id": null, "name": "NewsAPI Source"},
                "title": title,
                "description": "d",
                "url": url,
                "urlToImage": "https://img.example/x.png",
                "publishedAt": "2025-01-02T00:00:00Z",
                "content": "c [+100 chars]"
            })
        })
        .collect();
    json!({"status": "ok", "totalResults": articles.len(), "articles": articles})
}

async fn mount_providers(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", r#"("Insurance") AND "AI""#))
        .and(query_param("apikey", "gnews-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gnews_body(&[
            ("https://news.example/shared", "from gnews"),
            ("https://news.example/g1", "gnews only"),
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", r#"("Banking") AND "AI""#))
        .respond_with(ResponseTemplate::new(200).set_body_json(gnews_body(&[(
            "https://news.example/g1",
            "repeat under second icp",
        )])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(header("X-Api-Key", "newsapi-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(newsapi_body(&[
            ("https://news.example/shared", "from newsapi"),
            ("https://news.example/n1", "newsapi only"),
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn merges_providers_and_dedups_by_url() {
    let server = MockServer::start().await;
    mount_providers(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());
    write_icps(&files);

    let providers = [gnews(&server.uri()), newsapi(&server.uri())];
    let report = run_scout(&providers, QueryStrategy::AiFilter, &files)
        .await
        .expect("scout should succeed");

    let leads: Vec<RawLead> = leadgen_core::read_json(&files.raw_leads).unwrap();
    let urls: Vec<&str> = leads.iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://news.example/shared",
            "https://news.example/g1",
            "https://news.example/n1",
        ]
    );

    assert_eq!(leads[0].title.as_deref(), Some("from gnews"));
    assert!(leads.iter().all(|l| l.matched_icp.as_deref() == Some("AI Insurer")));
    assert_eq!(leads[2].content.as_deref(), Some("c"));
    assert_eq!(leads[2].image.as_deref(), Some("https://img.example/x.png"));

    assert_eq!(report.icps.len(), 2);
    assert_eq!(report.icps[0].fetched, 4);
    assert_eq!(report.icps[0].kept, 3);
    assert_eq!(report.icps[1].kept, 0);
    assert_eq!(report.total_kept(), 3);
}

#[tokio::test]
async fn rerun_produces_identical_file() {
    let server = MockServer::start().await;
    mount_providers(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());
    write_icps(&files);

    let providers = [gnews(&server.uri()), newsapi(&server.uri())];
    run_scout(&providers, QueryStrategy::AiFilter, &files)
        .await
        .unwrap();
    let first = std::fs::read(&files.raw_leads).unwrap();

    run_scout(&providers, QueryStrategy::AiFilter, &files)
        .await
        .unwrap();
    let second = std::fs::read(&files.raw_leads).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn transport_error_still_writes_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(newsapi_body(&[(
            "https://news.example/n1",
            "newsapi only",
        )])))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());
    write_icps(&files);

    // Nothing listens on port 1, so every GNews call fails at connect time.
    let providers = [gnews("http://127.0.0.1:1"), newsapi(&server.uri())];
    let report = run_scout(&providers, QueryStrategy::AiFilter, &files)
        .await
        .expect("provider failures must not abort the stage");

    let leads: Vec<RawLead> = leadgen_core::read_json(&files.raw_leads).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(report.icps[0].failed_providers, 1);
    assert_eq!(report.icps[1].failed_providers, 1);
}

#[tokio::test]
async fn all_providers_failing_writes_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());
    write_icps(&files);

    let providers = [gnews(&server.uri()), newsapi(&server.uri())];
    let report = run_scout(&providers, QueryStrategy::AiFilter, &files)
        .await
        .unwrap();

    assert_eq!(std::fs::read_to_string(&files.raw_leads).unwrap(), "[]\n");
    assert_eq!(report.total_kept(), 0);
}

#[tokio::test]
async fn buying_signals_strategy_sends_signal_terms() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", r#"("Insurance") AND ("hiring AI engineers")"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(gnews_body(&[(
            "https://news.example/s1",
            "signal hit",
        )])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", r#"("Banking")"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(gnews_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());
    write_icps(&files);

    run_scout(&[gnews(&server.uri())], QueryStrategy::BuyingSignals, &files)
        .await
        .unwrap();

    let leads: Vec<RawLead> = leadgen_core::read_json(&files.raw_leads).unwrap();
    assert_eq!(leads.len(), 1);
}

#[tokio::test]
async fn newsapi_error_envelope_counts_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "code": "rateLimited",
            "message": "too many requests"
        })))
        .mount(&server)
        .await;

    let provider = newsapi(&server.uri());
    let err = provider.search("\"AI\"").await.unwrap_err();
    assert!(
        matches!(err, ScoutError::Api { provider: "newsapi", ref message } if message == "too many requests")
    );
}

#[tokio::test]
async fn missing_icp_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let files = PipelineFiles::in_dir(dir.path());

    let err = run_scout(&[], QueryStrategy::AiFilter, &files)
        .await
        .unwrap_err();
    assert!(matches!(err, ScoutError::Core(CoreError::Io { .. })));
    assert!(!files.raw_leads.exists());
}

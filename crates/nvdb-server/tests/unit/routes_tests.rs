//! HTTP Route Tests
//!
//! Drive the full Rocket application with in-memory storage and the
//! deterministic null embedding provider.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use nvdb_application::ports::EmbeddingProvider;
use nvdb_domain::{Embedding, Error, NewsRecord, Result, TaskType};
use nvdb_infrastructure::AppContext;
use nvdb_infrastructure::config::AppConfig;
use nvdb_providers::embedding::NullEmbeddingProvider;
use nvdb_providers::repository::InMemoryNewsRepository;
use nvdb_server::api::api_rocket;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

/// Provider that always fails
struct UnavailableProvider;

#[async_trait]
impl EmbeddingProvider for UnavailableProvider {
    async fn embed_batch(&self, _texts: &[String], _task: TaskType) -> Result<Vec<Embedding>> {
        Err(Error::embedding("service unavailable"))
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn model(&self) -> &str {
        "unavailable"
    }

    fn provider_name(&self) -> &str {
        "unavailable"
    }
}

/// Provider that fails with a non-upstream error
struct MisconfiguredProvider;

#[async_trait]
impl EmbeddingProvider for MisconfiguredProvider {
    async fn embed_batch(&self, _texts: &[String], _task: TaskType) -> Result<Vec<Embedding>> {
        Err(Error::configuration("model not set"))
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn model(&self) -> &str {
        "misconfigured"
    }

    fn provider_name(&self) -> &str {
        "misconfigured"
    }
}

fn null_provider() -> Arc<dyn EmbeddingProvider> {
    Arc::new(NullEmbeddingProvider::with_dimensions(8))
}

async fn client_with(
    config: AppConfig,
    provider: Arc<dyn EmbeddingProvider>,
    repository: Arc<InMemoryNewsRepository>,
) -> Client {
    let context = AppContext::from_parts(config, provider, repository);
    Client::tracked(api_rocket(context))
        .await
        .expect("valid rocket instance")
}

async fn client(repository: Arc<InMemoryNewsRepository>) -> Client {
    client_with(AppConfig::default(), null_provider(), repository).await
}

async fn post_json(client: &Client, uri: &str, body: &Value) -> (Status, Value) {
    let response = client
        .post(uri.to_string())
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
        .await;
    let status = response.status();
    (status, response.into_json::<Value>().await.unwrap())
}

async fn get_json(client: &Client, uri: &str) -> (Status, Value) {
    let response = client.get(uri.to_string()).dispatch().await;
    let status = response.status();
    (status, response.into_json::<Value>().await.unwrap())
}

fn abc_corpus() -> Arc<InMemoryNewsRepository> {
    Arc::new(InMemoryNewsRepository::with_records([
        NewsRecord::new("A")
            .with_header("Alpha")
            .with_description("first")
            .with_embedding("[1, 0]")
            .with_date_time(
                NaiveDate::from_ymd_opt(2024, 3, 1)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap(),
            ),
        NewsRecord::new("B").with_embedding("[0, 1]"),
        NewsRecord::new("C").with_embedding("[1, 1]"),
    ]))
}

// ============================================================================
// Service endpoints
// ============================================================================

#[rocket::async_test]
async fn test_health() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let (status, body) = get_json(&client, "/health").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!({"status": "healthy", "message": "Service is running"}));
}

#[rocket::async_test]
async fn test_root_welcome() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let (status, body) = get_json(&client, "/").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["message"], "Welcome to NEWS-DB-VECTOR-API");
}

#[rocket::async_test]
async fn test_api_prefix_scopes_routes_except_health() {
    let mut config = AppConfig::default();
    config.server.api_prefix = "/news-api".to_string();
    let client = client_with(
        config,
        null_provider(),
        Arc::new(InMemoryNewsRepository::new()),
    )
    .await;

    assert_eq!(get_json(&client, "/health").await.0, Status::Ok);
    assert_eq!(get_json(&client, "/news-api/").await.0, Status::Ok);
    assert_eq!(get_json(&client, "/news-api/config").await.0, Status::Ok);

    let (status, body) = get_json(&client, "/config").await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 404);
}

#[rocket::async_test]
async fn test_config_is_sanitised() {
    let mut config = AppConfig::default();
    config.environment = "production".to_string();
    config.database.url = Some("postgres://news:hunter2@db/news".to_string());
    config.embedding.api_key = Some("AIza-secret".to_string());
    let client = client_with(
        config,
        null_provider(),
        Arc::new(InMemoryNewsRepository::new()),
    )
    .await;

    let (status, body) = get_json(&client, "/config").await;
    let rendered = body.to_string();

    assert_eq!(status, Status::Ok);
    assert_eq!(body["environment"], "production");
    assert_eq!(body["database_configured"], true);
    assert_eq!(body["embedding_provider"], "null");
    assert!(!rendered.contains("hunter2"));
    assert!(!rendered.contains("AIza-secret"));
}

#[rocket::async_test]
async fn test_db_test_reports_working_storage() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let (status, body) = get_json(&client, "/db/test").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Database connection is working");
}

#[rocket::async_test]
async fn test_cors_headers() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let response = client.get("/health").dispatch().await;

    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
}

// ============================================================================
// POST /embedding
// ============================================================================

#[rocket::async_test]
async fn test_embed_text() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let (status, body) = post_json(&client, "/embedding", &json!({"news_desc": "Harga emas"})).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["news_desc"], "Harga emas");
    assert_eq!(body["data"]["embedding_dimension"], 8);
    assert_eq!(body["data"]["embedding"].as_array().unwrap().len(), 8);
    assert_eq!(body["data"]["model"], "null");
}

#[rocket::async_test]
async fn test_embed_text_rejects_blank_and_missing_text() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;

    let (status, body) = post_json(&client, "/embedding", &json!({"news_desc": "  "})).await;
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["code"], 400);

    let (status, body) = post_json(&client, "/embedding", &json!({})).await;
    assert_eq!(status, Status::BadRequest);
    assert!(body["message"].as_str().unwrap().contains("news_desc"));
}

#[rocket::async_test]
async fn test_malformed_json_body_is_bad_request() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;
    let response = client
        .post("/embedding")
        .header(ContentType::JSON)
        .body("{\"news_desc\": ")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    let body = response.into_json::<Value>().await.unwrap();
    assert_eq!(body["status"], "error");
}

#[rocket::async_test]
async fn test_embed_text_upstream_failure_is_server_error() {
    let client = client_with(
        AppConfig::default(),
        Arc::new(UnavailableProvider),
        Arc::new(InMemoryNewsRepository::new()),
    )
    .await;

    let (status, body) = post_json(&client, "/embedding", &json!({"news_desc": "emas"})).await;

    assert_eq!(status, Status::InternalServerError);
    assert_eq!(body["code"], 500);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error generating embedding")
    );
}

#[rocket::async_test]
async fn test_embed_text_failure_message_has_single_context() {
    let client = client_with(
        AppConfig::default(),
        Arc::new(MisconfiguredProvider),
        Arc::new(InMemoryNewsRepository::new()),
    )
    .await;

    let (status, body) = post_json(&client, "/embedding", &json!({"news_desc": "emas"})).await;
    let message = body["message"].as_str().unwrap();

    assert_eq!(status, Status::InternalServerError);
    assert_eq!(message.matches("Error generating embedding").count(), 1);
    assert!(message.contains("model not set"));
}

// ============================================================================
// POST /embedding-id
// ============================================================================

#[rocket::async_test]
async fn test_embed_record_persists() {
    let repository = Arc::new(InMemoryNewsRepository::with_records([NewsRecord::new("n-1")
        .with_header("Rupiah")
        .with_description("Rupiah menguat")
        .with_date_time(
            NaiveDate::from_ymd_opt(2024, 5, 2)
                .unwrap()
                .and_hms_opt(9, 15, 0)
                .unwrap(),
        )]));
    let client = client(repository.clone()).await;

    let (status, body) = post_json(&client, "/embedding-id", &json!({"news_id": "n-1"})).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["message"], "Embedding created and saved successfully");
    assert_eq!(body["data"]["news_header"], "Rupiah");
    assert_eq!(body["data"]["embedding_dimension"], 8);
    assert_eq!(body["data"]["date_time"], "2024-05-02 09:15:00");
    assert!(repository.get("n-1").unwrap().has_embedding());
}

#[rocket::async_test]
async fn test_embed_record_unknown_id_is_not_found() {
    let repository = Arc::new(InMemoryNewsRepository::with_records([
        NewsRecord::new("n-1").with_description("text"),
    ]));
    let client = client(repository.clone()).await;

    let (status, body) = post_json(&client, "/embedding-id", &json!({"news_id": "n-404"})).await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "News item with ID 'n-404' not found");
    assert!(!repository.get("n-1").unwrap().has_embedding());
}

// ============================================================================
// POST /embedding/batch/all
// ============================================================================

#[rocket::async_test]
async fn test_embed_batch_then_nothing_pending() {
    let repository = Arc::new(InMemoryNewsRepository::with_records([
        NewsRecord::new("a").with_description("first"),
        NewsRecord::new("b").with_description(""),
        NewsRecord::new("c").with_description("third"),
    ]));
    let client = client(repository.clone()).await;

    let (status, body) = post_json(&client, "/embedding/batch/all", &json!({})).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["message"], "Processed 3 news items");
    assert_eq!(body["data"]["success"], 2);
    assert_eq!(body["data"]["failed"], 1);
    assert_eq!(
        body["data"]["failed_items"],
        json!([{"news_id": "b", "reason": "Empty news_desc"}])
    );

    // The blank record stays pending
    let (_, body) = post_json(&client, "/embedding/batch/all", &json!({})).await;
    assert_eq!(body["data"]["processed"], 1);

    repository.insert(NewsRecord::new("b").with_description("second"));
    post_json(&client, "/embedding/batch/all", &json!({})).await;

    let (status, body) = post_json(&client, "/embedding/batch/all", &json!({})).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["message"], "All news already have embeddings");
    assert_eq!(body["data"]["processed"], 0);
}

// ============================================================================
// POST /similarity-compare
// ============================================================================

#[rocket::async_test]
async fn test_similarity_compare_with_supplied_vector() {
    let client = client(abc_corpus()).await;

    let (status, body) = post_json(
        &client,
        "/similarity-compare",
        &json!({"news_desc": "ignored", "embedding": "[1, 0]", "threshold": 0.5, "top_k": 10}),
    )
    .await;

    assert_eq!(status, Status::Ok);
    let data = &body["data"];
    assert_eq!(data["query"], "ignored");
    assert_eq!(data["total_compared"], 3);
    assert_eq!(data["total_above_threshold"], 2);
    assert_eq!(data["method"], "brute_force_cosine");

    let results = data["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["news_id"], "A");
    assert_eq!(results[0]["similarity_score"], 1.0);
    assert_eq!(results[0]["news_header"], "Alpha");
    assert_eq!(results[0]["date_time"], "2024-03-01 08:00:00");
    assert_eq!(results[1]["news_id"], "C");
    assert_eq!(results[1]["similarity_score"], 0.7071);
}

#[rocket::async_test]
async fn test_similarity_compare_defaults_to_single_best_match() {
    let client = client(abc_corpus()).await;

    let (_, body) = post_json(
        &client,
        "/similarity-compare",
        &json!({"vector": "[1, 0.1]"}),
    )
    .await;

    let results = body["data"]["results"].as_array().unwrap();
    assert_eq!(body["data"]["top_k"], 1);
    assert_eq!(body["data"]["threshold"], 0.9);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["news_id"], "A");
}

#[rocket::async_test]
async fn test_similarity_compare_malformed_vector() {
    let client = client_with(AppConfig::default(), Arc::new(UnavailableProvider), abc_corpus()).await;

    let (status, body) = post_json(
        &client,
        "/similarity-compare",
        &json!({"news_desc": "emas", "embedding": "[1, 0"}),
    )
    .await;

    // 400 rather than 500 shows the failing provider was never called
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["code"], 400);
}

#[rocket::async_test]
async fn test_similarity_compare_empty_corpus() {
    let client = client(Arc::new(InMemoryNewsRepository::new())).await;

    let (status, body) = post_json(
        &client,
        "/similarity-compare",
        &json!({"news_desc": "emas"}),
    )
    .await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["data"]["total_compared"], 0);
    assert_eq!(body["data"]["results"], json!([]));
    assert!(body["message"].is_string());
}

#[rocket::async_test]
async fn test_similarity_compare_requires_text_or_vector() {
    let client = client(abc_corpus()).await;

    let (status, _) = post_json(&client, "/similarity-compare", &json!({"top_k": 3})).await;

    assert_eq!(status, Status::BadRequest);
}

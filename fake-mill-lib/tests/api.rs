use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use fake_mill_lib::config::Config;
use fake_mill_lib::documents::{cnpj, cpf, rg};
use fake_mill_lib::serve;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

type TestResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    handle: JoinHandle<fake_mill_lib::Result<()>>,
}

impl TestServer {
    async fn start(mut config: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        config.listen = addr;
        config.timeout.shutdown_secs = 2;

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, Arc::new(config), shutdown.clone()));
        Ok(Self { addr, shutdown, handle })
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    async fn stop(self) -> TestResult {
        self.shutdown.cancel();
        tokio::time::timeout(Duration::from_secs(5), self.handle).await???;
        Ok(())
    }
}

fn unlimited() -> Config {
    let mut config = Config::default();
    config.rate_limit.enabled = false;
    config
}

#[tokio::test]
async fn generates_cpf_batches() -> TestResult {
    let server = TestServer::start(unlimited()).await?;
    let client = reqwest::Client::new();

    let single: Value = client.get(server.url("/api/v1/cpf")).send().await?.json().await?;
    let value = single["cpf"].as_str().ok_or("cpf missing")?;
    assert_eq!(value.len(), 14);
    assert!(cpf::validate(value));
    assert_eq!(single["valid"], true);

    let resp = client.get(server.url("/api/v1/cpf?quantity=10&formatted=false")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/json");
    assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    let batch: Value = resp.json().await?;
    let items = batch.as_array().ok_or("expected an array")?;
    assert_eq!(items.len(), 10);
    for item in items {
        let value = item["cpf"].as_str().ok_or("cpf missing")?;
        assert_eq!(value.len(), 11);
        assert!(cpf::validate(value));
    }

    let invalid: Value =
        client.get(server.url("/api/v1/cnpj?valid=false")).send().await?.json().await?;
    assert_eq!(invalid["valid"], false);

    server.stop().await
}

#[tokio::test]
async fn rg_and_records() -> TestResult {
    let server = TestServer::start(unlimited()).await?;
    let client = reqwest::Client::new();

    let doc: Value = client.get(server.url("/api/v1/rg?state=mg")).send().await?.json().await?;
    assert!(rg::validate(doc["rg"].as_str().ok_or("rg missing")?));
    assert_eq!(doc["state"], "MG");
    assert_eq!(doc["issuer"], "SSP");
    assert!(doc["issueDate"].is_string());
    assert!(doc["expirationDate"].is_string());

    let doc: Value =
        client.get(server.url("/api/v1/rg?valid=false")).send().await?.json().await?;
    assert!(doc.get("state").is_none());

    let phone: Value = client
        .get(server.url("/api/v1/phone?state=RJ&type=mobile"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(phone["state"], "RJ");
    assert_eq!(phone["type"], "mobile");
    assert!(["21", "22", "24"].contains(&phone["ddd"].as_str().ok_or("ddd missing")?));

    let account: Value =
        client.get(server.url("/api/v1/bank-account?bank=341")).send().await?.json().await?;
    assert_eq!(account["bank"]["name"], "Itaú Unibanco");

    let cards: Value = client
        .get(server.url("/api/v1/credit-card?brand=elo&quantity=3"))
        .send()
        .await?
        .json()
        .await?;
    let cards = cards.as_array().ok_or("expected an array")?;
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(|c| c["brand"] == "Elo"));

    server.stop().await
}

#[tokio::test]
async fn validation_endpoints() -> TestResult {
    let server = TestServer::start(unlimited()).await?;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(server.url("/api/v1/validate/cpf/529.982.247-25"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["valid"], true);

    let resp = client.get(server.url("/api/v1/validate/cpf/111.111.111-11")).send().await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await?["valid"], false);

    let body: Value = client
        .get(server.url("/api/v1/validate/cnpj/11222333000181"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["cnpj"], "11222333000181");
    assert_eq!(body["valid"], cnpj::validate("11222333000181"));

    let body: Value =
        client.get(server.url("/api/v1/validate/rg/60000000x")).send().await?.json().await?;
    assert_eq!(body["valid"], true);

    let body: Value = client
        .get(server.url("/api/v1/validate/phone?phone_number=%2B5511987654321"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["valid"], true);
    assert_eq!(body["number_type"], "MOBILE");
    assert_eq!(body["e164_format"], "+5511987654321");

    let resp = client.get(server.url("/api/v1/validate/phone")).send().await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>().await?["code"], "missing_required_parameter");

    server.stop().await
}

#[tokio::test]
async fn unknown_paths_and_preflight() -> TestResult {
    let server = TestServer::start(unlimited()).await?;
    let client = reqwest::Client::new();

    let resp = client.get(server.url("/api/v1/address")).send().await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<Value>().await?["path"], "/api/v1/address");

    let resp = client.request(reqwest::Method::OPTIONS, server.url("/api/v1/cpf")).send().await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.headers()["access-control-allow-methods"], "GET, OPTIONS, POST");
    assert_eq!(resp.headers()["access-control-max-age"], "86400");

    let resp = client.delete(server.url("/api/v1/cpf")).send().await?;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    server.stop().await
}

#[tokio::test]
async fn rate_limit_is_per_client() -> TestResult {
    let mut config = Config::default();
    config.rate_limit.requests = 3;
    let server = TestServer::start(config).await?;
    let client = reqwest::Client::new();

    for _ in 0..3 {
        let resp = client.get(server.url("/api/v1/cpf")).send().await?;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client.get(server.url("/api/v1/cpf")).send().await?;
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.headers()["x-ratelimit-limit"], "3");
    assert_eq!(resp.headers()["x-ratelimit-remaining"], "0");
    let retry_after: u64 = resp.headers()["retry-after"].to_str()?.parse()?;
    assert!((1..=60).contains(&retry_after));
    let body: Value = resp.json().await?;
    assert_eq!(body["error"], "rate limit exceeded");

    // A different forwarded client has its own window.
    let resp = client
        .get(server.url("/api/v1/cpf"))
        .header("x-forwarded-for", "203.0.113.50, 10.0.0.1")
        .send()
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let health: Value = client.get(server.url("/api/health")).send().await?.json().await?;
    assert_eq!(health["status"], "ok");
    assert!(health["timestamp"].as_i64().ok_or("timestamp missing")? > 0);

    server.stop().await
}

#[tokio::test]
async fn stops_accepting_after_shutdown() -> TestResult {
    let server = TestServer::start(unlimited()).await?;
    let addr = server.addr;
    server.stop().await?;

    let result = reqwest::Client::new()
        .get(format!("http://{addr}/api/health"))
        .timeout(Duration::from_secs(2))
        .send()
        .await;
    assert!(result.is_err());
    Ok(())
}

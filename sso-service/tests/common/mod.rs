#![allow(dead_code)]

use std::sync::Arc;

use auth::Claims;
use auth::TokenIssuer;
use chrono::Duration;
use sqlx::Executor;
use sqlx::SqlitePool;
use sso_service::domain::identity::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::SqliteAppRepository;
use sso_service::outbound::repositories::SqliteUserRepository;
use sso_service::outbound::storage;
use sso_service::proto::auth_client::AuthClient;
use sso_service::proto::auth_server::AuthServer;
use tempfile::TempDir;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;
use tonic::transport::Server;

/// App provisioned by the test seed migration.
pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";

/// Second app, used to check that tokens do not cross app boundaries.
pub const OTHER_APP_ID: i32 = 2;
pub const OTHER_APP_SECRET: &str = "test-other-secret";

pub const EMPTY_APP_ID: i32 = 0;

const SEED_TEST_APPS: &str = include_str!("../migrations/20240501000001_seed_test_apps.sql");

pub fn token_ttl() -> Duration {
    Duration::hours(1)
}

/// Test application running the gRPC and HTTP servers on random ports
/// against a fresh in-memory database.
pub struct TestApp {
    pub grpc_address: String,
    pub http_address: String,
    pub auth_client: AuthClient<Channel>,
    pub api_client: reqwest::Client,
    _storage_dir: Option<TempDir>,
}

impl TestApp {
    /// Spawn the application in background tasks and return TestApp
    pub async fn spawn() -> Self {
        let pool = storage::connect_in_memory()
            .await
            .expect("Failed to open in-memory database");
        Self::spawn_with_pool(pool, None).await
    }

    /// Same as [`TestApp::spawn`], backed by a multi-connection pool over a
    /// database file in a temporary directory.
    pub async fn spawn_with_file_storage() -> Self {
        let storage_dir = TempDir::new().expect("Failed to create temp dir");
        let path = storage_dir.path().join("storage").join("sso.db");
        let pool = storage::connect(path.to_str().expect("Temp path is not UTF-8"))
            .await
            .expect("Failed to open database file");
        Self::spawn_with_pool(pool, Some(storage_dir)).await
    }

    async fn spawn_with_pool(pool: SqlitePool, storage_dir: Option<TempDir>) -> Self {
        storage::migrate(&pool)
            .await
            .expect("Failed to run migrations");
        pool.execute(SEED_TEST_APPS)
            .await
            .expect("Failed to seed test apps");

        let auth_service = Arc::new(AuthService::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteAppRepository::new(pool)),
            TokenIssuer::new(token_ttl()),
        ));

        // Use random ports (0 = OS assigns)
        let grpc_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let grpc_address = format!("http://{}", grpc_listener.local_addr().unwrap());

        let http_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let http_address = format!("http://{}", http_listener.local_addr().unwrap());

        let grpc_service = AuthGrpcService::new(auth_service.clone());
        tokio::spawn(async move {
            Server::builder()
                .add_service(AuthServer::new(grpc_service))
                .serve_with_incoming(TcpListenerStream::new(grpc_listener))
                .await
                .expect("gRPC server error");
        });

        let router = create_router(auth_service);
        tokio::spawn(async move {
            axum::serve(http_listener, router)
                .await
                .expect("HTTP server error");
        });

        let auth_client = AuthClient::connect(grpc_address.clone())
            .await
            .expect("Failed to connect gRPC client");

        Self {
            grpc_address,
            http_address,
            auth_client,
            api_client: reqwest::Client::new(),
            _storage_dir: storage_dir,
        }
    }

    /// Fresh handle on the gRPC client (calls need `&mut`).
    pub fn grpc(&self) -> AuthClient<Channel> {
        self.auth_client.clone()
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.http_address, path))
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.http_address, path))
    }
}

/// Decode a session token with the given app secret.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, auth::JwtError> {
    TokenIssuer::new(token_ttl()).verify(token, secret.as_bytes())
}

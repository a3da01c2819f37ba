use std::sync::Arc;

use auth::TokenIssuer;
use sso_service::config::Config;
use sso_service::domain::identity::service::AuthService;
use sso_service::inbound::grpc::AuthGrpcService;
use sso_service::inbound::http::router::create_router;
use sso_service::outbound::repositories::SqliteAppRepository;
use sso_service::outbound::repositories::SqliteUserRepository;
use sso_service::outbound::storage;
use sso_service::proto::auth_server::AuthServer;
use sso_service::telemetry;
use tonic::transport::Server;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    telemetry::init(config.json_logs());

    tracing::info!(
        service = "sso-service",
        version = env!("CARGO_PKG_VERSION"),
        env = %config.env,
        "Service starting"
    );

    tracing::info!(
        storage_path = %config.storage.path,
        http_port = config.server.http_port,
        grpc_port = config.server.grpc_port,
        grpc_timeout_ms = config.server.grpc_timeout_ms,
        token_ttl_secs = config.auth.token_ttl_secs,
        "Configuration loaded"
    );

    let pool = storage::connect(&config.storage.path).await?;
    tracing::info!(database = "sqlite", "Database connection pool created");

    storage::migrate(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let token_issuer = TokenIssuer::new(chrono::Duration::from_std(config.token_ttl())?);
    let auth_service = Arc::new(AuthService::new(
        Arc::new(SqliteUserRepository::new(pool.clone())),
        Arc::new(SqliteAppRepository::new(pool)),
        token_issuer,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service.clone());
    let http_server = tokio::spawn(async move {
        axum::serve(http_listener, http_application)
            .with_graceful_shutdown(shutdown_signal())
            .await
    });

    let grpc_address = format!("0.0.0.0:{}", config.server.grpc_port).parse()?;
    let grpc_service = AuthGrpcService::new(auth_service);
    tracing::info!(
        address = %grpc_address,
        port = config.server.grpc_port,
        protocol = "grpc",
        "gRpc server listening"
    );

    let grpc_timeout = config.grpc_timeout();
    let grpc_server = tokio::spawn(async move {
        Server::builder()
            .timeout(grpc_timeout)
            .add_service(AuthServer::new(grpc_service))
            .serve_with_shutdown(grpc_address, shutdown_signal())
            .await
    });

    match tokio::try_join!(http_server, grpc_server) {
        Ok((http_result, grpc_result)) => {
            if let Err(e) = http_result {
                tracing::error!(error = %e, protocol = "http", "Server error");
            }
            if let Err(e) = grpc_result {
                tracing::error!(error = %e, protocol = "grpc", "Server error");
            }
            tracing::info!("Servers exited");
        }
        Err(e) => tracing::error!(error = %e, "Server task failed"),
    };

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

use std::path::Path;

use sqlx::migrate::Migrator;
use sso_service::config::Config;
use sso_service::outbound::storage;
use sso_service::telemetry;

/// Applies the embedded schema, then the migrations found under
/// `storage.migrations_path`.
///
/// Besides the schema this is how apps get provisioned, e.g. pointing
/// SSO_STORAGE__MIGRATIONS_PATH at `tests/migrations` seeds the test apps.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    telemetry::init(config.json_logs());

    let migrations_path = Path::new(&config.storage.migrations_path);
    let mut migrator = Migrator::new(migrations_path).await?;
    // Seed directories are applied on top of the schema migrations.
    migrator.set_ignore_missing(true);

    tracing::info!(
        storage_path = %config.storage.path,
        migrations_path = %migrations_path.display(),
        migrations = migrator.iter().count(),
        "Applying migrations"
    );

    let pool = storage::connect(&config.storage.path).await?;
    storage::migrate(&pool).await?;
    migrator.run(&pool).await?;
    pool.close().await;

    tracing::info!(database = "sqlite", "Migrations applied");

    Ok(())
}

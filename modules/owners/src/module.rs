//! Module declaration and lifecycle implementation

use crate::config::Config;
use crate::domain::Service;
use crate::infra::storage::repositories::SeaOrmOwnerRepository;
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Owners module
pub struct OwnersModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for OwnersModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            service: RwLock::new(None),
        }
    }
}

impl OwnersModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the repository and domain service
    pub async fn init(&self, cfg: Config, db: Arc<DatabaseConnection>) -> Result<()> {
        if cfg.seed_demo_data {
            crate::infra::storage::seed::seed_demo_data(&db).await?;
        }

        let owners_repo = Arc::new(SeaOrmOwnerRepository::new(db));
        let service = Arc::new(Service::new(owners_repo, &cfg));

        *self.config.write() = cfg;
        *self.service.write() = Some(service);

        tracing::info!("Owners module initialized");
        Ok(())
    }

    /// Run database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Owners migrations completed");
        Ok(())
    }

    /// Register the owner pages on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let service = self.service()?;

        tracing::info!("Registering owners routes");
        crate::api::web::routes::register_routes(router, service)
    }

    pub fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Background housekeeping until `cancel` fires: drops expired staged
    /// deletions
    pub async fn serve(self: Arc<Self>, cancel: CancellationToken) -> Result<()> {
        let service = self.service()?;
        let period = self.config().pending_delete_ttl.max(Duration::from_secs(1));
        let mut ticker = tokio::time::interval(period);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let purged = service.purge_expired_removals();
                    if purged > 0 {
                        tracing::debug!(purged, "Purged expired pending deletions");
                    }
                }
            }
        }

        tracing::info!("Owners module stopped");
        Ok(())
    }
}

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    /// Connects to `uri` (PostgreSQL or SQLite) and runs pending migrations.
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut opts = ConnectOptions::new(uri.to_owned());
        opts.sqlx_logging(false);
        Self::connect(opts).await
    }

    pub async fn connect(opts: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let database_connection = Database::connect(opts).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.database_connection.ping().await
    }
}

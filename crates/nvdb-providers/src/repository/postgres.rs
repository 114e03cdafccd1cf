//! PostgreSQL news repository
//!
//! Uses a blocking `r2d2` connection pool over `r2d2_postgres`. Every query
//! runs on the tokio blocking pool so async callers are never stalled.
//!
//! ## Expected table
//!
//! ```sql
//! CREATE TABLE news (
//!     news_id     TEXT PRIMARY KEY,
//!     news_header TEXT,
//!     news_desc   TEXT,          -- BYTEA is accepted too
//!     date_time   TIMESTAMP,
//!     embedding   TEXT,          -- JSON numeric array
//!     deleted_at  TIMESTAMP
//! );
//! ```

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Client, NoTls, Row};
use tracing::debug;

use nvdb_application::ports::registry::{
    NEWS_REPOSITORIES, NewsRepositoryConfig, NewsRepositoryEntry,
};
use nvdb_domain::entities::{EmbeddingUpdate, NewsRecord};
use nvdb_domain::error::{Error, Result};
use nvdb_domain::repositories::NewsRepository;
use nvdb_domain::value_objects::NewsText;

use crate::constants::{DB_CONNECTION_TIMEOUT, DB_MAX_CONNECTIONS, NEWS_TABLE};

type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Pool settings for [`PostgresNewsRepository`]
#[derive(Clone)]
pub struct PostgresConfig {
    /// PostgreSQL connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Wait for a free connection
    pub connection_timeout: Duration,
}

impl std::fmt::Debug for PostgresConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresConfig")
            .field("url", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("connection_timeout", &self.connection_timeout)
            .finish()
    }
}

impl PostgresConfig {
    /// Config with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: DB_MAX_CONNECTIONS,
            connection_timeout: DB_CONNECTION_TIMEOUT,
        }
    }
}

/// PostgreSQL-backed news repository
#[derive(Clone)]
pub struct PostgresNewsRepository {
    pool: PgPool,
}

impl PostgresNewsRepository {
    /// Build the pool
    ///
    /// Connections are opened lazily; an unreachable server surfaces on
    /// first use or through [`NewsRepository::health_check`].
    pub fn new(config: &PostgresConfig) -> Result<Self> {
        let pg_config: r2d2_postgres::postgres::Config = config
            .url
            .parse()
            .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?;
        let manager = PostgresConnectionManager::new(pg_config, NoTls);

        let pool = Pool::builder()
            .max_size(config.max_connections.max(1))
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Ok(Self { pool })
    }

    /// Run `op` with a pooled connection on the blocking thread pool
    async fn with_client<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Client) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| Error::database_with_source("Failed to get database connection", e))?;
            op(&mut conn)
        })
        .await
        .map_err(|e| Error::internal(format!("Database task failed: {e}")))?
    }
}

fn db_error(context: &str) -> impl FnOnce(r2d2_postgres::postgres::Error) -> Error + '_ {
    move |e| Error::database_with_source(context.to_string(), e)
}

fn select_columns() -> String {
    format!(
        "SELECT news_id::text AS news_id, news_header::text AS news_header, news_desc, \
         date_time::timestamp AS date_time, embedding::text AS embedding, \
         deleted_at::timestamp AS deleted_at FROM {NEWS_TABLE}"
    )
}

/// Read `news_desc` as text, falling back to raw bytes for BYTEA columns
fn read_description(row: &Row) -> Result<Option<NewsText>> {
    match row.try_get::<_, Option<String>>("news_desc") {
        Ok(text) => Ok(text.map(NewsText::Text)),
        Err(_) => row
            .try_get::<_, Option<Vec<u8>>>("news_desc")
            .map(|bytes| bytes.map(NewsText::Bytes))
            .map_err(db_error("Unsupported news_desc column type")),
    }
}

fn row_to_record(row: &Row) -> Result<NewsRecord> {
    Ok(NewsRecord {
        news_id: row.try_get("news_id").map_err(db_error("Failed to read news_id"))?,
        news_header: row
            .try_get::<_, Option<String>>("news_header")
            .map_err(db_error("Failed to read news_header"))?,
        news_desc: read_description(row)?,
        date_time: row
            .try_get::<_, Option<NaiveDateTime>>("date_time")
            .map_err(db_error("Failed to read date_time"))?,
        embedding: row
            .try_get::<_, Option<String>>("embedding")
            .map_err(db_error("Failed to read embedding"))?,
        deleted_at: row
            .try_get::<_, Option<NaiveDateTime>>("deleted_at")
            .map_err(db_error("Failed to read deleted_at"))?,
    })
}

fn rows_to_records(rows: &[Row]) -> Result<Vec<NewsRecord>> {
    rows.iter().map(row_to_record).collect()
}

#[async_trait]
impl NewsRepository for PostgresNewsRepository {
    async fn find_by_id(&self, news_id: &str) -> Result<NewsRecord> {
        let id = news_id.to_string();
        self.with_client(move |client| {
            let sql = format!(
                "{} WHERE news_id::text = $1 AND deleted_at IS NULL LIMIT 1",
                select_columns()
            );
            let row = client
                .query_opt(sql.as_str(), &[&id])
                .map_err(db_error("Failed to query news by id"))?
                .ok_or_else(|| Error::not_found(format!("News item with ID '{id}'")))?;
            row_to_record(&row)
        })
        .await
    }

    async fn find_with_embedding(&self) -> Result<Vec<NewsRecord>> {
        self.with_client(|client| {
            let sql = format!(
                "{} WHERE embedding IS NOT NULL AND deleted_at IS NULL ORDER BY news_id",
                select_columns()
            );
            let rows = client
                .query(sql.as_str(), &[])
                .map_err(db_error("Failed to query news with embeddings"))?;
            rows_to_records(&rows)
        })
        .await
    }

    async fn find_pending_embedding(&self) -> Result<Vec<NewsRecord>> {
        self.with_client(|client| {
            let sql = format!(
                "{} WHERE embedding IS NULL AND deleted_at IS NULL AND news_desc IS NOT NULL \
                 ORDER BY news_id",
                select_columns()
            );
            let rows = client
                .query(sql.as_str(), &[])
                .map_err(db_error("Failed to query pending news"))?;
            rows_to_records(&rows)
        })
        .await
    }

    async fn save_embedding(&self, news_id: &str, embedding: &str) -> Result<NewsRecord> {
        let id = news_id.to_string();
        let embedding = embedding.to_string();
        self.with_client(move |client| {
            let mut tx = client
                .transaction()
                .map_err(db_error("Failed to begin transaction"))?;

            let updated = tx
                .execute(
                    format!(
                        "UPDATE {NEWS_TABLE} SET embedding = $2 \
                         WHERE news_id::text = $1 AND deleted_at IS NULL"
                    )
                    .as_str(),
                    &[&id, &embedding],
                )
                .map_err(db_error("Failed to save embedding"))?;
            if updated == 0 {
                return Err(Error::not_found(format!("News item with ID '{id}'")));
            }

            let sql = format!("{} WHERE news_id::text = $1 LIMIT 1", select_columns());
            let row = tx
                .query_one(sql.as_str(), &[&id])
                .map_err(db_error("Failed to reload news"))?;
            let record = row_to_record(&row)?;

            tx.commit().map_err(db_error("Failed to commit embedding"))?;
            Ok(record)
        })
        .await
    }

    async fn commit_embeddings(&self, updates: &[EmbeddingUpdate]) -> Result<Vec<String>> {
        let updates = updates.to_vec();
        self.with_client(move |client| {
            let mut tx = client
                .transaction()
                .map_err(db_error("Failed to begin transaction"))?;
            let statement = tx
                .prepare(
                    format!(
                        "UPDATE {NEWS_TABLE} SET embedding = $2 \
                         WHERE news_id::text = $1 AND deleted_at IS NULL"
                    )
                    .as_str(),
                )
                .map_err(db_error("Failed to prepare embedding update"))?;

            let mut written = Vec::with_capacity(updates.len());
            for update in updates {
                let rows = tx
                    .execute(&statement, &[&update.news_id, &update.embedding])
                    .map_err(db_error("Failed to write batch embedding"))?;
                if rows > 0 {
                    written.push(update.news_id);
                }
            }

            tx.commit()
                .map_err(db_error("Failed to commit batch embeddings"))?;
            debug!(
                written = written.len(),
                "Batch embedding transaction committed"
            );
            Ok(written)
        })
        .await
    }

    async fn health_check(&self) -> Result<()> {
        self.with_client(|client| {
            client
                .simple_query("SELECT 1")
                .map_err(db_error("Database health check failed"))?;
            Ok(())
        })
        .await
    }

    fn provider_name(&self) -> &str {
        "postgres"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

fn postgres_repository_factory(
    config: &NewsRepositoryConfig,
) -> std::result::Result<Arc<dyn NewsRepository>, String> {
    let url = config
        .url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| "Postgres repository requires a database url".to_string())?;

    let mut pg_config = PostgresConfig::new(url);
    if let Some(max) = config.max_connections {
        pg_config.max_connections = max;
    }
    if let Some(secs) = config.connection_timeout_secs {
        pg_config.connection_timeout = Duration::from_secs(secs);
    }

    PostgresNewsRepository::new(&pg_config)
        .map(|repo| Arc::new(repo) as Arc<dyn NewsRepository>)
        .map_err(|e| e.to_string())
}

#[linkme::distributed_slice(NEWS_REPOSITORIES)]
static POSTGRES_NEWS_REPOSITORY: NewsRepositoryEntry = NewsRepositoryEntry {
    name: "postgres",
    description: "PostgreSQL news repository (r2d2 connection pool)",
    factory: postgres_repository_factory,
};

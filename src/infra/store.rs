//! Storage adapter: uniform parameterized query execution over either the
//! primary relational store (Postgres) or the embedded fallback store
//! (SQLite).
//!
//! The backend is chosen once at startup: no configured host forces the
//! embedded store, and a failed primary connection falls back to it with a
//! logged warning. Queries are written with canonical `$N` placeholders;
//! the rewrite to the embedded store's `?` style lives entirely in here and
//! is never visible to the repository layer.
//!
//! Failure discipline: reads never raise to the caller (a failed read logs
//! and yields an empty row set); writes surface failure as `None`/`false`
//! sentinels the repositories must check. Multi-statement writes go through
//! [`Store::begin`] and commit or roll back explicitly.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DatabaseTransaction, DbBackend,
    DbErr, QueryResult, Statement, TransactionTrait, Value,
};

use crate::config::{Config, PRIMARY_POOL_SIZE};

/// Storage client owned by the composition root and shared (via `Arc`)
/// with the repository layer.
pub struct Store {
    conn: DatabaseConnection,
    backend: DbBackend,
}

impl Store {
    /// Connect according to configuration.
    ///
    /// Absence of a configured host forces the embedded backend; a primary
    /// connection failure degrades to it. This is a startup-time decision,
    /// not a per-request retry.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        match config.primary_url() {
            Some(url) => match Self::open(&url).await {
                Ok(store) => {
                    tracing::info!("Connected to primary store");
                    Ok(store)
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Primary store unreachable, falling back to embedded store"
                    );
                    Self::open(&config.fallback_url()).await
                }
            },
            None => {
                tracing::info!("No primary store configured, using embedded store");
                Self::open(&config.fallback_url()).await
            }
        }
    }

    /// Open a store from a connection URL (`postgres://` or `sqlite://`).
    pub async fn open(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_owned());
        // The embedded store is a single file (or one in-memory database in
        // tests); more than one pooled connection would not share it.
        let pool_size = if url.starts_with("sqlite") {
            1
        } else {
            PRIMARY_POOL_SIZE
        };
        options.max_connections(pool_size).sqlx_logging(false);

        let conn = Database::connect(options).await?;
        let backend = conn.get_database_backend();
        Ok(Self { conn, backend })
    }

    /// Whether the adapter degraded to (or was configured for) the embedded
    /// backend.
    pub fn is_fallback(&self) -> bool {
        matches!(self.backend, DbBackend::Sqlite)
    }

    pub fn backend(&self) -> DbBackend {
        self.backend
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Build a backend-appropriate statement from canonical `$N` SQL.
    ///
    /// Values must be supplied in ascending placeholder order; the rewrite
    /// to `?` keeps the positional correspondence.
    pub fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        let sql = match self.backend {
            DbBackend::Sqlite => translate_placeholders(sql),
            _ => sql.to_owned(),
        };
        Statement::from_sql_and_values(self.backend, sql, values)
    }

    /// Execute a read query, returning its rows.
    ///
    /// A failed read is logged and yields an empty result set.
    pub async fn fetch_all(&self, sql: &str, values: Vec<Value>) -> Vec<QueryResult> {
        match self.conn.query_all(self.statement(sql, values)).await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!(error = %e, "Read query failed");
                Vec::new()
            }
        }
    }

    /// Execute a read query expected to return at most one row.
    pub async fn fetch_one(&self, sql: &str, values: Vec<Value>) -> Option<QueryResult> {
        match self.conn.query_one(self.statement(sql, values)).await {
            Ok(row) => row,
            Err(e) => {
                tracing::error!(error = %e, "Read query failed");
                None
            }
        }
    }

    /// Execute an insert written with a `RETURNING id` clause, yielding the
    /// newly assigned identifier, or `None` on failure.
    pub async fn insert(&self, sql: &str, values: Vec<Value>) -> Option<i64> {
        match self.conn.query_one(self.statement(sql, values)).await {
            Ok(Some(row)) => match row.try_get::<i64>("", "id") {
                Ok(id) => Some(id),
                Err(e) => {
                    tracing::error!(error = %e, "Insert did not yield an id");
                    None
                }
            },
            Ok(None) => {
                tracing::error!("Insert did not yield a row");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Insert failed");
                None
            }
        }
    }

    /// Execute an update or delete, yielding a success flag.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> bool {
        match self.conn.execute(self.statement(sql, values)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(error = %e, "Write query failed");
                false
            }
        }
    }

    /// Execute raw backend-specific SQL (DDL), propagating the error.
    pub async fn execute_raw(&self, sql: &str) -> Result<(), DbErr> {
        self.conn
            .execute(Statement::from_string(self.backend, sql.to_owned()))
            .await?;
        Ok(())
    }

    /// Begin a transaction for multi-statement writes.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        self.conn.begin().await
    }

    /// Check connectivity by executing a trivial query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn
            .execute(Statement::from_string(self.backend, "SELECT 1".to_owned()))
            .await?;
        Ok(())
    }
}

/// Rewrite canonical `$N` placeholders to the embedded store's `?` style.
fn translate_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek().is_some_and(char::is_ascii_digit) {
            while chars.peek().is_some_and(char::is_ascii_digit) {
                chars.next();
            }
            out.push('?');
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_rewritten_in_order() {
        assert_eq!(
            translate_placeholders("SELECT * FROM products WHERE id = $1"),
            "SELECT * FROM products WHERE id = ?"
        );
        assert_eq!(
            translate_placeholders("UPDATE orders SET status = $1 WHERE id = $12"),
            "UPDATE orders SET status = ? WHERE id = ?"
        );
    }

    #[test]
    fn dollar_without_digit_is_left_alone() {
        assert_eq!(
            translate_placeholders("SELECT '$' FROM t WHERE a = $1"),
            "SELECT '$' FROM t WHERE a = ?"
        );
    }
}

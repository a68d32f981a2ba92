//! SQLite-backed durable medium.

use crate::store::error::MediumError;
use crate::store::medium::Medium;
use crate::store::schema::documents;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// One row of the key-value document table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = documents)]
struct Document {
    key: String,
    value: String,
}

/// Durable medium backed by a SQLite database.
///
/// Holds one connection for its lifetime and applies any pending
/// migrations when opened, so a fresh database file is usable
/// immediately. Use `":memory:"` for an in-memory database (useful
/// for tests).
pub struct SqliteMedium {
    database_path: String,
    connection: SqliteConnection,
}

impl SqliteMedium {
    /// Opens the database at the given path, creating and migrating
    /// it as needed.
    ///
    /// # Errors
    ///
    /// Returns [`MediumError`] if the connection or a migration fails.
    #[instrument(skip(database_path), fields(database_path = %database_path.as_ref()))]
    pub fn open(database_path: impl AsRef<str>) -> Result<Self, MediumError> {
        let database_path = database_path.as_ref().to_string();
        debug!(path = %database_path, "Establishing connection");
        let mut connection = SqliteConnection::establish(&database_path)?;

        connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| MediumError::new(format!("Migration error: {}", e)))?;

        info!(path = %database_path, "SQLite medium ready");
        Ok(Self {
            database_path,
            connection,
        })
    }

    /// Returns the path this medium was opened with.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

impl std::fmt::Debug for SqliteMedium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteMedium")
            .field("database_path", &self.database_path)
            .finish_non_exhaustive()
    }
}

impl Medium for SqliteMedium {
    #[instrument(skip(self))]
    fn read(&mut self, key: &str) -> Result<Option<String>, MediumError> {
        debug!("Looking up document");
        let row = documents::table
            .filter(documents::key.eq(key))
            .first::<Document>(&mut self.connection)
            .optional()?;

        if let Some(ref document) = row {
            debug!(bytes = document.value.len(), "Document found");
        } else {
            debug!("Document not found");
        }

        Ok(row.map(|document| document.value))
    }

    #[instrument(skip(self, value))]
    fn write(&mut self, key: &str, value: &str) -> Result<(), MediumError> {
        debug!(bytes = value.len(), "Storing document");
        let document = Document {
            key: key.to_string(),
            value: value.to_string(),
        };

        diesel::insert_into(documents::table)
            .values(&document)
            .on_conflict(documents::key)
            .do_update()
            .set(documents::value.eq(value))
            .execute(&mut self.connection)?;

        Ok(())
    }
}

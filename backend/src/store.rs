//! SQLite persistence for the product catalog.
//!
//! A single connection is shared by every worker behind a mutex. Products keep
//! the order in which they were created, which is the order the list endpoint
//! returns.

use std::sync::Mutex;

use common::model::product::Product;
use common::validation::{format_date, parse_date};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("product {0} already exists")]
    Duplicate(String),
    #[error("product {0} not found")]
    NotFound(String),
    #[error("stored date {0:?} is not a valid date")]
    CorruptDate(String),
    #[error("database lock poisoned")]
    Poisoned,
}

pub struct ProductStore {
    conn: Mutex<Connection>,
}

impl ProductStore {
    /// Opens (or creates) the database at `path`. `:memory:` is accepted.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS products (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                logo TEXT NOT NULL,
                date_release TEXT NOT NULL,
                date_revision TEXT NOT NULL
            );",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn list(&self) -> Result<Vec<Product>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, description, logo, date_release, date_revision
             FROM products ORDER BY seq",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, name, description, logo, release, revision)| {
                Ok(Product {
                    id,
                    name,
                    description,
                    logo,
                    date_release: stored_date(&release)?,
                    date_revision: stored_date(&revision)?,
                })
            })
            .collect()
    }

    pub fn exists(&self, id: &str) -> Result<bool, StoreError> {
        id_taken(&*self.lock()?, id)
    }

    /// Inserts `product`. The id check and the insert run under one lock so
    /// concurrent requests for the same id see exactly one success.
    pub fn insert(&self, product: &Product) -> Result<(), StoreError> {
        let conn = self.lock()?;
        if id_taken(&conn, &product.id)? {
            return Err(StoreError::Duplicate(product.id.clone()));
        }
        conn.execute(
            "INSERT INTO products (id, name, description, logo, date_release, date_revision)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &product.id,
                &product.name,
                &product.description,
                &product.logo,
                format_date(product.date_release),
                format_date(product.date_revision),
            ],
        )
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::Duplicate(product.id.clone()),
            _ => StoreError::Database(e),
        })?;
        Ok(())
    }

    /// Overwrites every field of product `id` except the id itself.
    pub fn update(&self, id: &str, product: &Product) -> Result<(), StoreError> {
        let changed = self.lock()?.execute(
            "UPDATE products
             SET name = ?2, description = ?3, logo = ?4, date_release = ?5, date_revision = ?6
             WHERE id = ?1",
            params![
                id,
                &product.name,
                &product.description,
                &product.logo,
                format_date(product.date_release),
                format_date(product.date_revision),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let changed = self
            .lock()?
            .execute("DELETE FROM products WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

fn id_taken(conn: &Connection, id: &str) -> Result<bool, StoreError> {
    let found = conn
        .query_row("SELECT 1 FROM products WHERE id = ?1", params![id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

fn stored_date(raw: &str) -> Result<chrono::NaiveDate, StoreError> {
    parse_date(raw).ok_or_else(|| StoreError::CorruptDate(raw.to_string()))
}

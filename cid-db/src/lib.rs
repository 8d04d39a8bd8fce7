//! In-memory SQLite database layer for the country indicators dataset.
//!
//! The long-form CSV (`Country Name,Indicator Name,Year,Value`) is loaded
//! into an in-memory SQLite database, and typed query methods read it back,
//! including the long-to-wide pivot used by the dashboard.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite`
//! - CSV data fetched at startup or embedded via `include_str!` in the consuming crate
//!
//! # Usage
//!
//! ```rust
//! use cid_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_indicators("Country Name,Indicator Name,Year,Value\nChile,GDP growth (annual %),1962,4.7\n").unwrap();
//! let rows = db.query_wide_rows().unwrap();
//! assert_eq!(rows.len(), 1);
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.

pub mod schema;
mod loader;
mod queries;
pub mod models;

pub use loader::{COUNTRY_COLUMN, INDICATOR_COLUMN, VALUE_COLUMN, YEAR_COLUMN};

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the long-form dataset.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

// Connection has no PartialEq; two handles are equal when they share it.
impl PartialEq for Database {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        assert!(db == db2);
        db.load_indicators(
            "Country Name,Indicator Name,Year,Value\nChile,GDP growth (annual %),1962,4.7\n",
        )
        .unwrap();
        assert_eq!(
            db2.query_countries().unwrap(),
            vec!["Chile"],
            "Clone should see same data via shared Rc"
        );
    }

    #[test]
    fn separate_databases_are_not_equal() {
        let a = Database::new().unwrap();
        let b = Database::new().unwrap();
        assert!(a != b);
    }
}

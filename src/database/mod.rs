//! chromesweep database layer.
//!
//! Wraps Chrome's `History` SQLite file behind [`HistoryDatabase`]. Chrome
//! owns the real schema; this layer never creates or migrates the file it
//! opens on disk. The `schema` module holds a minimal Chrome-shaped schema
//! for in-memory databases used by tests and fixtures.
//!
//! # Usage
//!
//! ```no_run
//! use chromesweep::database::HistoryDatabase;
//!
//! // Open Chrome's existing History file (never created by us)
//! let db = HistoryDatabase::open("/home/user/.config/google-chrome/Default/History")
//!     .expect("failed to open history database");
//!
//! // Or use an in-memory database with the test schema
//! let db = HistoryDatabase::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod schema;

pub use connection::HistoryDatabase;

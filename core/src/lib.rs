//! # Clientbook Core
//!
//! Client records, the storage contract and the document exporters behind the
//! Clientbook server.
//!
//! This crate has no knowledge of HTTP or of a particular database. The server
//! crate plugs a SQLite-backed [`ClientStore`] in; tests and tools can use the
//! in-memory [`MemoryStore`].
//!
//! ## Core Concepts
//!
//! ### Clients
//!
//! A [`Client`] is a contact record with a store-assigned id, a name, an email,
//! an optional phone, a company (empty when not given) and a creation
//! timestamp. Records are created and deleted, never edited.
//!
//! Incoming data arrives as a [`NewClient`], whose fields are all optional so
//! that a missing `name` or `email` surfaces as [`Error::Validation`] instead
//! of a deserialization failure. [`NewClient::validate`] turns it into a
//! [`ClientDraft`], the only thing a store accepts.
//!
//! ### Stores
//!
//! [`ClientStore`] is the persistence contract: add, list all, delete by id,
//! count. Ids increase strictly and are never reused, even after deletes.
//!
//! ### Exports
//!
//! The [`export`] module turns a snapshot (`&[Client]`) into a CSV, HTML or
//! PDF document. Exporters are pure: same records and options, same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use clientbook_core::{export, ExportFormat, ExportOptions, MemoryStore, NewClient};
//!
//! let store = MemoryStore::new();
//! let draft = NewClient {
//!     name: Some("Acme".into()),
//!     email: Some("a@acme.test".into()),
//!     phone: Some("123".into()),
//!     company: Some("Acme Inc".into()),
//! }
//! .validate()
//! .unwrap();
//!
//! let client = store.insert(draft);
//! assert_eq!(client.id, 1);
//!
//! let snapshot = store.snapshot();
//! let doc = export(
//!     ExportFormat::Csv,
//!     &snapshot,
//!     &ExportOptions::default(),
//!     clientbook_core::now(),
//! )
//! .unwrap();
//! assert_eq!(doc.filename(), "clients_export.csv");
//! ```

pub mod client;
pub mod error;
pub mod export;
pub mod seed;
pub mod store;

// Re-export main types at crate root
pub use client::{now, Client, ClientDraft, NewClient, TIMESTAMP_FORMAT};
pub use error::Error;
pub use export::{
    export, plan_pages, CsvOptions, Export, ExportFormat, ExportOptions, HtmlOptions, Labels,
    Locale, PageLayout, PdfOptions, UTF8_BOM,
};
pub use seed::{sample_clients, seed_if_empty};
pub use store::{ClientStore, MemoryStore};

/// Store-assigned client identifier.
pub type ClientId = i64;

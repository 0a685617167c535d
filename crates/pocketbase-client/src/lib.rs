//! Minimal async client for the PocketBase records API.
//!
//! Covers exactly the surface the bot consumes: paginated listing with
//! `sort` and `filter`, create, update, and delete over a single collection.
//! Record payloads are generic over serde types; no PocketBase schema
//! knowledge lives here beyond the envelope of a list response.
//!
//! ```rust,ignore
//! use pocketbase_client::{Client, ListOptions};
//!
//! let pb = Client::new("http://127.0.0.1:8090");
//! let todos: Vec<serde_json::Value> = pb
//!     .full_list("todos", &ListOptions::new().sort("-created"))
//!     .await?;
//! ```

pub mod error;
pub mod filter;

mod client;

pub use client::{Client, ListOptions, ListPage};
pub use error::PocketBaseError;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, PocketBaseError>;

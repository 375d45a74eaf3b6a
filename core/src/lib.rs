//! Core of the user listing: fetch once, then edit locally.
//!
//! # Overview
//! `HttpFetcher` reads the user collection from the remote API a single
//! time. `ListingView` owns the result and applies every later mutation
//! (like, edit, delete) in memory only. `render` turns the view into text
//! for the host to print after each operation.
//!
//! # Design
//! - `UserClient` is stateless and split into `build_list_users` /
//!   `parse_list_users`, so the I/O boundary is explicit and testable.
//! - Fetch failures are logged and collapse to `None`; the view shows an
//!   empty listing rather than propagating the error.
//! - The `liked` flag is client-only and never serialized.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod fetcher;
pub mod form;
pub mod http;
pub mod listing;
pub mod render;
pub mod types;

pub use client::{UserClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ValidationError};
pub use fetcher::{Fetcher, HttpFetcher};
pub use form::{EditForm, Field};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use listing::{Confirm, ListingView, DELETE_PROMPT};
pub use render::{avatar_url, render};
pub use types::{Address, Company, EditValues, User};

//! # events-api
//!
//! REST service for managing events and attendee registrations.
//!
//! The domain layer is a small set of self-validating value objects and
//! two entities; nothing invalid is constructible, so the HTTP layer
//! only translates between wire shapes and domain types. Persistence
//! goes through a repository trait with PostgreSQL and in-memory
//! implementations.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── JWT Auth (auth/)
//!     │
//!     ├── Domain Model (domain/)
//!     │
//!     ├── EventsRepository (persistence/)
//!     └── PostgreSQL Persistence
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;

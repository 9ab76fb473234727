//! Wire-level request and response types.
//!
//! DTOs keep serde and OpenAPI derives out of the domain layer. Request
//! types carry `Option` fields so absent values can be reported as
//! missing-argument failures instead of serde rejections; each request
//! offers an `into_entity` translation into the domain model.

mod auth_dto;
mod event_dto;
mod registration_dto;

pub use auth_dto::{TokenRequest, TokenResponse};
pub use event_dto::{CreateEventRequest, EventResponse};
pub use registration_dto::{CreateRegistrationRequest, RegistrationResponse};

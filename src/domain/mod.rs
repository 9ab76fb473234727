//! Domain layer: self-validating value objects, the event aggregate, and
//! the registration entity.
//!
//! Every type here validates fully at construction and is immutable
//! afterwards (the aggregate's pending-registrations list being the one
//! mutable piece). The layer is synchronous, performs no I/O, and fails
//! fast with [`DomainError`] — nothing in it is retried or deferred.

pub mod clock;
pub mod contact;
pub mod error;
pub mod event;
pub mod id;
pub mod registration;
pub mod text;
pub mod time_window;

pub use clock::{Clock, SystemClock};
pub use contact::{RegistrationEmailAddress, RegistrationPhoneNumber};
pub use error::DomainError;
pub use event::Event;
pub use id::Id;
pub use registration::Registration;
pub use text::{Description, Location, Name, RegistrationName};
pub use time_window::{EndTime, StartTime};

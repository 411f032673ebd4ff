//! Domain value objects and types.
//!
//! Type-safe wrappers for the fields of a contact submission. Each one trims
//! its input and validates at construction time, so an invalid record cannot
//! be represented once it leaves the form.

pub mod email;
pub mod errors;
pub mod message;
pub mod name;
pub mod phone;
pub mod subject;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use message::MessageBody;
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use subject::Subject;

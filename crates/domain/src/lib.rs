//! Domain-driven design building blocks.
//!
//! This crate provides:
//! - String value objects with normalization and validation (`LotId`, `EmailAddress`)
//! - `DomainError` and the aggregate `ValidationError`
//! - Command and DomainEvent contracts with their metadata
//! - The admission gate handlers run before applying a message

pub mod command;
pub mod error;
pub mod event;
pub mod message;
pub mod value_object;
pub mod value_objects;

pub use command::{Command, CommandMetadata};
pub use error::{DomainError, ErrorCode, HandlerError, ValidationError};
pub use event::{DomainEvent, EventMetadata};
pub use message::{Validate, collect_errors, ensure_supported, ensure_version};
pub use value_object::{StringValueObject, ValidValue, Validated, ValidationMode, normalize};
pub use value_objects::{EmailAddress, LotId};

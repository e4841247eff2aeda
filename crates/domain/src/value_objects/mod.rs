//! Concrete string value objects.

mod email_address;
mod lot_id;

pub use email_address::EmailAddress;
pub use lot_id::LotId;

//! Request and response shapes for the EchoIntel API.
//!
//! Response structs mirror the JSON returned by the service. Every struct
//! tolerates missing fields (they take their `Default` value), and the ones
//! the service may extend keep unknown keys in `extra`.

mod admin;
mod common;
mod customer;
mod forecast;
mod insight;
mod marketing;
mod requests;
mod risk;

pub use admin::*;
pub use common::*;
pub use customer::*;
pub use forecast::*;
pub use insight::*;
pub use marketing::*;
pub use requests::*;
pub use risk::*;

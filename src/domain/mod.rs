//! Domain types for the Rolodex application.
//! Defines the records stored in the database and the validated form inputs
//! used by the web layer.

pub mod contact;
pub mod error;
pub mod user;

pub use contact::*;
pub use error::*;
pub use user::*;

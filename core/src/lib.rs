//! Shared SQL plumbing for the aqueduct compiler.
//!
//! This crate holds the pieces that are independent of any particular query
//! domain: the database-type model with its pagination idioms, the
//! parameter-carrying SQL fragment type, the positional bind value, and the
//! sort direction.

pub mod dialect;
pub mod order;
pub mod sql;
pub mod value;

pub use dialect::{DbType, DbTypeParseError, UNLIMITED};
pub use order::SortDirection;
pub use sql::SqlFragment;
pub use value::AqlValue;

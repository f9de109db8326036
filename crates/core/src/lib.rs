//! Engine for migrating joker records from the single-effect schema to the
//! multi-effect schema. Keep this crate free of IO and process concerns.

pub mod error;
pub mod host;
pub mod locator;
pub mod rewrite;
pub mod schema;
pub mod serialize;

pub use error::*;
pub use host::*;
pub use locator::*;
pub use rewrite::*;
pub use schema::*;
pub use serialize::*;

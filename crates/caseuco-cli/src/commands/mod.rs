//! Command implementations.

pub mod parse;
pub mod schema;
pub mod wireless;

pub use self::parse::execute_parse;
pub use self::schema::execute_schema;
pub use self::wireless::execute_wireless;

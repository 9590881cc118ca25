//! Identifier casing and scalar conversion helpers for SQL tooling.
//!
//! `sqlconv` is a small foundation library for ORM and migration tooling:
//! it derives database column names from Rust identifiers and converts
//! heterogeneous scalar values between their typed, textual, and 64-bit
//! integer forms.
//!
//! # What's Here
//!
//! - **Casing**: [`snake_string`], [`snake_string_with_acronym`], and
//!   [`camel_string`] transform identifiers between `PascalCase` and
//!   `snake_case`.
//! - **Strategy**: [`NamingStrategy`] selects between the two snake-casing
//!   rules, either per call or through the process-wide cell configured
//!   with [`set_name_strategy`].
//! - **Scalars**: [`Value`] covers the primitive kinds a driver row can
//!   hold; [`Value::to_str`] renders any of them as text and
//!   [`Value::to_int64`] coerces the integer kinds.
//! - **Parsing**: [`StrTo`] parses primitives back out of strings, and the
//!   [`time`] module reads fixed-layout DATE/TIME/DATETIME values.
//!
//! # Example
//!
//! ```
//! use sqlconv::{NamingStrategy, Value};
//!
//! let column = NamingStrategy::SnakeAcronym.snake_case("HTTPTimeout");
//! assert_eq!(column, "http_timeout");
//!
//! assert_eq!(Value::from(42i32).to_str(), "42");
//! assert_eq!(Value::from(5u8).to_int64().unwrap(), 5);
//! ```

pub mod case;
pub mod error;
pub mod strategy;
pub mod strto;
pub mod time;
pub mod value;

pub use case::{camel_string, snake_string, snake_string_with_acronym};
pub use error::{Error, Result};
pub use strategy::{
    NamingStrategy, SNAKE_ACRONYM_NAME_STRATEGY, SNAKE_NAME_STRATEGY, name_strategy,
    set_name_strategy, snake_case_active,
};
pub use strto::StrTo;
pub use value::{FormatSpec, Value};

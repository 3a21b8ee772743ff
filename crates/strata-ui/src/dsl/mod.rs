//! Gradient options DSL.
//!
//! A flat list of `key: value` properties, one gradient per source:
//!
//! ```text
//! // header band
//! from: #1a1a2a; to: #4c6ef5
//! direction: horizontal
//! position: bottom right
//! length: 48px
//! ```
//!
//! | key         | value                                  |
//! |-------------|----------------------------------------|
//! | `from`      | `#rrggbb`, `#rgb`, or quoted/bare hex  |
//! | `to`        | same as `from`                         |
//! | `direction` | `horizontal` or `vertical`             |
//! | `position`  | up to two of `top bottom left right`   |
//! | `length`    | positive whole pixels, `px` optional   |
//!
//! Properties are separated by whitespace, `;` or `,`. `//` and `/* */`
//! comments are skipped.

pub mod error;
pub mod lexer;
pub mod parser;

pub use error::ParseError;
pub use parser::parse_options;

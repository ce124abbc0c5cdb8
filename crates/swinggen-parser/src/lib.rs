//! Parser for `.swing` description files.
//!
//! The description language is line-oriented: one directive or property per
//! line, `Begin <kind> [name]` / `End [kind]` block structure, `//` comments,
//! blank lines ignored. Keywords are case-insensitive; values keep their
//! original case.
//!
//! # Example
//!
//! ```
//! let source = "\
//! Begin Frame
//!     Title \"Demo\"
//!     Begin Button ok
//!         Text \"OK\"
//!     End Button
//! End Frame
//! ";
//!
//! let forest = swinggen_parser::parse(source).unwrap();
//! assert_eq!(forest.roots().len(), 1);
//! ```

mod grammar;
mod lexer;

pub use grammar::parse;
pub use lexer::{classify, split_lines, Classified, Line};

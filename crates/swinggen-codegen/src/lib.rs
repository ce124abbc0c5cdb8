//! Java Swing source generation from a parsed description forest.
//!
//! The emitter walks the forest depth-first in declaration order and
//! produces a self-contained Java class: one construction statement per
//! widget, property statements replayed in declaration order, and attachment
//! statements wiring each widget into its logical parent.
//!
//! Generation is a pure function of the forest — two runs over the same
//! input produce byte-identical output.
//!
//! # Example
//!
//! ```
//! let forest = swinggen_parser::parse("Begin Frame\nTitle \"Hi\"\nEnd Frame\n").unwrap();
//! let code = swinggen_codegen::generate(&forest, "Example0");
//! assert!(code.contains("JFrame frame_0 = new JFrame();"));
//! ```

mod layout;
mod properties;
mod swing;

pub use layout::layout_expr;
pub use swing::generate;

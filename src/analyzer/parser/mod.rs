//! Source Parser Module
//!
//! Tree-sitter based outline extraction for Python sources.
//!
//! ```rust,ignore
//! use wikiloom::analyzer::parser::PythonParser;
//!
//! let outline = PythonParser::new()?.parse("hello.py", content)?;
//! for function in &outline.functions {
//!     println!("{}", function.name);
//! }
//! ```

pub mod python;
pub mod traits;

pub use python::{FunctionOutline, ModuleOutline, PythonParser, clean_docstring};
pub use traits::{create_ts_parser, first_error_position, get_node_text};

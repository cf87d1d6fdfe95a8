//! Code Analyzer Module
//!
//! Structural reading of source files: module and function docstrings.

pub mod parser;

pub use parser::{FunctionOutline, ModuleOutline, PythonParser};

//! I/O utilities for loading and writing algorithm case files.
//!
//! A case file holds one problem instance per line: the problem keyword, its
//! arguments, and optionally the expected answer after `=>`. This crate
//! parses that format into typed inputs, reads and writes whole files, and
//! renders cases back into the same text form.

/// Typed problem inputs and the literal values they are built from.
///
/// `Value` is the untyped literal tree produced by the grammar; `Input` is
/// the checked, per-problem argument set the solvers consume.
pub mod case;

/// Reading and writing case files.
///
/// Wraps the line parser with file handling and attaches the file path and
/// line number to every error.
pub mod loader;

/// Grammar for a single case line, written with nom combinators.
pub mod parser;

//! Core types for the swinggen pipeline.
//!
//! This crate provides the foundational types shared by the parser and the
//! code generator:
//! - The parsed description tree ([`Forest`], [`Node`], [`NodeId`])
//! - Error types ([`ParseError`])
//!
//! With the `serde` feature enabled the whole tree is serializable, which the
//! CLI uses for its `--dump-tree` output and tests use for inspection.

pub mod ast;
pub mod errors;

pub use ast::{Forest, Node, NodeId};
pub use errors::ParseError;

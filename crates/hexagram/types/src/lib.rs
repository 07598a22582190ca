//! Canonical hexagram type system and codec.
//!
//! This crate provides the shared vocabulary of the transformation engine:
//! hexagram identifiers, six-line binary patterns, and the bidirectional
//! mapping between them.
//!
//! # Key Components
//!
//! - [`HexagramId`]: validated identifier in King Wen order (1 to 64)
//! - [`LineVector`]: ordered six-line pattern, bottom line first
//! - [`codec`]: id/pattern mapping plus traditional names
//!
//! The id/pattern mapping is a total bijection: every id has exactly one
//! pattern and every canonical pattern maps back to exactly one id. All
//! tables are compile-time constants; the crate holds no mutable state.

#![deny(unsafe_code)]

pub mod codec;
pub mod error;
pub mod id;
pub mod lines;

pub use error::HexagramError;
pub use id::HexagramId;
pub use lines::{Line, LineVector, LINE_COUNT};

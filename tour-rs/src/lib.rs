//! A guided tour of basic language features.
//!
//! Each module covers one topic and exposes the lines its section prints;
//! [`tour::Tour`] strings them together under `=== Title ===` headers.

pub mod car;
pub mod cli;
pub mod control;
pub mod direction;
pub mod fetch;
pub mod functions;
pub mod network;
pub mod optional;
pub mod point;
pub mod tour;
pub mod values;

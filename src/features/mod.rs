//! Feature implementations for quickadd.
//!
//! - Natural language task parsing

pub mod nlp;

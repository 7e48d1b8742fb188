//! Storage abstractions for service layer
//!
//! Contains the file-backed store that persists a whole collection as one
//! JSON document.

pub mod json_array_store;

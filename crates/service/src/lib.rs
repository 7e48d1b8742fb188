//! Service layer providing employee record operations on top of models.
//! - `employee`: relational store behind a repository trait, with validation
//!   and email uniqueness.
//! - `file`: JSON-file store shared by the file REST API and the MCP tools.
//! - `storage`: generic whole-document JSON collection persistence.

pub mod errors;
pub mod pagination;
pub mod employee;
pub mod storage;
pub mod file;
#[cfg(test)]
pub mod test_support;

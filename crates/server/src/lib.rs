//! HTTP surfaces of the employee directory: the relational API under
//! `/employees` and the JSON-file API under `/api/employees`.

pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use startup::{build_db_app, build_file_app, run_db_api, run_file_api};

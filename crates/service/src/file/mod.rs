//! File-backed employee records.

pub mod employee_store;

pub use employee_store::{EmployeeDraft, EmployeeFileStore, FileEmployee, FileEmployeeInput};

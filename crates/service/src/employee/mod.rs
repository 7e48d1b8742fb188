//! Relational employee records: payload types, repository seam and service.

pub mod domain;
pub mod repository;
pub mod service;

pub use domain::{EmployeeChanges, EmployeeQuery, NewEmployee};
pub use repository::{EmployeeRepository, SeaOrmEmployeeRepository};
pub use service::EmployeeService;

//! Database module: models, schema and storage for the roster tables.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and joined views
//! - `schema.rs`: SQL DDL and sample seed (SQLite)
//! - `sqlite.rs`: `RosterStorage`, the single-connection query surface

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Department, Employee, EmployeeView, NewEmployee, NewRole, Role, RoleView};
pub use sqlite::RosterStorage;

//! Menu actions. Each handler runs one statement and reports back to the
//! operator; errors are returned to the menu loop, which prints them.

mod read;
mod write;

pub use write::parse_salary;

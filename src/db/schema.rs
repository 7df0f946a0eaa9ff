//! SQL DDL for the department / role / employee schema.
//! Statements are separated by `;` and executed one at a time.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT on every table
/// - `roles.department_id` referencing `departments`
/// - `employees.role_id` referencing `roles`
/// - `employees.manager_id` nullable, referencing `employees`
/// - `CHECK` constraints rejecting blank names and negative salaries
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(trim(name)) > 0)
);

CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (length(trim(title)) > 0),
    salary REAL NOT NULL CHECK (salary >= 0),
    department_id INTEGER NOT NULL REFERENCES departments(id)
);

CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL CHECK (length(trim(first_name)) > 0),
    last_name TEXT NOT NULL CHECK (length(trim(last_name)) > 0),
    role_id INTEGER NOT NULL REFERENCES roles(id),
    manager_id INTEGER NULL REFERENCES employees(id)
);

CREATE INDEX IF NOT EXISTS idx_roles_department_id ON roles(department_id);
CREATE INDEX IF NOT EXISTS idx_employees_role_id ON employees(role_id);
CREATE INDEX IF NOT EXISTS idx_employees_manager_id ON employees(manager_id);
"#;

/// Sample data loaded into an empty database when `SEED` is set.
/// Managers are inserted before their reports so every `manager_id` resolves.
pub const SQLITE_SEED: &str = r#"
INSERT INTO departments (id, name) VALUES
    (1, 'Engineering'),
    (2, 'Sales'),
    (3, 'Finance'),
    (4, 'Legal');

INSERT INTO roles (id, title, salary, department_id) VALUES
    (1, 'Lead Engineer', 150000, 1),
    (2, 'Software Engineer', 120000, 1),
    (3, 'Sales Lead', 100000, 2),
    (4, 'Salesperson', 80000, 2),
    (5, 'Account Manager', 160000, 3),
    (6, 'Accountant', 125000, 3),
    (7, 'Legal Team Lead', 250000, 4),
    (8, 'Lawyer', 190000, 4);

INSERT INTO employees (id, first_name, last_name, role_id, manager_id) VALUES
    (1, 'Ashley', 'Rodriguez', 1, NULL),
    (2, 'Kevin', 'Tupik', 2, 1),
    (3, 'John', 'Doe', 3, NULL),
    (4, 'Mike', 'Chan', 4, 3),
    (5, 'Kunal', 'Singh', 5, NULL),
    (6, 'Malia', 'Brown', 6, 5),
    (7, 'Sarah', 'Lourd', 7, NULL),
    (8, 'Tom', 'Allen', 8, 7);
"#;

/// Split a bundle of statements into the non-empty ones.
pub fn statements(sql: &str) -> impl Iterator<Item = &str> {
    sql.split(';').map(str::trim).filter(|s| !s.is_empty())
}


use crate::db::models::{
    Department, Employee, EmployeeView, NewEmployee, NewRole, Role, RoleView,
};
use crate::db::schema::{SQLITE_INIT, SQLITE_SEED, statements};
use crate::error::TrackerError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

type SqlitePool = Pool<Sqlite>;

/// Query surface over the department / role / employee tables.
///
/// Backed by a pool capped at one connection that never idles out, so the
/// process holds exactly one connection from `connect` until `close`.
#[derive(Clone)]
pub struct RosterStorage {
    pool: SqlitePool,
}

impl RosterStorage {
    fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, creating the file if missing
    /// and enabling foreign key enforcement.
    pub async fn connect(database_url: &str) -> Result<Self, TrackerError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        debug!(database_url, "database connection established");
        Ok(Self::new(pool))
    }

    /// Release the connection. Further queries fail with `PoolClosed`.
    pub async fn close(&self) {
        self.pool.close().await;
        debug!("database connection released");
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TrackerError> {
        // sqlx::query runs a single statement, so the bundle is split first
        for stmt in statements(SQLITE_INIT) {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Load the sample data set when no departments exist yet.
    /// Returns whether anything was inserted.
    pub async fn seed_if_empty(&self) -> Result<bool, TrackerError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            debug!(count, "departments present; skipping seed");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for stmt in statements(SQLITE_SEED) {
            sqlx::query(stmt).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        info!("sample data loaded");
        Ok(true)
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, TrackerError> {
        let rows = sqlx::query_as::<_, Department>("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, TrackerError> {
        let rows = sqlx::query_as::<_, Role>(
            "SELECT id, title, salary, department_id FROM roles ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, TrackerError> {
        let rows = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, role_id, manager_id FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Roles with their department name resolved.
    pub async fn role_views(&self) -> Result<Vec<RoleView>, TrackerError> {
        let rows = sqlx::query_as::<_, RoleView>(
            r#"
            SELECT roles.id, roles.title, departments.name AS department, roles.salary
            FROM roles
            JOIN departments ON roles.department_id = departments.id
            ORDER BY roles.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Employees with role, department and manager name resolved.
    /// The manager self-join is a LEFT JOIN so root employees are kept.
    pub async fn employee_views(&self) -> Result<Vec<EmployeeView>, TrackerError> {
        let rows = sqlx::query_as::<_, EmployeeView>(
            r#"
            SELECT e.id, e.first_name, e.last_name, r.title, d.name AS department, r.salary,
                   m.first_name || ' ' || m.last_name AS manager
            FROM employees e
            JOIN roles r ON e.role_id = r.id
            JOIN departments d ON r.department_id = d.id
            LEFT JOIN employees m ON e.manager_id = m.id
            ORDER BY e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a department. Returns the new row id.
    pub async fn add_department(&self, name: &str) -> Result<i64, TrackerError> {
        let id = sqlx::query("INSERT INTO departments (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        info!(id, department = name, "department added");
        Ok(id)
    }

    /// Insert a role. Returns the new row id.
    pub async fn add_role(&self, role: &NewRole) -> Result<i64, TrackerError> {
        let id = sqlx::query("INSERT INTO roles (title, salary, department_id) VALUES (?, ?, ?)")
            .bind(&role.title)
            .bind(role.salary)
            .bind(role.department_id)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        info!(id, title = %role.title, department_id = role.department_id, "role added");
        Ok(id)
    }

    /// Insert an employee. Returns the new row id.
    pub async fn add_employee(&self, employee: &NewEmployee) -> Result<i64, TrackerError> {
        let id = sqlx::query(
            r#"INSERT INTO employees (first_name, last_name, role_id, manager_id)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.role_id)
        .bind(employee.manager_id)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();
        info!(
            id,
            first_name = %employee.first_name,
            last_name = %employee.last_name,
            role_id = employee.role_id,
            manager_id = ?employee.manager_id,
            "employee added"
        );
        Ok(id)
    }

    /// Reassign an employee's role. Only `role_id` is touched.
    pub async fn update_employee_role(
        &self,
        employee_id: i64,
        role_id: i64,
    ) -> Result<(), TrackerError> {
        let affected = sqlx::query("UPDATE employees SET role_id = ? WHERE id = ?")
            .bind(role_id)
            .bind(employee_id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        if affected == 0 {
            return Err(TrackerError::EmployeeNotFound(employee_id));
        }
        info!(employee_id, role_id, "employee role updated");
        Ok(())
    }
}

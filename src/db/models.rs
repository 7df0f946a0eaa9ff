use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Role {
    pub id: i64,
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A role joined with the name of its department.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RoleView {
    pub id: i64,
    pub title: String,
    pub department: String,
    pub salary: f64,
}

/// An employee joined with role, department and manager name.
/// `manager` is `None` for employees without a manager.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EmployeeView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: f64,
    pub manager: Option<String>,
}

impl EmployeeView {
    pub fn manager_label(&self) -> &str {
        self.manager.as_deref().unwrap_or("None")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

use crate::db::{NewEmployee, NewRole};
use crate::error::TrackerError;
use crate::menu::Menu;
use crate::prompt::{Choice, Prompter, choose};
use std::io::Write;
use tracing::debug;

/// Parse operator salary text. Surrounding whitespace and `,` digit
/// separators are ignored.
pub fn parse_salary(raw: &str) -> Result<f64, TrackerError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(TrackerError::InvalidSalary(raw.to_string())),
    }
}

impl<P: Prompter, W: Write> Menu<P, W> {
    pub(crate) async fn add_department(&mut self) -> Result<(), TrackerError> {
        let name = self.prompter.input("Enter the name of the department:")?;
        self.storage.add_department(&name).await?;
        writeln!(self.out, "Department {name} added successfully.")?;
        Ok(())
    }

    pub(crate) async fn add_role(&mut self) -> Result<(), TrackerError> {
        let departments: Vec<Choice<i64>> = self
            .storage
            .list_departments()
            .await?
            .into_iter()
            .map(|d| Choice::new(d.name, d.id))
            .collect();
        if departments.is_empty() {
            writeln!(self.out, "No departments found. Add a department first.")?;
            return Ok(());
        }

        let title = self.prompter.input("Enter the role you wish to create:")?;
        let salary = self.prompter.input("Enter the salary for this role:")?;
        let department = choose(
            &mut self.prompter,
            "Select the department this role is in:",
            &departments,
        )?;

        let role = NewRole {
            title,
            salary: parse_salary(&salary)?,
            department_id: department.value,
        };
        self.storage.add_role(&role).await?;
        writeln!(self.out, "{} role successfully added.", role.title)?;
        Ok(())
    }

    pub(crate) async fn add_employee(&mut self) -> Result<(), TrackerError> {
        let roles = self.role_choices().await?;
        let employees = self.employee_choices().await?;
        if roles.is_empty() {
            writeln!(self.out, "No roles found. Add a role first.")?;
            return Ok(());
        }

        let managers: Vec<Choice<Option<i64>>> = std::iter::once(Choice::new("None", None))
            .chain(
                employees
                    .into_iter()
                    .map(|c| Choice::new(c.label, Some(c.value))),
            )
            .collect();

        let first_name = self.prompter.input("Enter the employee's first name:")?;
        let last_name = self.prompter.input("Enter the employee's last name:")?;
        let role = choose(&mut self.prompter, "Select the employee's role:", &roles)?;
        let manager = choose(&mut self.prompter, "Select the employee's manager:", &managers)?;

        let employee = NewEmployee {
            first_name,
            last_name,
            role_id: role.value,
            manager_id: manager.value,
        };
        self.storage.add_employee(&employee).await?;
        writeln!(
            self.out,
            "Employee {} {} successfully added.",
            employee.first_name, employee.last_name
        )?;
        Ok(())
    }

    pub(crate) async fn update_employee_role(&mut self) -> Result<(), TrackerError> {
        let roles = self.role_choices().await?;
        let employees = self.employee_choices().await?;
        if employees.is_empty() {
            writeln!(self.out, "No employees found. Add an employee first.")?;
            return Ok(());
        }
        if roles.is_empty() {
            writeln!(self.out, "No roles found. Add a role first.")?;
            return Ok(());
        }

        let employee = choose(
            &mut self.prompter,
            "Select the employee you wish to update:",
            &employees,
        )?;
        let role = choose(
            &mut self.prompter,
            "Select the employee's updated role:",
            &roles,
        )?;

        debug!(employee_id = employee.value, role_id = role.value, "reassigning role");
        self.storage
            .update_employee_role(employee.value, role.value)
            .await?;
        writeln!(self.out, "{}'s role successfully updated.", employee.label)?;
        Ok(())
    }

    async fn role_choices(&self) -> Result<Vec<Choice<i64>>, TrackerError> {
        let roles = self.storage.list_roles().await?;
        Ok(roles
            .into_iter()
            .map(|r| Choice::new(r.title, r.id))
            .collect())
    }

    async fn employee_choices(&self) -> Result<Vec<Choice<i64>>, TrackerError> {
        let employees = self.storage.list_employees().await?;
        Ok(employees
            .into_iter()
            .map(|e| Choice::new(e.full_name(), e.id))
            .collect())
    }
}


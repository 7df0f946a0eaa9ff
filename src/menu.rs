//! The top-level prompt loop: show the actions, run the picked handler,
//! show the actions again.

use crate::db::RosterStorage;
use crate::error::TrackerError;
use crate::prompt::Prompter;
use std::fmt;
use std::io::Write;
use tracing::{debug, error, info};

pub const MENU_PROMPT: &str = "What would you like to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuChoice {
    /// Every action in display order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::ViewDepartments,
        MenuChoice::ViewRoles,
        MenuChoice::ViewEmployees,
        MenuChoice::AddDepartment,
        MenuChoice::AddRole,
        MenuChoice::AddEmployee,
        MenuChoice::UpdateEmployeeRole,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::ViewDepartments => "View all departments",
            MenuChoice::ViewRoles => "View all roles",
            MenuChoice::ViewEmployees => "View all employees",
            MenuChoice::AddDepartment => "Add a department",
            MenuChoice::AddRole => "Add a role",
            MenuChoice::AddEmployee => "Add an employee",
            MenuChoice::UpdateEmployeeRole => "Update an employee role",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label().to_string()).collect()
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owns the database handle, the prompt source and the output sink for
/// the lifetime of one session.
pub struct Menu<P, W> {
    pub(crate) storage: RosterStorage,
    pub(crate) prompter: P,
    pub(crate) out: W,
}

impl<P: Prompter, W: Write> Menu<P, W> {
    pub fn new(storage: RosterStorage, prompter: P, out: W) -> Self {
        Self {
            storage,
            prompter,
            out,
        }
    }

    /// Run until the operator picks "Exit" or the prompt source fails.
    /// The database connection is released either way.
    pub async fn run(mut self) -> Result<(), TrackerError> {
        let result = self.drive().await;
        self.storage.close().await;
        result
    }

    async fn drive(&mut self) -> Result<(), TrackerError> {
        let labels = MenuChoice::labels();
        loop {
            let index = self.prompter.select(MENU_PROMPT, &labels)?;
            let choice = MenuChoice::ALL
                .get(index)
                .copied()
                .ok_or_else(|| TrackerError::UnknownChoice {
                    prompt: MENU_PROMPT.to_string(),
                    answer: index.to_string(),
                })?;
            debug!(%choice, "menu selection");

            if choice == MenuChoice::Exit {
                info!("exit requested");
                return Ok(());
            }

            if let Err(err) = self.dispatch(choice).await {
                if err.is_fatal() {
                    return Err(err);
                }
                error!(%choice, error = %err, "action failed");
                writeln!(self.out, "Error: {err}")?;
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), TrackerError> {
        match choice {
            MenuChoice::ViewDepartments => self.view_departments().await,
            MenuChoice::ViewRoles => self.view_roles().await,
            MenuChoice::ViewEmployees => self.view_employees().await,
            MenuChoice::AddDepartment => self.add_department().await,
            MenuChoice::AddRole => self.add_role().await,
            MenuChoice::AddEmployee => self.add_employee().await,
            MenuChoice::UpdateEmployeeRole => self.update_employee_role().await,
            MenuChoice::Exit => Ok(()),
        }
    }
}


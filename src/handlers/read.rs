use crate::error::TrackerError;
use crate::menu::Menu;
use crate::prompt::Prompter;
use crate::table;
use std::io::Write;

impl<P: Prompter, W: Write> Menu<P, W> {
    pub(crate) async fn view_departments(&mut self) -> Result<(), TrackerError> {
        let rows = self.storage.list_departments().await?;
        write!(self.out, "{}", table::render(&rows))?;
        Ok(())
    }

    pub(crate) async fn view_roles(&mut self) -> Result<(), TrackerError> {
        let rows = self.storage.role_views().await?;
        write!(self.out, "{}", table::render(&rows))?;
        Ok(())
    }

    pub(crate) async fn view_employees(&mut self) -> Result<(), TrackerError> {
        let rows = self.storage.employee_views().await?;
        write!(self.out, "{}", table::render(&rows))?;
        Ok(())
    }
}

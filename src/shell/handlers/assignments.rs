use std::io::{BufRead, Write};
use tracing::info;

use crate::db;
use crate::shell::error::ShellError;
use crate::shell::types::Session;

pub fn handle_add_assignment<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let name = session.prompt_line("Enter assignment name: ")?;
    // Free text; "Homework" and "Test" are only suggestions.
    let kind = session.prompt_line("Enter type (Homework/Test): ")?;
    let class_id = session.prompt_int("Enter class ID: ")?;
    let assignment_id = db::add_assignment(session.conn, &name, &kind, class_id)?;
    info!(assignment_id, class_id, "assignment added");
    writeln!(session.output, "Assignment added successfully!")?;
    Ok(())
}

use std::io::{BufRead, Write};
use tracing::info;

use crate::db;
use crate::shell::error::ShellError;
use crate::shell::types::Session;

pub fn handle_add_student<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let name = session.prompt_line("Enter student name: ")?;
    let class_id = session.prompt_int("Enter class ID: ")?;
    let student_id = db::add_student(session.conn, &name, class_id)?;
    info!(student_id, class_id, "student added");
    writeln!(session.output, "Student added successfully!")?;
    Ok(())
}

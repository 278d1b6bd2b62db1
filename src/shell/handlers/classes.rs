use std::io::{BufRead, Write};
use tracing::info;

use crate::db;
use crate::shell::error::ShellError;
use crate::shell::types::Session;

pub fn handle_add_class<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let name = session.prompt_line("Enter class name: ")?;
    let class_id = db::add_class(session.conn, &name)?;
    info!(class_id, "class added");
    writeln!(session.output, "Class added successfully!")?;
    Ok(())
}

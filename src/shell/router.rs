use std::io::{self, BufRead, Write};
use tracing::debug;

use super::error::ShellError;
use super::handlers;
use super::types::{MenuChoice, Session};

const MENU: &str = "
Welcome to the Student Grading Application

1. Add Class
2. Add Student
3. Add Assignment
4. Record Grade
5. Calculate Class Grade
6. Display Student Assignment and Grades Information
7. Delete an assignment grade for Student
8. Edit an assignment grade for Student
9. Exit";

const FAREWELL: &str = "Thank you for using the Student Grading Application!";

enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user picks Exit or input runs out. The farewell
/// line is written on every way out, including a failed terminal.
pub fn run<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> io::Result<()> {
    let result = menu_loop(session);
    let farewell = writeln!(session.output, "{FAREWELL}").and_then(|_| session.output.flush());
    result.and(farewell)
}

fn menu_loop<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> io::Result<()> {
    loop {
        writeln!(session.output, "{MENU}")?;

        let flow = match dispatch(session) {
            Ok(flow) => flow,
            Err(ShellError::EndOfInput) => {
                debug!("input closed, leaving menu");
                writeln!(session.output)?;
                Flow::Exit
            }
            Err(ShellError::Io(e)) => return Err(e),
            Err(ShellError::InvalidNumber { input, source }) => {
                debug!(input = %input, "rejected non-integer input");
                writeln!(session.output, "Error: {source}")?;
                writeln!(session.output, "Please enter a valid input.")?;
                Flow::Continue
            }
            Err(ShellError::InvalidText { source }) => {
                debug!(bytes = source.as_bytes().len(), "rejected non-UTF-8 input");
                writeln!(session.output, "Error: {}", source.utf8_error())?;
                writeln!(session.output, "Please enter a valid input.")?;
                Flow::Continue
            }
            Err(ShellError::Store(e)) => {
                debug!(error = %e, "store operation failed");
                writeln!(session.output, "Database error: {e}")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

fn dispatch<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<Flow, ShellError> {
    let raw = session.prompt_line("Enter your choice: ")?;
    let Some(choice) = MenuChoice::parse(&raw) else {
        debug!(input = %raw, "unknown menu choice");
        writeln!(session.output, "Invalid choice. Please try again.")?;
        return Ok(Flow::Continue);
    };
    debug!(?choice, "menu choice");

    match choice {
        MenuChoice::AddClass => handlers::classes::handle_add_class(session)?,
        MenuChoice::AddStudent => handlers::students::handle_add_student(session)?,
        MenuChoice::AddAssignment => handlers::assignments::handle_add_assignment(session)?,
        MenuChoice::RecordGrade => handlers::grades::handle_record_grade(session)?,
        MenuChoice::ClassGrade => handlers::grades::handle_class_grade(session)?,
        MenuChoice::ListGrades => handlers::grades::handle_list_grades(session)?,
        MenuChoice::DeleteGrade => handlers::grades::handle_delete_grade(session)?,
        MenuChoice::EditGrade => handlers::grades::handle_edit_grade(session)?,
        MenuChoice::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

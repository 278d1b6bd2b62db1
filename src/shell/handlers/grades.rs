use std::io::{BufRead, Write};
use tracing::info;

use crate::calc;
use crate::db;
use crate::shell::error::ShellError;
use crate::shell::types::Session;

pub fn handle_record_grade<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let student_id = session.prompt_int("Enter student ID: ")?;
    let assignment_id = session.prompt_int("Enter assignment ID: ")?;
    let grade = session.prompt_int("Enter grade: ")?;
    db::record_grade(session.conn, student_id, assignment_id, grade)?;
    writeln!(session.output, "Grade recorded successfully!")?;
    Ok(())
}

pub fn handle_class_grade<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let student_id = session.prompt_int("Enter student ID: ")?;
    match calc::class_grade(session.conn, student_id)? {
        Some(g) => writeln!(
            session.output,
            "Overall Class Grade: {:.2}% ({})",
            g.average, g.letter
        )?,
        None => writeln!(session.output, "No grades recorded for student {student_id}.")?,
    }
    Ok(())
}

pub fn handle_list_grades<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let mut listing = db::list_grades(session.conn)?;
    let mut shown = 0usize;
    for row in listing.rows()? {
        let row = row?;
        writeln!(
            session.output,
            "Student: {}, Assignment: {}, Grade: {}",
            row.student_name, row.assignment_name, row.grade
        )?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(session.output, "No grades recorded.")?;
    }
    Ok(())
}

pub fn handle_delete_grade<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let student_id = session.prompt_int("Enter student ID: ")?;
    let assignment_id = session.prompt_int("Enter assignment ID: ")?;
    let removed = db::delete_grade(session.conn, student_id, assignment_id)?;
    info!(student_id, assignment_id, removed, "grade deleted");
    writeln!(
        session.output,
        "Grade deleted successfully. ({removed} row(s) removed)"
    )?;
    Ok(())
}

pub fn handle_edit_grade<R: BufRead, W: Write>(
    session: &mut Session<'_, R, W>,
) -> Result<(), ShellError> {
    let student_id = session.prompt_int("Enter student ID: ")?;
    let assignment_id = session.prompt_int("Enter assignment ID: ")?;
    let new_grade = session.prompt_int("Enter new grade: ")?;
    let changed = db::edit_grade(session.conn, student_id, assignment_id, new_grade)?;
    info!(student_id, assignment_id, changed, "grade edited");
    writeln!(
        session.output,
        "Grade updated successfully. ({changed} row(s) changed)"
    )?;
    Ok(())
}

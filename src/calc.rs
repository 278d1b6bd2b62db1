use crate::db;
use rusqlite::Connection;

/// Letter band for a percentage. Boundary values belong to the higher band.
pub fn grade_to_letter(percentage: f64) -> char {
    if percentage >= 90.0 {
        'A'
    } else if percentage >= 80.0 {
        'B'
    } else if percentage >= 70.0 {
        'C'
    } else if percentage >= 60.0 {
        'D'
    } else {
        'F'
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassGrade {
    pub average: f64,
    pub letter: char,
}

/// Overall grade for a student across every recorded assignment, or `None`
/// when nothing has been recorded yet.
pub fn class_grade(conn: &Connection, student_id: i64) -> rusqlite::Result<Option<ClassGrade>> {
    let avg = db::average_grade(conn, student_id)?;
    Ok(avg.map(|average| ClassGrade {
        average,
        letter: grade_to_letter(average),
    }))
}

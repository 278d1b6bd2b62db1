use rusqlite::{Connection, Row, Statement};
use std::path::Path;
use tracing::{debug, info};

pub const DB_FILE_NAME: &str = "student_grades.db";

pub fn open_db(path: &Path) -> anyhow::Result<Connection> {
    let conn = Connection::open(path)?;
    create_schema(&conn)?;
    info!(path = %path.display(), "gradebook database ready");
    Ok(conn)
}

/// Creates the four gradebook tables if they are missing. Existing tables are
/// never altered.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    // The bundled SQLite enforces foreign keys by default. Ids typed at the
    // menu are stored as given, so the declared references stay unchecked.
    conn.execute("PRAGMA foreign_keys = OFF", [])?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Classes(
            id INTEGER PRIMARY KEY,
            class_name TEXT UNIQUE
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Students(
            id INTEGER PRIMARY KEY,
            name TEXT,
            class_id INTEGER,
            FOREIGN KEY(class_id) REFERENCES Classes(id)
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS Assignments(
            id INTEGER PRIMARY KEY,
            assignment_name TEXT,
            type TEXT,
            class_id INTEGER,
            FOREIGN KEY(class_id) REFERENCES Classes(id)
        )",
        [],
    )?;

    // No UNIQUE(student_id, assignment_id): a student may hold several grade
    // rows for one assignment, and delete/edit act on all of them.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS Grades(
            id INTEGER PRIMARY KEY,
            student_id INTEGER,
            assignment_id INTEGER,
            grade INTEGER,
            FOREIGN KEY(student_id) REFERENCES Students(id),
            FOREIGN KEY(assignment_id) REFERENCES Assignments(id)
        )",
        [],
    )?;

    Ok(())
}

pub fn add_class(conn: &Connection, name: &str) -> rusqlite::Result<i64> {
    conn.execute("INSERT INTO Classes(class_name) VALUES(?)", [name])?;
    let id = conn.last_insert_rowid();
    debug!(class_id = id, name, "class inserted");
    Ok(id)
}

pub fn add_student(conn: &Connection, name: &str, class_id: i64) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO Students(name, class_id) VALUES(?, ?)",
        (name, class_id),
    )?;
    let id = conn.last_insert_rowid();
    debug!(student_id = id, class_id, name, "student inserted");
    Ok(id)
}

pub fn add_assignment(
    conn: &Connection,
    name: &str,
    kind: &str,
    class_id: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO Assignments(assignment_name, type, class_id) VALUES(?, ?, ?)",
        (name, kind, class_id),
    )?;
    let id = conn.last_insert_rowid();
    debug!(assignment_id = id, class_id, name, kind, "assignment inserted");
    Ok(id)
}

pub fn record_grade(
    conn: &Connection,
    student_id: i64,
    assignment_id: i64,
    grade: i64,
) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO Grades(student_id, assignment_id, grade) VALUES(?, ?, ?)",
        (student_id, assignment_id, grade),
    )?;
    let id = conn.last_insert_rowid();
    debug!(grade_id = id, student_id, assignment_id, grade, "grade recorded");
    Ok(id)
}

/// Mean of every grade recorded for the student. `AVG` over an empty set is
/// NULL, which comes back as `None`.
pub fn average_grade(conn: &Connection, student_id: i64) -> rusqlite::Result<Option<f64>> {
    conn.query_row(
        "SELECT AVG(grade) FROM Grades WHERE student_id = ?",
        [student_id],
        |r| r.get(0),
    )
}

/// Deletes every grade row for the pair and returns how many were removed.
pub fn delete_grade(
    conn: &Connection,
    student_id: i64,
    assignment_id: i64,
) -> rusqlite::Result<usize> {
    let n = conn.execute(
        "DELETE FROM Grades WHERE student_id = ? AND assignment_id = ?",
        (student_id, assignment_id),
    )?;
    debug!(student_id, assignment_id, rows = n, "grades deleted");
    Ok(n)
}

/// Overwrites the grade on every row for the pair and returns how many changed.
pub fn edit_grade(
    conn: &Connection,
    student_id: i64,
    assignment_id: i64,
    new_grade: i64,
) -> rusqlite::Result<usize> {
    let n = conn.execute(
        "UPDATE Grades SET grade = ? WHERE student_id = ? AND assignment_id = ?",
        (new_grade, student_id, assignment_id),
    )?;
    debug!(student_id, assignment_id, new_grade, rows = n, "grades updated");
    Ok(n)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradeRow {
    pub student_name: String,
    pub assignment_name: String,
    pub grade: i64,
}

fn grade_row(row: &Row<'_>) -> rusqlite::Result<GradeRow> {
    Ok(GradeRow {
        student_name: row.get(0)?,
        assignment_name: row.get(1)?,
        grade: row.get(2)?,
    })
}

/// Prepared student/assignment/grade join. Each call to [`GradeListing::rows`]
/// runs the query again, so a listing can be walked any number of times.
pub struct GradeListing<'conn> {
    stmt: Statement<'conn>,
}

impl<'conn> GradeListing<'conn> {
    pub fn prepare(conn: &'conn Connection) -> rusqlite::Result<Self> {
        let stmt = conn.prepare(
            "SELECT s.name, a.assignment_name, g.grade
             FROM Students s
             JOIN Grades g ON s.id = g.student_id
             JOIN Assignments a ON a.id = g.assignment_id
             ORDER BY g.id",
        )?;
        Ok(Self { stmt })
    }

    pub fn rows(
        &mut self,
    ) -> rusqlite::Result<impl Iterator<Item = rusqlite::Result<GradeRow>> + '_> {
        self.stmt.query_map([], grade_row)
    }
}

pub fn list_grades(conn: &Connection) -> rusqlite::Result<GradeListing<'_>> {
    GradeListing::prepare(conn)
}

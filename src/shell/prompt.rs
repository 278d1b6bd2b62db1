use std::io::{BufRead, Write};

use super::error::ShellError;
use super::types::Session;

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Prints `label` and reads one line, without its line terminator.
    pub fn prompt_line(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        let mut line =
            String::from_utf8(buf).map_err(|source| ShellError::InvalidText { source })?;
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    pub fn prompt_int(&mut self, label: &str) -> Result<i64, ShellError> {
        let input = self.prompt_line(label)?;
        let parsed = input.trim().parse::<i64>();
        parsed.map_err(|source| ShellError::InvalidNumber { input, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;
    use std::io::Cursor;

    fn session<'a>(conn: &'a Connection, input: &str) -> Session<'a, Cursor<Vec<u8>>, Vec<u8>> {
        Session {
            conn,
            input: Cursor::new(input.as_bytes().to_vec()),
            output: Vec::new(),
        }
    }

    #[test]
    fn prompt_line_strips_terminator_only() {
        let conn = Connection::open_in_memory().expect("open");
        let mut s = session(&conn, "  Algebra I \r\nnext\n");
        assert_eq!(s.prompt_line("Enter class name: ").expect("line"), "  Algebra I ");
        assert_eq!(s.prompt_line("again: ").expect("line"), "next");
        assert_eq!(
            String::from_utf8(s.output).expect("utf8"),
            "Enter class name: again: "
        );
    }

    #[test]
    fn prompt_int_reports_the_bad_text() {
        let conn = Connection::open_in_memory().expect("open");
        let mut s = session(&conn, " 12 \nabc\n");
        assert_eq!(s.prompt_int("id: ").expect("int"), 12);
        match s.prompt_int("id: ") {
            Err(ShellError::InvalidNumber { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn non_utf8_line_is_rejected_and_next_line_still_reads() {
        let conn = Connection::open_in_memory().expect("open");
        let mut s = Session {
            conn: &conn,
            input: Cursor::new(b"Caf\xe9\nHistory\n".to_vec()),
            output: Vec::new(),
        };
        assert!(matches!(
            s.prompt_line("Enter class name: "),
            Err(ShellError::InvalidText { .. })
        ));
        assert_eq!(s.prompt_line("Enter class name: ").expect("line"), "History");
    }

    #[test]
    fn closed_input_is_end_of_input() {
        let conn = Connection::open_in_memory().expect("open");
        let mut s = session(&conn, "");
        assert!(matches!(
            s.prompt_line("choice: "),
            Err(ShellError::EndOfInput)
        ));
    }
}

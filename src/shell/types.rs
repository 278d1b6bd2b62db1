use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddClass,
    AddStudent,
    AddAssignment,
    RecordGrade,
    ClassGrade,
    ListGrades,
    DeleteGrade,
    EditGrade,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddClass),
            "2" => Some(Self::AddStudent),
            "3" => Some(Self::AddAssignment),
            "4" => Some(Self::RecordGrade),
            "5" => Some(Self::ClassGrade),
            "6" => Some(Self::ListGrades),
            "7" => Some(Self::DeleteGrade),
            "8" => Some(Self::EditGrade),
            "9" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// One interactive run: the open store plus the terminal it talks to.
pub struct Session<'a, R, W> {
    pub conn: &'a Connection,
    pub input: R,
    pub output: W,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_menu_numbers_with_whitespace() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddClass));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::ClassGrade));
        assert_eq!(MenuChoice::parse("9\r"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for raw in ["", "0", "10", "01", "one", "-1", "9.0"] {
            assert_eq!(MenuChoice::parse(raw), None, "{raw:?}");
        }
    }
}

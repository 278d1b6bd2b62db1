pub mod assignments;
pub mod classes;
pub mod grades;
pub mod students;

mod error;
mod handlers;
mod prompt;
mod router;
mod types;

pub use router::run;
pub use types::Session;

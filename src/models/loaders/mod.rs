pub mod csv_loader;

pub use csv_loader::{load_question_table, parse_question_table};

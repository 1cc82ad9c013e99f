pub mod answer;
pub mod loaders;
pub mod question;

pub use answer::AnswerRecord;
pub use loaders::{load_question_table, parse_question_table};
pub use question::{Bookmark, QuestionRecord, QuestionTable};

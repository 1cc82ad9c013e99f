pub mod answer_service;
pub mod bookmark_writer;
pub mod output_writer;

pub use answer_service::AnswerService;
pub use bookmark_writer::BookmarkWriter;
pub use output_writer::OutputWriter;

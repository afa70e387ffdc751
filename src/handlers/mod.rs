pub mod joke_handler;
pub mod study_handler;

pub use joke_handler::get_joke;
pub use study_handler::{
    check_answers, generate_quiz, health_check, quick_revision, summarize, weak_topic_revision,
};

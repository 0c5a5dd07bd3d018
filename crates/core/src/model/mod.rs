mod category;
mod ids;
mod question;

pub use category::{Category, CategoryError};
pub use ids::{ParseIdError, QuestionId};
pub use question::{Question, QuestionDraft, QuestionError};

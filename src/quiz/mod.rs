//! Linear multiple-choice quiz with scoring and feedback tiers

mod engine;
mod grading;
mod session;
mod widget;

pub use engine::{OptionState, OptionView, Quiz, QuizState, QuizView};
pub use grading::{percentage, FeedbackTier};
pub use session::QuizSession;
pub use widget::QuizWidget;

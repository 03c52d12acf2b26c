use std::collections::BTreeSet;

use serde::Serialize;

use super::grading::{percentage, FeedbackTier};
use crate::content::{Question, QuestionBank, OPTION_COUNT};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuizState {
    pub current_index: usize,
    pub selected_option: Option<usize>,
    pub revealed: bool,
    pub score: usize,
    pub answered: BTreeSet<usize>,
    pub complete: bool,
}

/// How an option should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionState {
    /// Not yet revealed, or revealed but neither chosen nor correct
    Neutral,
    /// Chosen but not yet revealed
    Selected,
    Correct,
    Incorrect,
}

/// Linear multiple-choice quiz over a question bank
#[derive(Debug, Clone)]
pub struct Quiz {
    bank: QuestionBank,
    state: QuizState,
}

impl Quiz {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            state: QuizState::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank.get(self.state.current_index)
    }

    /// Record an answer to the current question. Returns whether it was
    /// correct, or `None` if the call was not accepted.
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        if self.state.complete || self.state.revealed || option >= OPTION_COUNT {
            return None;
        }
        let index = self.state.current_index;
        if self.state.answered.contains(&index) {
            return None;
        }
        let correct = self.bank.get(index)?.is_correct(option);

        self.state.selected_option = Some(option);
        self.state.revealed = true;
        self.state.answered.insert(index);
        if correct {
            self.state.score += 1;
        }
        Some(correct)
    }

    /// Move past a revealed question. Returns whether the call was accepted.
    pub fn advance(&mut self) -> bool {
        if !self.state.revealed || self.state.complete {
            return false;
        }
        if self.state.current_index + 1 >= self.bank.len() {
            self.state.complete = true;
        } else {
            self.state.current_index += 1;
            self.state.selected_option = None;
            self.state.revealed = false;
        }
        true
    }

    pub fn reset(&mut self) {
        self.state = QuizState::default();
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index + 1 >= self.bank.len()
    }

    /// Share of the quiz done, counting a revealed question as finished
    pub fn progress_percent(&self) -> f32 {
        if self.bank.is_empty() {
            return 0.0;
        }
        let done = self.state.current_index + usize::from(self.state.revealed);
        done as f32 / self.bank.len() as f32 * 100.0
    }

    pub fn percentage(&self) -> u32 {
        percentage(self.state.score, self.bank.len())
    }

    /// Only defined once the quiz is complete
    pub fn feedback(&self) -> Option<FeedbackTier> {
        self.state
            .complete
            .then(|| FeedbackTier::from_percentage(self.percentage()))
    }

    pub fn option_state(&self, option: usize) -> OptionState {
        let selected = self.state.selected_option == Some(option);
        if !self.state.revealed {
            return if selected { OptionState::Selected } else { OptionState::Neutral };
        }
        match self.current_question() {
            Some(q) if q.is_correct(option) => OptionState::Correct,
            Some(_) if selected => OptionState::Incorrect,
            _ => OptionState::Neutral,
        }
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "See Results"
        } else {
            "Next Question"
        }
    }

    pub fn view(&self) -> QuizView<'_> {
        let question = self.current_question();
        QuizView {
            question_number: self.state.current_index + 1,
            total_questions: self.bank.len(),
            prompt: question.map(|q| q.prompt.as_str()),
            options: question
                .map(|q| {
                    q.options
                        .iter()
                        .enumerate()
                        .map(|(i, text)| OptionView { text, state: self.option_state(i) })
                        .collect()
                })
                .unwrap_or_default(),
            explanation: question
                .filter(|_| self.state.revealed)
                .map(|q| q.explanation.as_str()),
            advance_label: self.state.revealed.then(|| self.advance_label()),
            score: self.state.score,
            progress_percent: self.progress_percent(),
            complete: self.state.complete,
            percentage: self.state.complete.then(|| self.percentage()),
            feedback: self.feedback().map(|tier| tier.message()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OptionView<'a> {
    pub text: &'a str,
    pub state: OptionState,
}

/// Everything a front end needs to draw the quiz
#[derive(Debug, Serialize)]
pub struct QuizView<'a> {
    pub question_number: usize,
    pub total_questions: usize,
    pub prompt: Option<&'a str>,
    pub options: Vec<OptionView<'a>>,
    pub explanation: Option<&'a str>,
    pub advance_label: Option<&'static str>,
    pub score: usize,
    pub progress_percent: f32,
    pub complete: bool,
    pub percentage: Option<u32>,
    pub feedback: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::new(QuestionBank::builtin().unwrap())
    }

    fn correct_option(quiz: &Quiz) -> usize {
        quiz.current_question().unwrap().correct_option
    }

    fn wrong_option(quiz: &Quiz) -> usize {
        (correct_option(quiz) + 1) % OPTION_COUNT
    }

    fn assert_invariants(quiz: &Quiz) {
        let s = quiz.state();
        assert!(s.score <= s.answered.len());
        assert!(s.answered.len() <= s.current_index + 1);
        if s.revealed {
            assert!(s.selected_option.is_some());
        }
    }

    #[test]
    fn test_answer_then_repeat_is_noop() {
        let mut quiz = quiz();
        let right = correct_option(&quiz);
        assert_eq!(quiz.answer(right), Some(true));
        assert_eq!(quiz.state().score, 1);
        assert_eq!(quiz.answer(right), None);
        assert_eq!(quiz.answer(wrong_option(&quiz)), None);
        assert_eq!(quiz.state().score, 1);
        assert_invariants(&quiz);
    }

    #[test]
    fn test_advance_requires_reveal() {
        let mut quiz = quiz();
        assert!(!quiz.advance());
        assert_eq!(quiz.state().current_index, 0);
        quiz.answer(0);
        assert!(quiz.advance());
        assert_eq!(quiz.state().current_index, 1);
        assert!(!quiz.state().revealed);
        assert_eq!(quiz.state().selected_option, None);
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut quiz = quiz();
        assert_eq!(quiz.answer(OPTION_COUNT), None);
        assert!(!quiz.state().revealed);
    }

    #[test]
    fn test_full_run_four_of_five() {
        let mut quiz = quiz();
        for i in 0..5 {
            let option = if i == 2 { wrong_option(&quiz) } else { correct_option(&quiz) };
            quiz.answer(option);
            assert_invariants(&quiz);
            assert!(quiz.advance());
        }
        assert!(quiz.state().complete);
        assert_eq!(quiz.state().score, 4);
        assert_eq!(quiz.percentage(), 80);
        assert_eq!(quiz.feedback(), Some(FeedbackTier::Excellent));
        // completed quiz accepts nothing further
        assert_eq!(quiz.answer(0), None);
        assert!(!quiz.advance());
    }

    #[test]
    fn test_three_of_five_is_good() {
        let mut quiz = quiz();
        for i in 0..5 {
            let option = if i < 3 { correct_option(&quiz) } else { wrong_option(&quiz) };
            quiz.answer(option);
            quiz.advance();
        }
        assert_eq!(quiz.percentage(), 60);
        assert_eq!(quiz.feedback(), Some(FeedbackTier::Good));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut quiz = quiz();
        quiz.answer(correct_option(&quiz));
        quiz.advance();
        quiz.reset();
        assert_eq!(quiz.state(), &QuizState::default());
        assert_eq!(quiz.feedback(), None);
    }

    #[test]
    fn test_progress() {
        let mut quiz = quiz();
        assert_eq!(quiz.progress_percent(), 0.0);
        quiz.answer(0);
        assert!((quiz.progress_percent() - 20.0).abs() < 1e-4);
        quiz.advance();
        assert!((quiz.progress_percent() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_option_states_after_wrong_answer() {
        let mut quiz = quiz();
        let right = correct_option(&quiz);
        let wrong = wrong_option(&quiz);
        quiz.answer(wrong);
        assert_eq!(quiz.option_state(right), OptionState::Correct);
        assert_eq!(quiz.option_state(wrong), OptionState::Incorrect);
        let other = (0..OPTION_COUNT).find(|i| *i != right && *i != wrong).unwrap();
        assert_eq!(quiz.option_state(other), OptionState::Neutral);
    }

    #[test]
    fn test_labels() {
        let mut quiz = quiz();
        assert_eq!(quiz.advance_label(), "Next Question");
        for _ in 0..4 {
            quiz.answer(0);
            quiz.advance();
        }
        assert_eq!(quiz.advance_label(), "See Results");
    }

    #[test]
    fn test_view_hides_explanation_until_revealed() {
        let mut quiz = quiz();
        let view = quiz.view();
        assert_eq!(view.question_number, 1);
        assert_eq!(view.options.len(), OPTION_COUNT);
        assert!(view.explanation.is_none());
        assert!(view.advance_label.is_none());

        quiz.answer(0);
        let json = serde_json::to_value(quiz.view()).unwrap();
        assert!(json["explanation"].is_string());
        assert_eq!(json["advance_label"], "Next Question");
        assert_eq!(json["complete"], false);
    }
}

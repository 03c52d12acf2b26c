use super::engine::Quiz;
use crate::content::QuestionBank;
use crate::telemetry::{NullSink, TelemetryEvent, TelemetrySink};

/// A quiz plus the telemetry it reports
pub struct QuizSession {
    quiz: Quiz,
    telemetry: Box<dyn TelemetrySink>,
    started: bool,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            quiz: Quiz::new(bank),
            telemetry: Box::new(NullSink),
            started: false,
        }
    }

    pub fn set_telemetry(&mut self, sink: Box<dyn TelemetrySink>) {
        self.telemetry = sink;
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn answer(&mut self, option: usize) -> Option<bool> {
        let question_number = self.quiz.state().current_index + 1;
        let correct = self.quiz.answer(option)?;
        if !self.started {
            self.started = true;
            self.telemetry.emit(&TelemetryEvent::QuizStart);
        }
        self.telemetry.emit(&TelemetryEvent::QuizAnswer {
            question_number,
            is_correct: correct,
        });
        log::debug!("Question {} answered, correct: {}", question_number, correct);
        Some(correct)
    }

    pub fn advance(&mut self) -> bool {
        if !self.quiz.advance() {
            return false;
        }
        if self.quiz.state().complete {
            self.telemetry.emit(&TelemetryEvent::QuizComplete {
                score: self.quiz.state().score,
                total_questions: self.quiz.len(),
            });
        }
        true
    }

    /// Starts a fresh session; the next answer reports `quiz_start` again
    pub fn reset(&mut self) {
        self.quiz.reset();
        self.started = false;
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};

const QUIZ_YAML: &str = include_str!("../../content/quiz.yaml");

/// Every question offers exactly this many options
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

#[derive(Debug, Deserialize)]
struct QuizInput {
    questions: Vec<Question>,
}

/// Ordered, validated question list
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(ContentError::EmptyQuiz);
        }

        let mut seen = HashSet::new();
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(ContentError::DuplicateQuestion(q.id));
            }
            if q.correct_option >= OPTION_COUNT {
                return Err(ContentError::CorrectOptionOutOfRange {
                    id: q.id,
                    index: q.correct_option,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let input: QuizInput = serde_yaml::from_str(yaml)?;
        Self::new(input.questions)
    }

    pub fn builtin() -> Result<Self> {
        Self::from_yaml(QUIZ_YAML)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

use serde::Serialize;

/// `round(100 * score / total)`, 0 for an empty quiz
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * score as f64 / total as f64).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackTier {
    Excellent,
    Good,
    Review,
}

impl FeedbackTier {
    pub fn from_percentage(percent: u32) -> Self {
        match percent {
            80.. => FeedbackTier::Excellent,
            60..=79 => FeedbackTier::Good,
            _ => FeedbackTier::Review,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackTier::Excellent => "Excellent! You're a plant tissue expert!",
            FeedbackTier::Good => "Good job! Keep learning about plant biology.",
            FeedbackTier::Review => "Review the material and try again!",
        }
    }
}

//! Named interaction events forwarded to a host-provided callback.

use serde_json::{json, Value};
use wasm_bindgen::JsValue;

use crate::content::TreePart;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Click,
    Hover,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Click => "click",
            InteractionKind::Hover => "hover",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelemetryEvent {
    TreeInteraction { part: TreePart, kind: InteractionKind },
    QuizStart,
    /// `question_number` is 1-based
    QuizAnswer { question_number: usize, is_correct: bool },
    QuizComplete { score: usize, total_questions: usize },
}

impl TelemetryEvent {
    pub fn name(&self) -> &'static str {
        match self {
            TelemetryEvent::TreeInteraction { .. } => "tree_interaction",
            TelemetryEvent::QuizStart => "quiz_start",
            TelemetryEvent::QuizAnswer { .. } => "quiz_answer",
            TelemetryEvent::QuizComplete { .. } => "quiz_complete",
        }
    }

    pub fn attributes(&self) -> Value {
        match self {
            TelemetryEvent::TreeInteraction { part, kind } => json!({
                "tree_part": part.as_str(),
                "interaction_type": kind.as_str(),
                "event_category": "3d_model",
            }),
            TelemetryEvent::QuizStart => json!({ "event_category": "quiz" }),
            TelemetryEvent::QuizAnswer { question_number, is_correct } => json!({
                "event_category": "quiz",
                "question_number": question_number,
                "is_correct": is_correct,
            }),
            TelemetryEvent::QuizComplete { score, total_questions } => json!({
                "event_category": "quiz",
                "score": score,
                "total_questions": total_questions,
            }),
        }
    }
}

/// Destination for telemetry events. Delivery failures never reach the caller.
pub trait TelemetrySink {
    fn emit(&mut self, event: &TelemetryEvent);
}

/// Drops every event
#[derive(Debug, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn emit(&mut self, _event: &TelemetryEvent) {}
}

/// Keeps events in memory, oldest first
#[derive(Debug, Default)]
pub struct MemorySink {
    events: std::rc::Rc<std::cell::RefCell<Vec<TelemetryEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the recorded events, usable after the sink is boxed
    pub fn events(&self) -> std::rc::Rc<std::cell::RefCell<Vec<TelemetryEvent>>> {
        std::rc::Rc::clone(&self.events)
    }
}

impl TelemetrySink for MemorySink {
    fn emit(&mut self, event: &TelemetryEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Calls a JavaScript `fn(name, attributes_json)`
pub struct JsCallbackSink {
    callback: js_sys::Function,
}

impl JsCallbackSink {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl TelemetrySink for JsCallbackSink {
    fn emit(&mut self, event: &TelemetryEvent) {
        let name = JsValue::from_str(event.name());
        let attributes = JsValue::from_str(&event.attributes().to_string());
        if let Err(err) = self.callback.call2(&JsValue::NULL, &name, &attributes) {
            log::warn!("Telemetry callback failed for {}: {:?}", event.name(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_interaction_attributes() {
        let event = TelemetryEvent::TreeInteraction {
            part: TreePart::Leaves,
            kind: InteractionKind::Hover,
        };
        assert_eq!(event.name(), "tree_interaction");
        let attrs = event.attributes();
        assert_eq!(attrs["tree_part"], "leaves");
        assert_eq!(attrs["interaction_type"], "hover");
        assert_eq!(attrs["event_category"], "3d_model");
    }

    #[test]
    fn test_quiz_attributes() {
        let answer = TelemetryEvent::QuizAnswer { question_number: 2, is_correct: true };
        assert_eq!(answer.name(), "quiz_answer");
        assert_eq!(answer.attributes()["question_number"], 2);
        assert_eq!(answer.attributes()["is_correct"], true);

        let done = TelemetryEvent::QuizComplete { score: 4, total_questions: 5 };
        assert_eq!(done.name(), "quiz_complete");
        assert_eq!(done.attributes()["total_questions"], 5);
        assert_eq!(TelemetryEvent::QuizStart.attributes()["event_category"], "quiz");
    }

    #[test]
    fn test_memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        let events = sink.events();
        sink.emit(&TelemetryEvent::QuizStart);
        sink.emit(&TelemetryEvent::QuizComplete { score: 1, total_questions: 5 });
        assert_eq!(events.borrow().len(), 2);
        assert_eq!(events.borrow()[0], TelemetryEvent::QuizStart);
    }
}

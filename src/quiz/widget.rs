use wasm_bindgen::prelude::*;

use super::session::QuizSession;
use crate::content::QuestionBank;
use crate::telemetry::JsCallbackSink;

/// Quiz exported to JavaScript
#[wasm_bindgen]
pub struct QuizWidget {
    session: QuizSession,
}

#[wasm_bindgen]
impl QuizWidget {
    /// Quiz over the built-in question bank
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<QuizWidget, JsValue> {
        let bank = QuestionBank::builtin()?;
        log::info!("Quiz loaded with {} questions", bank.len());
        Ok(Self { session: QuizSession::new(bank) })
    }

    /// Quiz over an authored YAML question list
    pub fn from_yaml(yaml: &str) -> Result<QuizWidget, JsValue> {
        let bank = QuestionBank::from_yaml(yaml)?;
        Ok(Self { session: QuizSession::new(bank) })
    }

    /// `callback(name, attributes_json)` receives quiz events
    pub fn set_telemetry(&mut self, callback: js_sys::Function) {
        self.session.set_telemetry(Box::new(JsCallbackSink::new(callback)));
    }

    /// `true`/`false` for an accepted answer, `undefined` if ignored
    pub fn answer(&mut self, option: usize) -> Option<bool> {
        self.session.answer(option)
    }

    pub fn advance(&mut self) -> bool {
        self.session.advance()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn is_complete(&self) -> bool {
        self.session.quiz().state().complete
    }

    pub fn score(&self) -> usize {
        self.session.quiz().state().score
    }

    pub fn progress_percent(&self) -> f32 {
        self.session.quiz().progress_percent()
    }

    /// Current view model as JSON
    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.quiz().view())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

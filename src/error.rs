//! Errors raised while loading authored content and configuration

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::content::{CellType, TreePart};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("quiz has no questions")]
    EmptyQuiz,

    #[error("duplicate question id {0}")]
    DuplicateQuestion(u32),

    #[error("question {id}: correct option {index} is out of range")]
    CorrectOptionOutOfRange { id: u32, index: usize },

    #[error("no overlay defined for tree part '{0}'")]
    MissingPart(TreePart),

    #[error("no entry for cell type '{0}'")]
    MissingCellType(CellType),

    #[error("unknown tree part '{0}'")]
    UnknownPart(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("{0} list is empty")]
    Empty(&'static str),

    #[error("duplicate id '{0}'")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;

impl From<ContentError> for JsValue {
    fn from(err: ContentError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

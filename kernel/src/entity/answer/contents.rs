use serde::Serialize;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct AnswerContents(String);

impl AnswerContents {
    pub fn new(contents: impl Into<String>) -> Self {
        Self(contents.into())
    }
}

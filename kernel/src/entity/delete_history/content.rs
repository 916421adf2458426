use serde::{Deserialize, Serialize};

use crate::entity::{AnswerId, QuestionId};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DeletedContent {
    Question(QuestionId),
    Answer(AnswerId),
}

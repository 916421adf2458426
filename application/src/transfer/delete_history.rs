use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DeleteHistory, DeletedContent, DestructDeleteHistory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Question,
    Answer,
}

#[derive(Debug, Clone)]
pub struct DeleteHistoryDto {
    pub id: Uuid,
    pub content_type: ContentType,
    pub content_id: Uuid,
    pub deleted_by: Uuid,
    pub created_at: OffsetDateTime,
}

impl From<DeleteHistory> for DeleteHistoryDto {
    fn from(value: DeleteHistory) -> Self {
        let DestructDeleteHistory {
            id,
            content,
            deleted_by,
            created_at,
        } = value.into_destruct();
        let (content_type, content_id) = match content {
            DeletedContent::Question(id) => (ContentType::Question, id.into()),
            DeletedContent::Answer(id) => (ContentType::Answer, id.into()),
        };
        Self {
            id: id.into(),
            content_type,
            content_id,
            deleted_by: deleted_by.into(),
            created_at: created_at.into(),
        }
    }
}

pub struct GetDeleteHistoryDto {
    pub deleted_by: Uuid,
}

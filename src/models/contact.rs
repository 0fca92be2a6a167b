use crate::entities::{feedback_entity, query_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub name: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct QueryRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub ok: bool,
    #[schema(example = "Feedback stored")]
    pub msg: String,
}

impl SubmitResponse {
    pub fn stored(msg: &str) -> Self {
        Self {
            ok: true,
            msg: msg.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedbackResponse {
    pub id: i32,
    pub name: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<feedback_entity::Model> for FeedbackResponse {
    fn from(m: feedback_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryResponse {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<query_entity::Model> for QueryResponse {
    fn from(m: query_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            message: m.message,
            created_at: m.created_at,
        }
    }
}

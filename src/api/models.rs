use serde::{Deserialize, Serialize};

use crate::problems::problem::ProblemId;

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    pub message: String,
    /// Feedback entries retained by the server (it keeps the newest 20)
    #[serde(default)]
    pub total_feedbacks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitCount {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest<'a> {
    pub problem_id: ProblemId,
    pub user_id: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorited: bool,
}

/// `{ "message": ... }` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// `{ "error": ... }` body the backend sends with failure statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

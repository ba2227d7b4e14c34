//! Normalized post model returned to the dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A LinkedIn post translated into the dashboard's stable shape.
///
/// Every field is always present: missing provider data maps to an empty
/// string, a placeholder image, or a zero count. Nothing here is persisted;
/// the struct lives only for one request/response cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPost {
    /// LinkedIn-assigned post identifier (opaque)
    pub id: String,
    /// Plain-text body, empty if the post has no commentary
    pub content: String,
    /// Best-effort media URL, placeholder when the post carries none
    pub image_url: String,
    pub impressions: u64,
    pub comments: u64,
    pub shares: u64,
    pub reactions: ReactionCounts,
    /// Calendar date the post was created
    pub date: NaiveDate,
}

/// Per-type reaction counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: u64,
    pub celebrations: u64,
    pub loves: u64,
    pub insights: u64,
    pub funny: u64,
}

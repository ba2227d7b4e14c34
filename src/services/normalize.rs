// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Translation of LinkedIn post payloads into [`NormalizedPost`].
//!
//! LinkedIn has shipped several post representations over the years (the
//! versioned `/rest/posts` shape and the older UGC shape), with different
//! field paths for commentary, media, and timestamps. Each shape gets its
//! own mapper here so the fetch orchestration never has to know which one
//! is in play.

use crate::models::{NormalizedPost, ReactionCounts};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Fallback media URL for posts without any usable media reference.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/600x400?text=Post";

/// Provider post shape, selected from the configured API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostShape {
    /// Versioned REST shape (`/rest/posts`, `commentary` / `createdAt`)
    Rest,
    /// Legacy UGC shape (`specificContent` / `created.time`)
    Ugc,
}

impl PostShape {
    /// Pick the mapper for a configured `LinkedIn-Version` value. Unknown
    /// versions use the current REST shape.
    pub fn for_version(version: &str) -> Self {
        match version {
            "ugc" => Self::Ugc,
            _ => Self::Rest,
        }
    }

    /// Translate one raw provider post into the dashboard shape.
    ///
    /// The output is always complete: absent commentary becomes an empty
    /// string, absent media the placeholder URL, and absent counts explicit
    /// zeros. Listing responses carry no engagement counts at all, so the
    /// metric and reaction fields are zeros for every shape.
    pub fn map(&self, raw: &Value) -> NormalizedPost {
        match self {
            Self::Rest => map_rest(raw),
            Self::Ugc => map_ugc(raw),
        }
    }
}

fn map_rest(raw: &Value) -> NormalizedPost {
    NormalizedPost {
        id: string_at(raw, "/id"),
        content: string_at(raw, "/commentary"),
        image_url: image_url([
            raw.pointer("/content/article/thumbnail"),
            raw.pointer("/content/media/id"),
        ]),
        impressions: 0,
        comments: 0,
        shares: 0,
        reactions: ReactionCounts::default(),
        date: date_from_millis(raw.pointer("/createdAt").and_then(Value::as_i64)),
    }
}

fn map_ugc(raw: &Value) -> NormalizedPost {
    let share = "/specificContent/com.linkedin.ugc.ShareContent";
    NormalizedPost {
        id: string_at(raw, "/id"),
        content: string_at(raw, &format!("{share}/shareCommentary/text")),
        image_url: image_url([
            raw.pointer(&format!("{share}/media/0/originalUrl")),
            raw.pointer(&format!("{share}/media/0/thumbnails/0/url")),
        ]),
        impressions: 0,
        comments: 0,
        shares: 0,
        reactions: ReactionCounts::default(),
        date: date_from_millis(raw.pointer("/created/time").and_then(Value::as_i64)),
    }
}

fn string_at(raw: &Value, pointer: &str) -> String {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// First candidate that is an absolute URL wins; anything else (media URNs,
/// missing fields) falls back to the placeholder.
fn image_url<'a>(candidates: impl IntoIterator<Item = Option<&'a Value>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| s.starts_with("http"))
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string())
}

fn date_from_millis(millis: Option<i64>) -> NaiveDate {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .date_naive()
}

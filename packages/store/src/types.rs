use serde::{Deserialize, Serialize};

/// Partition of the catalogue into two independently paginated collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    LongForm,
    ShortForm,
}

impl MediaKind {
    /// Collection id in the document store.
    pub fn collection(&self) -> &'static str {
        match self {
            MediaKind::LongForm => "videos",
            MediaKind::ShortForm => "shorts",
        }
    }

    /// Value of the `type` field on stored documents.
    pub fn as_db(&self) -> &'static str {
        match self {
            MediaKind::LongForm => "video",
            MediaKind::ShortForm => "short",
        }
    }

    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "video" => Some(MediaKind::LongForm),
            "short" => Some(MediaKind::ShortForm),
            _ => None,
        }
    }

    /// Records fetched per page for this collection.
    pub fn page_size(&self) -> usize {
        match self {
            MediaKind::LongForm => 12,
            MediaKind::ShortForm => 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub view_count_label: String,
    pub upload_time_label: String,
    pub thumbnail_url: String,
    pub channel_avatar_url: String,
    pub duration_label: String,
    pub kind: MediaKind,
}

/// Store-native position marker of a previously returned record.
///
/// Opaque to callers: only the store that produced it knows how to resume
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    pub(crate) document: String,
    pub(crate) marker: serde_json::Value,
}

impl Cursor {
    pub(crate) fn new(document: impl Into<String>, marker: serde_json::Value) -> Self {
        Self {
            document: document.into(),
            marker,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub kind: MediaKind,
    pub limit: usize,
    pub after: Option<Cursor>,
}

impl PageQuery {
    pub fn first(kind: MediaKind) -> Self {
        Self {
            kind,
            limit: kind.page_size(),
            after: None,
        }
    }

    pub fn after(kind: MediaKind, cursor: Cursor) -> Self {
        Self {
            kind,
            limit: kind.page_size(),
            after: Some(cursor),
        }
    }
}

/// One page of records plus the marker of its last record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub records: Vec<MediaRecord>,
    pub cursor: Option<Cursor>,
}

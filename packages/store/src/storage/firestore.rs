use super::DocumentStore;
use crate::config::FirestoreConfig;
use crate::error::StoreError;
use crate::types::{Cursor, MediaKind, MediaRecord, Page, PageQuery};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;

const PUBLIC_ENDPOINT: &str = "https://firestore.googleapis.com";

/// Cloud Firestore over its REST `runQuery` endpoint (production).
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    http: reqwest::Client,
    base_url: String,
    database_path: String,
    api_key: Option<String>,
    order_field: String,
}

impl FirestoreClient {
    pub fn new(config: &FirestoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder().build()?;
        let base_url = match &config.emulator_host {
            Some(host) => format!("http://{}", host.trim_end_matches('/')),
            None => PUBLIC_ENDPOINT.to_string(),
        };
        Ok(Self {
            http,
            base_url,
            database_path: format!(
                "projects/{}/databases/{}",
                config.project_id, config.database_id
            ),
            api_key: config.api_key.clone(),
            order_field: config.order_field.clone(),
        })
    }

    fn run_query_url(&self) -> String {
        let url = format!("{}/v1/{}/documents:runQuery", self.base_url, self.database_path);
        match &self.api_key {
            Some(key) => format!("{url}?key={key}"),
            None => url,
        }
    }

    fn build_request(&self, query: &PageQuery) -> RunQueryRequest {
        let order = |field: &str| Order {
            field: FieldReference {
                field_path: field.to_string(),
            },
            direction: "DESCENDING",
        };

        // startAt with before=false resumes strictly after the given position.
        let start_at = query.after.as_ref().map(|cursor| QueryCursor {
            values: vec![cursor.marker.clone(), json!({ "referenceValue": cursor.document })],
            before: false,
        });

        RunQueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: query.kind.collection().to_string(),
                }],
                order_by: vec![order(&self.order_field), order("__name__")],
                start_at,
                limit: query.limit,
            },
        }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreClient {
    async fn list(&self, query: PageQuery) -> Result<Page, StoreError> {
        tracing::debug!(
            "store.firestore.list: collection={} limit={} after={}",
            query.kind.collection(),
            query.limit,
            query.after.is_some()
        );

        let response = self
            .http
            .post(self.run_query_url())
            .json(&self.build_request(&query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let page = decode_page(query.kind, &self.order_field, &body)?;
        tracing::debug!(
            "store.firestore.list: collection={} returned={}",
            query.kind.collection(),
            page.records.len()
        );
        Ok(page)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest {
    structured_query: StructuredQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    order_by: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_at: Option<QueryCursor>,
    limit: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Debug, Serialize)]
struct Order {
    field: FieldReference,
    direction: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

#[derive(Debug, Serialize)]
struct QueryCursor {
    values: Vec<Value>,
    before: bool,
}

/// One element of the streamed `runQuery` answer. Elements carrying only a
/// `readTime` (an empty result) have no document.
#[derive(Debug, Deserialize)]
struct RunQueryItem {
    #[serde(default)]
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: HashMap<String, Value>,
}

fn decode_page(kind: MediaKind, order_field: &str, body: &str) -> Result<Page, StoreError> {
    let items: Vec<RunQueryItem> =
        serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))?;

    let documents: Vec<Document> = items.into_iter().filter_map(|item| item.document).collect();

    let cursor = documents.last().map(|doc| {
        let marker = doc
            .fields
            .get(order_field)
            .cloned()
            .unwrap_or_else(|| json!({ "nullValue": null }));
        Cursor::new(doc.name.clone(), marker)
    });

    let records = documents
        .iter()
        .map(|doc| decode_record(kind, doc))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page { records, cursor })
}

fn decode_record(kind: MediaKind, doc: &Document) -> Result<MediaRecord, StoreError> {
    let id = doc
        .name
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| StoreError::Decode(format!("document name {:?} has no id", doc.name)))?;

    if let Some(stored) = doc.fields.get("type").map(scalar_text) {
        if MediaKind::from_db(&stored) != Some(kind) {
            tracing::warn!(
                "store.firestore.decode: id={} type={:?} listed from {}",
                id,
                stored,
                kind.collection()
            );
        }
    }

    let text = |key: &str| doc.fields.get(key).map(scalar_text).unwrap_or_default();

    Ok(MediaRecord {
        id: id.to_string(),
        title: text("title"),
        channel_name: text("channel"),
        view_count_label: text("views"),
        upload_time_label: text("uploadTime"),
        thumbnail_url: text("thumbnail"),
        channel_avatar_url: text("channelAvatar"),
        duration_label: text("duration"),
        kind,
    })
}

/// Display text of a typed Firestore value; non-scalar values render empty.
fn scalar_text(value: &Value) -> String {
    let Some(obj) = value.as_object() else {
        return String::new();
    };
    for key in ["stringValue", "integerValue", "timestampValue"] {
        if let Some(s) = obj.get(key).and_then(Value::as_str) {
            return s.to_string();
        }
    }
    if let Some(n) = obj.get("doubleValue").and_then(Value::as_f64) {
        return n.to_string();
    }
    String::new()
}

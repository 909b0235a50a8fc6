// Generic row-oriented client for the hosted store (PostgREST). Every
// repository in this app goes through it: filtered select, insert,
// update-by-id, delete-by-id and exact counts over the four named
// collections. No caching, no optimistic writes, no retry.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use urlencoding::encode;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store rejected request: {status} {body}")]
    Backend { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("row not found")]
    NotFound,
    #[error("expected at most one row, got {0}")]
    MultipleRows(usize),
    #[error("store returned no exact count")]
    MissingCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Profiles,
    Complaints,
    Rooms,
    UserRoles,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::Profiles => "profiles",
            Collection::Complaints => "complaints",
            Collection::Rooms => "rooms",
            Collection::UserRoles => "user_roles",
        }
    }
}

/// Builds the select URL: `?select=*`, one `column=eq.value` pair per
/// filter, optional `order=` clause.
fn select_url(base: &str, collection: Collection, filters: &[(&str, String)], order: Option<&str>) -> String {
    let mut url = format!("{}/{}?select=*", base, collection.as_str());
    for (column, value) in filters {
        url.push_str(&format!("&{}=eq.{}", column, encode(value)));
    }
    if let Some(order) = order {
        url.push_str(&format!("&order={}", order));
    }
    url
}

/// Builds the update URL: the id match plus one `column=eq.value` guard
/// per extra filter.
fn update_url(base: &str, collection: Collection, id: Uuid, filters: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}?id=eq.{}", base, collection.as_str(), id);
    for (column, value) in filters {
        url.push_str(&format!("&{}=eq.{}", column, encode(value)));
    }
    url
}

#[derive(Clone)]
pub struct RecordStore {
    client: Client,
    base_url: String,
    service_role_key: String,
}

impl RecordStore {
    pub fn new(client: Client, supabase_url: &str, service_role_key: String) -> Self {
        Self {
            client,
            base_url: format!("{}/rest/v1", supabase_url.trim_end_matches('/')),
            service_role_key,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Ok(key) = HeaderValue::from_str(&self.service_role_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.service_role_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        headers
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.base_url, collection.as_str())
    }

    /// Fetch rows matching every filter, optionally ordered
    /// (e.g. `created_at.desc`).
    pub async fn select<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filters: &[(&str, String)],
        order: Option<&str>,
    ) -> Result<Vec<T>, StoreError> {
        let url = select_url(&self.base_url, collection, filters, order);
        let resp = self.client.get(&url).headers(self.headers()).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// Like `select`, but the filters are expected to match at most one row.
    /// More than one match is an error state, not a choice.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filters: &[(&str, String)],
    ) -> Result<Option<T>, StoreError> {
        let mut rows: Vec<T> = self.select(collection, filters, None).await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop()),
            n => Err(StoreError::MultipleRows(n)),
        }
    }

    /// Insert one row and return the created representation.
    pub async fn insert<T: DeserializeOwned, B: Serialize>(
        &self,
        collection: Collection,
        row: &B,
    ) -> Result<T, StoreError> {
        let resp = self
            .client
            .post(self.collection_url(collection))
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        self.single_row_response(resp).await
    }

    /// Patch the row with the given id and return the updated representation.
    pub async fn update<T: DeserializeOwned, B: Serialize>(
        &self,
        collection: Collection,
        id: Uuid,
        patch: &B,
    ) -> Result<T, StoreError> {
        self.update_where(collection, id, &[], patch).await
    }

    /// Patch the row with the given id, guarded by extra filters the row
    /// must still match. The store applies filter and patch in one
    /// request, so a guard on the current value makes the update a
    /// compare-and-swap: a row that no longer matches is left untouched
    /// and reported as `NotFound`.
    pub async fn update_where<T: DeserializeOwned, B: Serialize>(
        &self,
        collection: Collection,
        id: Uuid,
        filters: &[(&str, String)],
        patch: &B,
    ) -> Result<T, StoreError> {
        let url = update_url(&self.base_url, collection, id, filters);
        let resp = self
            .client
            .patch(&url)
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .json(patch)
            .send()
            .await?;
        self.single_row_response(resp).await
    }

    /// Delete the row with the given id. Deleting a missing row reports
    /// `NotFound` so callers can surface it.
    pub async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), StoreError> {
        let url = format!("{}?id=eq.{}", self.collection_url(collection), id);
        let resp = self
            .client
            .delete(&url)
            .headers(self.headers())
            .header("Prefer", "return=representation")
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        let deleted: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        if deleted.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// Exact row count for the filtered collection without transferring
    /// rows. The count comes back in the `content-range` header.
    pub async fn count(&self, collection: Collection, filters: &[(&str, String)]) -> Result<u64, StoreError> {
        let url = select_url(&self.base_url, collection, filters, None);
        let resp = self
            .client
            .get(&url)
            .headers(self.headers())
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        let content_range = resp
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .ok_or(StoreError::MissingCount)?;
        parse_content_range_total(content_range).ok_or(StoreError::MissingCount)
    }

    async fn single_row_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, StoreError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(StoreError::Backend {
                status: status.as_u16(),
                body,
            });
        }
        let mut rows: Vec<T> = serde_json::from_str(&body)?;
        if rows.is_empty() {
            return Err(StoreError::NotFound);
        }
        Ok(rows.remove(0))
    }
}

/// `content-range` looks like `0-0/42` (or `*/0` on an empty collection);
/// the total sits after the slash.
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_url_with_filters_and_order() {
        let url = select_url(
            "https://x.supabase.co/rest/v1",
            Collection::Complaints,
            &[("user_id", "abc-123".to_string())],
            Some("created_at.desc"),
        );
        assert_eq!(
            url,
            "https://x.supabase.co/rest/v1/complaints?select=*&user_id=eq.abc-123&order=created_at.desc"
        );
    }

    #[test]
    fn select_url_encodes_filter_values() {
        let url = select_url(
            "https://x.supabase.co/rest/v1",
            Collection::Rooms,
            &[("room_number", "A 12".to_string())],
            None,
        );
        assert!(url.ends_with("rooms?select=*&room_number=eq.A%2012"));
    }

    #[test]
    fn collection_names_match_store_tables() {
        assert_eq!(Collection::Profiles.as_str(), "profiles");
        assert_eq!(Collection::Complaints.as_str(), "complaints");
        assert_eq!(Collection::Rooms.as_str(), "rooms");
        assert_eq!(Collection::UserRoles.as_str(), "user_roles");
    }

    #[test]
    fn update_url_carries_guard_filters() {
        let id = Uuid::parse_str("7f4df6ad-4f3c-44ee-b8c8-63e567c88e63").unwrap();
        let url = update_url(
            "https://x.supabase.co/rest/v1",
            Collection::Complaints,
            id,
            &[("status", "pending".to_string())],
        );
        assert_eq!(
            url,
            "https://x.supabase.co/rest/v1/complaints?id=eq.7f4df6ad-4f3c-44ee-b8c8-63e567c88e63&status=eq.pending"
        );
    }

    #[test]
    fn update_url_without_filters_matches_id_only() {
        let id = Uuid::parse_str("7f4df6ad-4f3c-44ee-b8c8-63e567c88e63").unwrap();
        let url = update_url("https://x.supabase.co/rest/v1", Collection::Rooms, id, &[]);
        assert_eq!(
            url,
            "https://x.supabase.co/rest/v1/rooms?id=eq.7f4df6ad-4f3c-44ee-b8c8-63e567c88e63"
        );
    }

    #[test]
    fn content_range_total_parses() {
        assert_eq!(parse_content_range_total("0-0/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}

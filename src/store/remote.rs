//! Hosted backend storage over a PostgREST-style `assets` table.
//!
//! Server rows use snake_case column names; the client shape is
//! camelCase. The mapping happens here, at the store boundary, in both
//! directions. `persist` replaces the whole collection: upsert every
//! record, then prune rows absent from the new collection, matching the
//! flat-bag semantics of the local store.

use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::asset::Asset;
use crate::config::SecureString;
use crate::store::{AssetStore, StoreError};

/// Column pairs mapped at the boundary (server, client).
const FIELD_MAP: [(&str, &str); 3] = [
    ("serial_number", "serialNumber"),
    ("purchase_date", "purchaseDate"),
    ("user_id", "userId"),
];

/// Server-managed columns stripped from rows on read.
const SERVER_COLUMNS: [&str; 1] = ["created_at"];

pub struct RemoteStore {
    http: Client,
    base_url: String,
    api_key: SecureString,
    /// Bearer token for the signed-in user, when a session exists.
    access_token: Option<SecureString>,
    /// Scope all reads and writes to this owner when present.
    user_id: Option<Uuid>,
}

impl RemoteStore {
    pub fn new(base_url: String, api_key: SecureString) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            access_token: None,
            user_id: None,
        }
    }

    /// Attach the signed-in user's session so requests run under their
    /// identity and rows are scoped to their ownership.
    pub fn with_session(mut self, access_token: SecureString, user_id: Uuid) -> Self {
        self.access_token = Some(access_token);
        self.user_id = Some(user_id);
        self
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/assets", self.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .access_token
            .as_ref()
            .unwrap_or(&self.api_key)
            .expose();
        req.header("apikey", self.api_key.expose())
            .header("Authorization", format!("Bearer {}", bearer))
    }

    /// Turn a non-success response into the backend's own message,
    /// forwarded verbatim.
    async fn backend_error(response: reqwest::Response) -> StoreError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| format!("Backend returned status {}", status.as_u16()));
        StoreError::Backend(message)
    }
}

/// Rename keys present in `row` according to `pairs`, dropping columns
/// the client has no use for.
fn remap(mut value: Value, pairs: &[(&str, &str)], drop: &[&str]) -> Value {
    if let Some(obj) = value.as_object_mut() {
        for (from, to) in pairs {
            if let Some(v) = obj.remove(*from) {
                obj.insert((*to).to_string(), v);
            }
        }
        for column in drop {
            obj.remove(*column);
        }
    }
    value
}

fn row_to_record(row: Value) -> Value {
    remap(row, &FIELD_MAP, &SERVER_COLUMNS)
}

fn record_to_row(record: Value) -> Value {
    let inverse: Vec<(&str, &str)> = FIELD_MAP.iter().map(|(s, c)| (*c, *s)).collect();
    remap(record, &inverse, &[])
}

impl AssetStore for RemoteStore {
    async fn load(&self) -> Result<Vec<Value>, StoreError> {
        let url = self.table_url();
        let mut req = self
            .http
            .get(&url)
            .query(&[("select", "*"), ("order", "purchase_date.asc")]);
        if let Some(user_id) = self.user_id {
            req = req.query(&[("user_id", format!("eq.{}", user_id))]);
        }

        let response = self
            .authed(req)
            .send()
            .await
            .map_err(|e| StoreError::Http {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }

        let rows: Vec<Value> = response.json().await.map_err(|e| StoreError::Http {
            url,
            source: e,
        })?;

        Ok(rows.into_iter().map(row_to_record).collect())
    }

    async fn persist(&self, assets: &[Asset]) -> Result<(), StoreError> {
        let url = self.table_url();

        if !assets.is_empty() {
            let rows: Vec<Value> = assets
                .iter()
                .map(|asset| {
                    serde_json::to_value(asset)
                        .map(record_to_row)
                        .map_err(|e| StoreError::Backend(e.to_string()))
                })
                .collect::<Result<_, _>>()?;

            let req = self
                .http
                .post(&url)
                .query(&[("on_conflict", "id")])
                .header("Prefer", "resolution=merge-duplicates")
                .json(&rows);

            let response = self
                .authed(req)
                .send()
                .await
                .map_err(|e| StoreError::Http {
                    url: url.clone(),
                    source: e,
                })?;

            if !response.status().is_success() {
                return Err(Self::backend_error(response).await);
            }
        }

        // Prune rows that are no longer in the collection.
        let keep: Vec<String> = assets.iter().map(|a| a.id.to_string()).collect();
        let filter = if keep.is_empty() {
            "not.is.null".to_string()
        } else {
            format!("not.in.({})", keep.join(","))
        };
        let mut req = self.http.delete(&url).query(&[("id", filter)]);
        if let Some(user_id) = self.user_id {
            req = req.query(&[("user_id", format!("eq.{}", user_id))]);
        }

        let response = self
            .authed(req)
            .send()
            .await
            .map_err(|e| StoreError::Http {
                url: url.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(Self::backend_error(response).await);
        }

        tracing::debug!(count = assets.len(), "persisted inventory to hosted backend");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_mapping_renames_snake_case_columns() {
        let row = json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Test Laptop",
            "serial_number": "SN-123",
            "purchase_date": "2023-01-01T00:00:00Z",
            "created_at": "2023-01-01T00:00:00Z",
        });
        let record = row_to_record(row);
        assert_eq!(record["serialNumber"], "SN-123");
        assert_eq!(record["purchaseDate"], "2023-01-01T00:00:00Z");
        assert!(record.get("created_at").is_none());
        assert!(record.get("serial_number").is_none());
    }

    #[test]
    fn record_mapping_is_inverse_of_row_mapping() {
        let record = json!({
            "name": "Test Laptop",
            "serialNumber": "SN-123",
            "purchaseDate": "2023-01-01T00:00:00Z",
            "userId": "550e8400-e29b-41d4-a716-446655440000",
        });
        let row = record_to_row(record);
        assert_eq!(row["serial_number"], "SN-123");
        assert_eq!(row["purchase_date"], "2023-01-01T00:00:00Z");
        assert_eq!(row["user_id"], "550e8400-e29b-41d4-a716-446655440000");
        assert!(row.get("serialNumber").is_none());
    }
}

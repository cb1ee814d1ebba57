//! Supabase boundary adapters: GoTrue admin API and PostgREST.
//!
//! Every non-2xx response is classified from the structured error body
//! (GoTrue `error_code`, PostgREST SQLSTATE `code`) plus the status, so
//! stage logic never inspects message text.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use folio_domain::identity::IdentityRecord;

use crate::domain::ports::{AuthAdmin, DirectoryEntry, NewAccount, TableStore};
use crate::error::ApiError;

/// HTTP client for one Supabase project, authenticated with the
/// service-role key on both the auth and REST surfaces.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    service_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, service_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            service_key: service_key.to_owned(),
        }
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(classify_response(status, &body))
    }
}

// ── Wire shapes ──────────────────────────────────────────────────────────────

/// User object returned by the GoTrue admin endpoints.
#[derive(Debug, Deserialize)]
struct AdminUser {
    id: Uuid,
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

impl AdminUser {
    fn display_name(&self) -> Option<String> {
        self.user_metadata
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    }
}

#[derive(Debug, Deserialize)]
struct UserList {
    users: Vec<AdminUser>,
}

/// Error body shared by both services. GoTrue sets `error_code` and `msg`;
/// PostgREST sets a SQLSTATE string in `code` and a `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

fn classify_response(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let detail = parsed
        .msg
        .or(parsed.message)
        .unwrap_or_else(|| format!("HTTP {status}"));
    let code = parsed
        .error_code
        .or_else(|| parsed.code.as_ref().and_then(|v| v.as_str()).map(str::to_owned));

    // Service error codes are more precise than the status; PostgREST
    // reports both duplicate keys and FK violations as 409.
    match code.as_deref() {
        Some("email_exists" | "phone_exists" | "user_already_exists" | "23505") => {
            return ApiError::AlreadyExists(detail);
        }
        Some("23502" | "23503" | "22P02") => return ApiError::SchemaViolation(detail),
        _ => {}
    }

    if status == StatusCode::CONFLICT {
        ApiError::AlreadyExists(detail)
    } else if status == StatusCode::REQUEST_TIMEOUT
        || status == StatusCode::TOO_MANY_REQUESTS
        || status.is_server_error()
    {
        ApiError::TransientNetwork(detail)
    } else {
        ApiError::Unknown(detail)
    }
}

fn classify_transport(err: reqwest::Error) -> ApiError {
    ApiError::TransientNetwork(err.to_string())
}

// ── AuthAdmin ────────────────────────────────────────────────────────────────

impl AuthAdmin for SupabaseClient {
    async fn create_user(&self, account: &NewAccount<'_>) -> Result<IdentityRecord, ApiError> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        let body = json!({
            "email": account.email,
            "password": account.password,
            "email_confirm": account.email_confirm,
            "user_metadata": { "name": account.name },
        });
        let resp = self
            .authed(self.http.post(&url))
            .json(&body)
            .send()
            .await
            .map_err(classify_transport)?;
        let user: AdminUser = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(classify_transport)?;
        Ok(IdentityRecord {
            id: user.id,
            name: user.display_name(),
        })
    }

    async fn list_users(&self, page: u32, per_page: u32) -> Result<Vec<DirectoryEntry>, ApiError> {
        let url = format!("{}/auth/v1/admin/users", self.base_url);
        let resp = self
            .authed(self.http.get(&url))
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await
            .map_err(classify_transport)?;
        let list: UserList = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(classify_transport)?;
        Ok(list
            .users
            .into_iter()
            .map(|user| DirectoryEntry {
                id: user.id,
                name: user.display_name(),
                email: user.email,
            })
            .collect())
    }

    async fn update_password(&self, id: Uuid, password: &str) -> Result<(), ApiError> {
        let url = format!("{}/auth/v1/admin/users/{id}", self.base_url);
        let resp = self
            .authed(self.http.put(&url))
            .json(&json!({ "password": password }))
            .send()
            .await
            .map_err(classify_transport)?;
        Self::check(resp).await?;
        Ok(())
    }
}

// ── TableStore ───────────────────────────────────────────────────────────────

impl TableStore for SupabaseClient {
    async fn upsert<T: serde::Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
        on_conflict: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{table}", self.base_url);
        let resp = self
            .authed(self.http.post(&url))
            .query(&[("on_conflict", on_conflict)])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(classify_transport)?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn insert<T: serde::Serialize + Sync>(
        &self,
        table: &str,
        rows: &[T],
    ) -> Result<(), ApiError> {
        let url = format!("{}/rest/v1/{table}", self.base_url);
        let resp = self
            .authed(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(classify_transport)?;
        Self::check(resp).await?;
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! LinkedIn API client and orchestration service.
//!
//! Handles:
//! - Building the authorization URL
//! - Exchanging authorization codes for access tokens
//! - Resolving the authenticated member identity
//! - Fetching the member's recent posts

use crate::error::AppError;
use serde::Deserialize;
use serde_json::Value;

/// Number of recent posts fetched per request. Fixed: pagination is not
/// exposed to callers.
const POSTS_PAGE_SIZE: u32 = 10;

/// Required by the versioned LinkedIn REST API.
const RESTLI_PROTOCOL_VERSION: &str = "2.0.0";

/// LinkedIn API client.
#[derive(Clone)]
pub struct LinkedInClient {
    http: reqwest::Client,
    /// OAuth host (`https://www.linkedin.com`)
    oauth_base_url: String,
    /// API host (`https://api.linkedin.com`)
    api_base_url: String,
    client_id: String,
    client_secret: String,
    /// `LinkedIn-Version` header value; also selects the post mapper.
    version: String,
}

impl LinkedInClient {
    /// Create a new LinkedIn client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String, version: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            oauth_base_url: "https://www.linkedin.com".to_string(),
            api_base_url: "https://api.linkedin.com".to_string(),
            client_id,
            client_secret,
            version,
        }
    }

    /// Point both hosts somewhere else (tests use a local mock server).
    pub fn with_base_urls(mut self, oauth_base_url: &str, api_base_url: &str) -> Self {
        self.oauth_base_url = oauth_base_url.trim_end_matches('/').to_string();
        self.api_base_url = api_base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the authorization URL the user is redirected to.
    pub fn authorize_url(&self, redirect_uri: &str, scope: &str) -> String {
        format!(
            "{}/oauth/v2/authorization?response_type=code&client_id={}&redirect_uri={}&scope={}",
            self.oauth_base_url,
            self.client_id,
            urlencoding::encode(redirect_uri),
            urlencoding::encode(scope),
        )
    }

    /// Exchange an authorization code for an access token.
    ///
    /// LinkedIn requires form encoding here and validates that
    /// `redirect_uri` exactly matches the one used in the authorization
    /// step. A failed exchange is terminal; the user restarts the flow.
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, AppError> {
        let url = format!("{}/oauth/v2/accessToken", self.oauth_base_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Token exchange request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "LinkedIn token exchange failed");
            return Err(AppError::Upstream(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse token response: {}", e)))
    }

    /// Resolve the authenticated member's identity.
    ///
    /// The post listing must be scoped to an author URN, so this lookup is a
    /// hard precondition of every fetch.
    pub async fn get_userinfo(&self, access_token: &str) -> Result<UserInfo, AppError> {
        let url = format!("{}/v2/userinfo", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Identity lookup failed: {}", e)))?;

        Self::check_bearer_response_json(response).await
    }

    /// List the author's most recent posts (bounded, most recent first per
    /// the provider's ordering; we preserve whatever order it returns).
    pub async fn list_posts(
        &self,
        access_token: &str,
        author_urn: &str,
    ) -> Result<Vec<Value>, AppError> {
        let url = format!("{}/rest/posts", self.api_base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .header("LinkedIn-Version", &self.version)
            .header("X-Restli-Protocol-Version", RESTLI_PROTOCOL_VERSION)
            .query(&[
                ("author", author_urn.to_string()),
                ("q", "author".to_string()),
                ("count", POSTS_PAGE_SIZE.to_string()),
                ("sortBy", "LAST_MODIFIED".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Post listing failed: {}", e)))?;

        let listing: PostListing = Self::check_bearer_response_json(response).await?;
        Ok(listing.elements)
    }

    /// Check a bearer-authenticated response and parse its JSON body.
    ///
    /// 401/403 mean the token itself was accepted for OAuth but LinkedIn
    /// refuses the specific API, which is a product/permission problem and
    /// gets a distinct, actionable error.
    async fn check_bearer_response_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                tracing::warn!(status = %status, body = %body, "LinkedIn refused access");
                return Err(AppError::PermissionDenied(format!(
                    "LinkedIn returned {}: the connected token is not authorized for this API. \
                     Check that the app has the Community Management API product and the \
                     requested scope granted.",
                    status.as_u16()
                )));
            }

            return Err(AppError::Upstream(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))
    }
}

/// Token exchange response from LinkedIn.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Identity response from the userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    /// Member identifier; the author URN is `urn:li:person:{sub}`
    pub sub: String,
}

/// Post listing envelope.
#[derive(Debug, Deserialize)]
struct PostListing {
    #[serde(default)]
    elements: Vec<Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// LinkedInService - High-level service tying the client to the token store
// ─────────────────────────────────────────────────────────────────────────────

use crate::db::Database;
use crate::models::{NormalizedPost, TokenRecord, DEFAULT_USER_ID};
use crate::services::normalize::PostShape;

/// High-level LinkedIn service: OAuth completion, connection status, and the
/// post-fetch pipeline. All durable state lives in the store; the service
/// itself holds nothing mutable across requests.
#[derive(Clone)]
pub struct LinkedInService {
    client: LinkedInClient,
    db: Database,
}

impl LinkedInService {
    /// Create a new LinkedIn service.
    pub fn new(client: LinkedInClient, db: Database) -> Self {
        Self { client, db }
    }

    /// Build the authorization URL for the begin-authorization redirect.
    pub fn authorize_url(&self, redirect_uri: &str, scope: &str) -> String {
        self.client.authorize_url(redirect_uri, scope)
    }

    // ─── OAuth Completion ────────────────────────────────────────────────────

    /// Exchange an authorization code and persist the resulting token.
    ///
    /// Re-authorization replaces the stored row; the store never holds more
    /// than one token for the logical user.
    pub async fn complete_authorization(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<(), AppError> {
        let token = self.client.exchange_code(code, redirect_uri).await?;

        let record = TokenRecord::for_default_user(token.access_token, token.expires_in);
        self.db.upsert_token(&record).await?;

        tracing::info!(
            expires_at = %record.expires_at,
            "LinkedIn token exchanged and stored"
        );
        Ok(())
    }

    // ─── Connection Status ───────────────────────────────────────────────────

    /// Whether a token is on file for the logical user. Expiry is not
    /// consulted and LinkedIn is not called.
    pub async fn connection_status(&self) -> Result<bool, AppError> {
        Ok(self.db.get_token(DEFAULT_USER_ID).await?.is_some())
    }

    // ─── Post Fetching ───────────────────────────────────────────────────────

    /// Fetch and normalize the connected member's recent posts.
    ///
    /// Strictly sequential: stored token, then identity lookup, then the
    /// author-scoped listing. With no token on file this fails before any
    /// outbound call. A fetch failure never mutates the stored token.
    pub async fn fetch_posts(&self) -> Result<Vec<NormalizedPost>, AppError> {
        let record = self
            .db
            .get_token(DEFAULT_USER_ID)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        let identity = self.client.get_userinfo(&record.access_token).await?;
        let author_urn = format!("urn:li:person:{}", identity.sub);

        let raw_posts = self
            .client
            .list_posts(&record.access_token, &author_urn)
            .await?;

        let shape = PostShape::for_version(&self.client.version);
        let posts: Vec<NormalizedPost> = raw_posts.iter().map(|p| shape.map(p)).collect();

        tracing::info!(count = posts.len(), "Fetched LinkedIn posts");
        Ok(posts)
    }
}

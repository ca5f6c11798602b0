//! Dropbox API client for file sharing operations.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{DropboxError, Result};
use crate::file_id;
use crate::models::{
    ApiErrorResponse, FileMembers, ListFileMembersArg, ListFileMembersContinueArg,
    SharedFileMembers,
};

/// Client for the Dropbox sharing API.
pub struct DropboxClient {
    config: Config,
    http: Client,
}

impl DropboxClient {
    /// Create a new DropboxClient.
    ///
    /// # Arguments
    /// * `config` - Access token and endpoint configuration
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Get the configured API base URL.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Issue an authenticated JSON RPC request and decode the response.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(DropboxError::Encoding)?;

        let response = self
            .http
            .post(format!("{}/{}", self.config.base_url(), path))
            .bearer_auth(self.config.access_token())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                return Err(DropboxError::Api {
                    status: status.as_u16(),
                    message: api_error.error_summary,
                });
            }
            return Err(DropboxError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(DropboxError::Decoding)
    }

    /// List all members of a file, following pagination to the last page.
    ///
    /// # Arguments
    /// * `file` - File reference: `id:...`, an absolute path, or `nspath:N:...`
    /// * `include_inherited` - Include members whose access comes from a
    ///   parent folder
    /// * `limit` - Number of members to request per page (must be positive)
    pub async fn list_file_members(
        &self,
        file: &str,
        include_inherited: bool,
        limit: u32,
    ) -> Result<FileMembers> {
        self.list_file_members_with_cancel(file, include_inherited, limit, &CancellationToken::new())
            .await
    }

    /// Like [`list_file_members`](Self::list_file_members), but checks the
    /// given token before each request and aborts with
    /// [`DropboxError::Cancelled`] once it fires.
    pub async fn list_file_members_with_cancel(
        &self,
        file: &str,
        include_inherited: bool,
        limit: u32,
        cancel: &CancellationToken,
    ) -> Result<FileMembers> {
        let file = file_id::parse_file_ref(file)?;
        if limit == 0 {
            return Err(DropboxError::InvalidArgument(
                "limit must be positive".to_string(),
            ));
        }

        if cancel.is_cancelled() {
            return Err(DropboxError::Cancelled);
        }

        let page: SharedFileMembers = self
            .post_json(
                "sharing/list_file_members",
                &ListFileMembersArg {
                    file,
                    include_inherited,
                    limit,
                },
            )
            .await?;

        let mut members = FileMembers::default();
        let mut cursor = absorb_page(&mut members, page);
        let mut pages_fetched: u32 = 1;

        // Each cursor is consumed by exactly one continue call; the loop ends
        // when a page comes back without one.
        while let Some(next) = cursor {
            if cancel.is_cancelled() {
                return Err(DropboxError::Cancelled);
            }
            if pages_fetched >= self.config.max_pages() {
                return Err(DropboxError::PageLimitExceeded {
                    max_pages: self.config.max_pages(),
                });
            }

            let page: SharedFileMembers = self
                .post_json(
                    "sharing/list_file_members/continue",
                    &ListFileMembersContinueArg { cursor: next },
                )
                .await?;
            pages_fetched += 1;

            cursor = absorb_page(&mut members, page);
        }

        Ok(members)
    }
}

/// Move a page's entries into the accumulator, returning its cursor.
fn absorb_page(members: &mut FileMembers, page: SharedFileMembers) -> Option<String> {
    let SharedFileMembers {
        users,
        groups,
        invitees,
        cursor,
    } = page;
    members.users.extend(users);
    members.groups.extend(groups);
    members.invitees.extend(invitees);
    cursor
}

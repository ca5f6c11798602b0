//! dbx_members - List the members of a Dropbox file.
//!
//! This library wraps the Dropbox API v2 `sharing/list_file_members`
//! endpoint. It authenticates with a bearer token and follows the cursor
//! pagination protocol until every page is consumed, returning one
//! aggregated member list (users, groups, pending invitees).
//!
//! # Example
//!
//! ```no_run
//! use dbx_members::{Config, DropboxClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = DropboxClient::new(config);
//!
//!     let members = client.list_file_members("id:abc123", true, 100).await?;
//!     for user in &members.users {
//!         println!("{}", user);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod file_id;
pub mod models;

// Re-exports for convenience
pub use client::DropboxClient;
pub use config::Config;
pub use error::{DropboxError, Result};
pub use file_id::parse_file_ref;
pub use models::FileMembers;

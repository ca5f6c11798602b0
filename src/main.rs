//! dbx_members CLI - List the members of a Dropbox file.

use anyhow::{Context, Result};
use clap::Parser;

use dbx_members::{Config, DropboxClient};

/// List every member (users, groups, pending invitees) of a Dropbox file.
#[derive(Parser)]
#[command(name = "dbx_members")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to inspect: an id ("id:abc123"), an absolute path, or
    /// "nspath:N:/path".
    file: String,

    /// Dropbox API access token.
    #[arg(long, env = "DROPBOX_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// Include members whose access comes from a parent folder.
    #[arg(long)]
    include_inherited: bool,

    /// Number of members to request per page.
    #[arg(long, default_value_t = 100)]
    limit: u32,

    /// Abort if pagination has not terminated after this many pages.
    #[arg(long, default_value_t = dbx_members::config::DEFAULT_MAX_PAGES)]
    max_pages: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::new(cli.token).with_max_pages(cli.max_pages);
    let client = DropboxClient::new(config);

    let members = client
        .list_file_members(&cli.file, cli.include_inherited, cli.limit)
        .await
        .with_context(|| format!("Failed to list members of file: {}", cli.file))?;

    if members.is_empty() {
        println!("No members found.");
        return Ok(());
    }

    println!(
        "{} member(s): {} user(s), {} group(s), {} invitee(s)",
        members.len(),
        members.users.len(),
        members.groups.len(),
        members.invitees.len()
    );
    println!("{}", "-".repeat(80));
    for user in &members.users {
        println!("{}", user);
    }
    for group in &members.groups {
        println!("{}", group);
    }
    for invitee in &members.invitees {
        println!("{}", invitee);
    }

    Ok(())
}

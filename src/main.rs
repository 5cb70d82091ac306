use anyhow::Result;
use clap::{Parser, Subcommand};
use spgraph_client::GraphClient;
use spgraph_types::{Credentials, EntryFilter};
use std::io::Write as _;
use std::path::PathBuf;

mod config;
use config::Config;

#[derive(Parser, Debug)]
#[command(name = "spgraph", about = "spgraph — SharePoint document client over Microsoft Graph")]
struct Cli {
    /// Path to the YAML configuration file (default: spgraph.yaml).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Acquire a bearer token and print it.
    Token,
    /// Resolve a site name to its site id.
    Site {
        /// Site name under `{tenant}.sharepoint.com/sites/`.
        site: String,
    },
    /// List the drives under a site.
    Drives {
        /// Site name under `{tenant}.sharepoint.com/sites/`.
        site: String,
    },
    /// List the children of a folder within a drive.
    List {
        /// Drive id, as printed by `drives`.
        drive_id: String,
        /// Folder path under the drive root; must begin with '/'.
        #[arg(long)]
        path: Option<String>,
        /// Keep only entries of this kind (folder | file).
        #[arg(long, value_name = "KIND")]
        only: Option<EntryFilter>,
    },
    /// Fetch a file's content.
    Get {
        /// Drive id, as printed by `drives`.
        drive_id: String,
        /// File name within the folder.
        file: String,
        /// Folder path under the drive root; must begin with '/'.
        #[arg(long)]
        path: Option<String>,
        /// Write the bytes here instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("config error: {e}"))?;
    let credentials = config.credentials()?;
    let client = GraphClient::new(reqwest::Client::new());

    match cli.command {
        Commands::Token => cmd_token(&client, &credentials).await,
        Commands::Site { site } => cmd_site(&client, &config, &credentials, &site).await,
        Commands::Drives { site } => cmd_drives(&client, &config, &credentials, &site).await,
        Commands::List {
            drive_id,
            path,
            only,
        } => cmd_list(&client, &credentials, &drive_id, path.as_deref(), only).await,
        Commands::Get {
            drive_id,
            file,
            path,
            out,
        } => cmd_get(&client, &credentials, &drive_id, &file, path.as_deref(), out).await,
    }
}

async fn cmd_token(client: &GraphClient, credentials: &Credentials) -> Result<()> {
    let token = client.acquire_token(credentials).await?;
    println!("{}", token.access_token);
    match token.expires_at {
        Some(at) => eprintln!("expires at {at} (unix seconds)"),
        None => eprintln!("no expiry reported"),
    }
    Ok(())
}

async fn cmd_site(
    client: &GraphClient,
    config: &Config,
    credentials: &Credentials,
    site: &str,
) -> Result<()> {
    let token = client.acquire_token(credentials).await?;
    let site_id = resolve_site(client, config.tenant()?, site, &token.access_token).await?;
    println!("{site_id}");
    Ok(())
}

async fn cmd_drives(
    client: &GraphClient,
    config: &Config,
    credentials: &Credentials,
    site: &str,
) -> Result<()> {
    let token = client.acquire_token(credentials).await?;
    let site_id = resolve_site(client, config.tenant()?, site, &token.access_token).await?;
    for drive in client.drives(&site_id, &token.access_token).await? {
        println!("{}\t{}", drive.id, drive.name);
    }
    Ok(())
}

async fn cmd_list(
    client: &GraphClient,
    credentials: &Credentials,
    drive_id: &str,
    path: Option<&str>,
    only: Option<EntryFilter>,
) -> Result<()> {
    let token = client.acquire_token(credentials).await?;
    let entries = client
        .children(drive_id, &token.access_token, path, only)
        .await?;
    for entry in entries {
        println!("{}\t{}\t{}", entry.kind, entry.name, entry.web_url);
    }
    Ok(())
}

async fn cmd_get(
    client: &GraphClient,
    credentials: &Credentials,
    drive_id: &str,
    file: &str,
    path: Option<&str>,
    out: Option<PathBuf>,
) -> Result<()> {
    let token = client.acquire_token(credentials).await?;
    let content = client
        .file_content(drive_id, &token.access_token, file, path)
        .await?;
    match out {
        Some(out) => std::fs::write(&out, &content)
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", out.display()))?,
        None => std::io::stdout().lock().write_all(&content)?,
    }
    Ok(())
}

async fn resolve_site(
    client: &GraphClient,
    tenant: &str,
    site: &str,
    token: &str,
) -> Result<String> {
    client
        .site_id(tenant, site, token)
        .await?
        .ok_or_else(|| anyhow::anyhow!("site '{site}' resolved without an id"))
}

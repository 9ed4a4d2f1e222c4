//! Quail command-line client.
//!
//! Prints the payload returned by each command as pretty JSON on stdout.

use anyhow::{bail, Context};
use clap::Parser;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use quail_client::config::{Args, ClientConfig, Command};
use quail_client::sdk::{ChainCredentials, Page, QuailClient};
use quail_client::VERSION;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let config = ClientConfig::from(&args);
    debug!("Quail client v{}", VERSION);
    debug!("API base: {}", config.apibase);

    let credentials = match args.store.clone() {
        Some(path) => ChainCredentials::standard_with_store(Some(path)),
        None => ChainCredentials::standard(),
    };
    let client = QuailClient::with_credentials(config, credentials)?;

    let output = run(&client, args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

async fn run(client: &QuailClient, command: Command) -> anyhow::Result<Value> {
    let value = match command {
        Command::Me => client.get_me().await?,
        Command::Assets => client.get_assets().await?,
        Command::Apikeys => client.get_apikeys().await?,
        Command::Lists { user_id } => client.get_lists(user_id).await?,
        Command::List { list_id } => client.get_list(list_id).await?,
        Command::Posts {
            list_id,
            offset,
            limit,
            public,
        } => {
            client
                .get_list_posts(list_id, Page::new(offset, limit), public)
                .await?
        }
        Command::Post { list_id, post_id } => client.get_post(list_id, post_id).await?,
        Command::Subscriptions => client.get_my_subscriptions().await?,
        Command::TrendingPosts { offset, limit } => {
            client
                .get_explore_trending_posts(Page::new(offset, limit))
                .await?
        }
        Command::TrendingLists { offset, limit } => {
            client
                .get_explore_trending_lists(Page::new(offset, limit))
                .await?
        }
        Command::SearchPhotos { query, page, limit } => {
            client.search_photos(&query, page, limit).await?
        }
        Command::Upload { file } => client
            .upload_file(&file)
            .await
            .with_context(|| format!("Failed to upload {}", file.display()))?,
        Command::Request { method, path, body } => {
            let method = Method::from_bytes(method.to_uppercase().as_bytes())
                .with_context(|| format!("Invalid HTTP method: {}", method))?;
            if path.is_empty() {
                bail!("Request path must not be empty");
            }
            let body: Option<Value> = body
                .map(|b| serde_json::from_str(&b))
                .transpose()
                .context("Request body is not valid JSON")?;
            client
                .dispatcher()
                .send(&path, method, body.as_ref())
                .await?
        }
    };

    Ok(value)
}

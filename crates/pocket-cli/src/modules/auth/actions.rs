use pocket_core::{AuthorizationResult, Authorizer, BrowserAuthorizer, TokenStore, Transport};
use tracing::info;
use url::Url;

use crate::modules::system::{ConfigPaths, Settings};

fn present_authorization_url(url: &Url) {
    eprintln!("Open this URL in your browser to authorize access:");
    eprintln!("{url}");
}

fn browser_authorizer(
    transport: &Transport,
    consumer_key: &str,
    settings: &Settings,
) -> BrowserAuthorizer<fn(&Url)> {
    let authorizer = BrowserAuthorizer::new(
        transport.clone(),
        consumer_key,
        present_authorization_url as fn(&Url),
    );
    match settings.auth_timeout {
        Some(timeout) => authorizer.with_timeout(timeout),
        None => authorizer,
    }
}

fn token_store(paths: &ConfigPaths) -> TokenStore {
    TokenStore::new(paths.auth_record())
}

/// Cached authorization for `consumer_key`, running the browser flow when
/// there is none.
pub(crate) async fn ensure_authorization(
    transport: &Transport,
    consumer_key: &str,
    settings: &Settings,
) -> anyhow::Result<AuthorizationResult> {
    let authorizer = browser_authorizer(transport, consumer_key, settings);
    let record = token_store(&settings.paths).ensure(&authorizer).await?;
    Ok(record)
}

pub(crate) async fn handle_login(
    transport: &Transport,
    consumer_key: &str,
    settings: &Settings,
) -> anyhow::Result<()> {
    let authorizer = browser_authorizer(transport, consumer_key, settings);
    let record = authorizer.authorize().await?;
    token_store(&settings.paths).save(&record)?;
    info!(username = %record.username, "authorization cached");
    println!("Logged in as {}", record.username);
    Ok(())
}

pub(crate) fn handle_logout(settings: &Settings) -> anyhow::Result<()> {
    let store = token_store(&settings.paths);
    store.clear()?;
    println!("Removed {}", store.path().display());
    Ok(())
}

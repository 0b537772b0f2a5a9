use tracing::debug;
use url::Url;

use super::types::{AccessTokenRequest, AuthorizationResult, RequestToken, RequestTokenRequest};
use crate::constants::endpoints;
use crate::error::Result;
use crate::transport::Transport;

pub async fn obtain_request_token(
    transport: &Transport,
    consumer_key: &str,
    redirect_url: &str,
) -> Result<RequestToken> {
    let payload = RequestTokenRequest {
        consumer_key,
        redirect_uri: redirect_url,
    };
    let token: RequestToken = transport
        .post_json(endpoints::OAUTH_REQUEST, &payload)
        .await?;
    debug!(redirect = %redirect_url, "obtained request token");
    Ok(token)
}

pub async fn obtain_access_token(
    transport: &Transport,
    consumer_key: &str,
    request_token: &RequestToken,
) -> Result<AuthorizationResult> {
    let payload = AccessTokenRequest {
        consumer_key,
        code: &request_token.code,
    };
    let result: AuthorizationResult = transport
        .post_json(endpoints::OAUTH_AUTHORIZE, &payload)
        .await?;
    debug!(username = %result.username, "obtained access token");
    Ok(result)
}

/// Page the user opens to grant access. Query values are form-encoded, so the
/// redirect URL's `:` and `/` are escaped.
pub fn authorization_url(
    origin: &str,
    request_token: &RequestToken,
    redirect_url: &str,
) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}{}",
        origin.trim_end_matches('/'),
        endpoints::AUTHORIZE_PAGE
    ))?;
    url.query_pairs_mut()
        .append_pair("redirect_uri", redirect_url)
        .append_pair("request_token", &request_token.code);
    Ok(url)
}

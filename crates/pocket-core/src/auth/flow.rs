use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::handshake::{authorization_url, obtain_access_token, obtain_request_token};
use super::listener::CallbackListener;
use super::types::{AuthorizationResult, RequestToken};
use crate::error::{PocketError, Result};
use crate::transport::Transport;

/// Position of an [`AuthFlow`] in the handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    RequestTokenObtained {
        request_token: RequestToken,
        redirect_url: String,
    },
    AuthorizationUrlPresented {
        request_token: RequestToken,
        redirect_url: String,
        authorization_url: Url,
    },
    ListenerWaiting {
        request_token: RequestToken,
    },
    AccessTokenObtained(AuthorizationResult),
    Failed,
}

impl AuthState {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::RequestTokenObtained { .. } => "request_token_obtained",
            Self::AuthorizationUrlPresented { .. } => "authorization_url_presented",
            Self::ListenerWaiting { .. } => "listener_waiting",
            Self::AccessTokenObtained(_) => "access_token_obtained",
            Self::Failed => "failed",
        }
    }

    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::AccessTokenObtained(_) | Self::Failed)
    }
}

/// Drives one authorization handshake from a bare consumer key to an access token.
///
/// Each step checks the current state and moves to the next one; any error
/// leaves the flow in [`AuthState::Failed`]. [`AuthFlow::run`] performs every
/// step in order.
pub struct AuthFlow<'a> {
    transport: &'a Transport,
    consumer_key: String,
    state: AuthState,
}

impl<'a> AuthFlow<'a> {
    pub fn new(transport: &'a Transport, consumer_key: impl Into<String>) -> Self {
        Self {
            transport,
            consumer_key: consumer_key.into(),
            state: AuthState::Idle,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub async fn request_token(&mut self, redirect_url: &str) -> Result<RequestToken> {
        if self.state != AuthState::Idle {
            return Err(self.state_error("request a token"));
        }
        match obtain_request_token(self.transport, &self.consumer_key, redirect_url).await {
            Ok(request_token) => {
                self.transition(AuthState::RequestTokenObtained {
                    request_token: request_token.clone(),
                    redirect_url: redirect_url.to_string(),
                });
                Ok(request_token)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Builds the authorization URL and hands it to `present` (print it, open a browser).
    pub fn present<F>(&mut self, present: F) -> Result<Url>
    where
        F: FnOnce(&Url),
    {
        let (request_token, redirect_url) = match &self.state {
            AuthState::RequestTokenObtained {
                request_token,
                redirect_url,
            } => (request_token.clone(), redirect_url.clone()),
            _ => return Err(self.state_error("present the authorization url")),
        };
        let url = match authorization_url(self.transport.origin(), &request_token, &redirect_url) {
            Ok(url) => url,
            Err(err) => return Err(self.fail(err)),
        };
        present(&url);
        self.transition(AuthState::AuthorizationUrlPresented {
            request_token,
            redirect_url,
            authorization_url: url.clone(),
        });
        Ok(url)
    }

    /// `listener` must be the one whose address went into the presented URL.
    pub async fn await_callback(
        &mut self,
        listener: CallbackListener,
        timeout: Option<Duration>,
    ) -> Result<()> {
        let request_token = match &self.state {
            AuthState::AuthorizationUrlPresented {
                request_token,
                redirect_url,
                ..
            } => {
                let actual = listener.redirect_url();
                if *redirect_url != actual {
                    return Err(PocketError::RedirectMismatch {
                        expected: redirect_url.clone(),
                        actual,
                    });
                }
                request_token.clone()
            }
            _ => return Err(self.state_error("wait for the callback")),
        };
        self.transition(AuthState::ListenerWaiting { request_token });
        listener.wait(timeout).await.map_err(|err| self.fail(err))
    }

    pub async fn exchange(&mut self) -> Result<AuthorizationResult> {
        let request_token = match &self.state {
            AuthState::ListenerWaiting { request_token } => request_token.clone(),
            _ => return Err(self.state_error("exchange the request token")),
        };
        match obtain_access_token(self.transport, &self.consumer_key, &request_token).await {
            Ok(result) => {
                self.transition(AuthState::AccessTokenObtained(result.clone()));
                Ok(result)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    pub async fn run<F>(
        &mut self,
        listener: CallbackListener,
        present: F,
        timeout: Option<Duration>,
    ) -> Result<AuthorizationResult>
    where
        F: FnOnce(&Url),
    {
        let redirect_url = listener.redirect_url();
        self.request_token(&redirect_url).await?;
        self.present(present)?;
        self.await_callback(listener, timeout).await?;
        self.exchange().await
    }

    fn transition(&mut self, next: AuthState) {
        debug!(from = self.state.name(), to = next.name(), "auth flow transition");
        self.state = next;
    }

    fn fail(&mut self, err: PocketError) -> PocketError {
        debug!(from = self.state.name(), error = %err, "auth flow failed");
        self.state = AuthState::Failed;
        err
    }

    fn state_error(&self, action: &'static str) -> PocketError {
        PocketError::AuthFlowState {
            action,
            state: self.state.name(),
        }
    }
}

/// Source of a fresh [`AuthorizationResult`] when nothing usable is cached.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self) -> Result<AuthorizationResult>;
}

/// Runs the full browser handshake on a loopback listener.
pub struct BrowserAuthorizer<F> {
    transport: Transport,
    consumer_key: String,
    timeout: Option<Duration>,
    present: F,
}

impl<F> BrowserAuthorizer<F>
where
    F: Fn(&Url) + Send + Sync,
{
    pub fn new(transport: Transport, consumer_key: impl Into<String>, present: F) -> Self {
        Self {
            transport,
            consumer_key: consumer_key.into(),
            timeout: None,
            present,
        }
    }

    /// Bounds how long the user has to approve access in the browser.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl<F> Authorizer for BrowserAuthorizer<F>
where
    F: Fn(&Url) + Send + Sync,
{
    async fn authorize(&self) -> Result<AuthorizationResult> {
        let listener = CallbackListener::bind().await?;
        let mut flow = AuthFlow::new(&self.transport, self.consumer_key.clone());
        flow.run(listener, |url| (self.present)(url), self.timeout)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn redirect_of(url: &Url) -> String {
        url.query_pairs()
            .find(|(key, _)| key == "redirect_uri")
            .map(|(_, value)| value.into_owned())
            .expect("redirect_uri present")
    }

    fn complete_in_background(url: &Url) {
        let redirect = redirect_of(url);
        tokio::spawn(async move {
            let _ = reqwest::get(format!("{redirect}/favicon.ico")).await;
            let _ = reqwest::get(redirect).await;
        });
    }

    #[tokio::test]
    async fn run_walks_every_state_to_access_token() {
        let mut server = Server::new_async().await;
        let request = server
            .mock("POST", "/v3/oauth/request")
            .match_body(Matcher::PartialJson(json!({"consumer_key": "ck"})))
            .with_status(200)
            .with_body(r#"{"code":"abc-123"}"#)
            .create_async()
            .await;
        let authorize = server
            .mock("POST", "/v3/oauth/authorize")
            .match_body(Matcher::Json(json!({"consumer_key": "ck", "code": "abc-123"})))
            .with_status(200)
            .with_body(r#"{"access_token":"at-1","username":"reader"}"#)
            .create_async()
            .await;

        let transport = Transport::new(server.url()).expect("transport");
        let listener = CallbackListener::bind().await.expect("bind");
        let expected_redirect = listener.redirect_url();
        let mut flow = AuthFlow::new(&transport, "ck");

        let mut presented = None;
        let result = flow
            .run(
                listener,
                |url| {
                    presented = Some(url.clone());
                    complete_in_background(url);
                },
                Some(Duration::from_secs(5)),
            )
            .await
            .expect("flow completes");

        assert_eq!(result.access_token, "at-1");
        assert_eq!(result.username, "reader");
        assert_eq!(flow.state(), &AuthState::AccessTokenObtained(result));
        let presented = presented.expect("url presented");
        assert_eq!(redirect_of(&presented), expected_redirect);
        assert!(presented.as_str().contains("request_token=abc-123"));
        request.assert_async().await;
        authorize.assert_async().await;
    }

    #[tokio::test]
    async fn request_token_failure_moves_to_failed() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v3/oauth/request")
            .with_status(503)
            .with_header("X-Error", "backend down")
            .create_async()
            .await;

        let transport = Transport::new(server.url()).expect("transport");
        let mut flow = AuthFlow::new(&transport, "ck");
        let err = flow
            .request_token("http://127.0.0.1:1")
            .await
            .expect_err("must fail");
        assert_eq!(err.status(), Some(503));
        assert_eq!(flow.state(), &AuthState::Failed);
        assert!(flow.state().is_terminal());
    }

    #[tokio::test]
    async fn steps_out_of_order_are_rejected() {
        let transport = Transport::new("http://127.0.0.1:1").expect("transport");
        let mut flow = AuthFlow::new(&transport, "ck");

        let err = flow.exchange().await.expect_err("cannot exchange from idle");
        assert!(matches!(
            err,
            PocketError::AuthFlowState {
                action: "exchange the request token",
                ..
            }
        ));

        let mut flow = AuthFlow::new(&transport, "ck");
        assert!(flow.present(|_| {}).is_err());
    }

    #[tokio::test]
    async fn waiting_on_a_foreign_listener_is_rejected() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v3/oauth/request")
            .with_status(200)
            .with_body(r#"{"code":"abc-123"}"#)
            .create_async()
            .await;

        let transport = Transport::new(server.url()).expect("transport");
        let mut flow = AuthFlow::new(&transport, "ck");
        flow.request_token("http://127.0.0.1:1")
            .await
            .expect("request token");
        flow.present(|_| {}).expect("present");

        let listener = CallbackListener::bind().await.expect("bind");
        let actual_redirect = listener.redirect_url();
        let err = flow
            .await_callback(listener, Some(Duration::from_secs(5)))
            .await
            .expect_err("redirect does not match the listener");

        match err {
            PocketError::RedirectMismatch { expected, actual } => {
                assert_eq!(expected, "http://127.0.0.1:1");
                assert_eq!(actual, actual_redirect);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(flow.state().name(), "authorization_url_presented");
    }

    #[tokio::test]
    async fn unanswered_callback_times_out() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v3/oauth/request")
            .with_status(200)
            .with_body(r#"{"code":"abc-123"}"#)
            .create_async()
            .await;
        let authorize = server
            .mock("POST", "/v3/oauth/authorize")
            .expect(0)
            .create_async()
            .await;

        let transport = Transport::new(server.url()).expect("transport");
        let listener = CallbackListener::bind().await.expect("bind");
        let mut flow = AuthFlow::new(&transport, "ck");
        let err = flow
            .run(listener, |_| {}, Some(Duration::from_millis(100)))
            .await
            .expect_err("nobody completes authorization");

        assert!(matches!(err, PocketError::CallbackTimeout(_)));
        assert_eq!(flow.state(), &AuthState::Failed);
        authorize.assert_async().await;
    }

    #[tokio::test]
    async fn browser_authorizer_runs_the_handshake() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v3/oauth/request")
            .with_status(200)
            .with_body(r#"{"code":"abc-123"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/v3/oauth/authorize")
            .with_status(200)
            .with_body(r#"{"access_token":"at-2","username":"other"}"#)
            .create_async()
            .await;

        let transport = Transport::new(server.url()).expect("transport");
        let authorizer = BrowserAuthorizer::new(transport, "ck", complete_in_background)
            .with_timeout(Duration::from_secs(5));
        let result = authorizer.authorize().await.expect("authorized");
        assert_eq!(result.access_token, "at-2");
    }
}

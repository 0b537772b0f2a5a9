mod flow;
mod handshake;
mod listener;
mod types;

pub use flow::{AuthFlow, AuthState, Authorizer, BrowserAuthorizer};
pub use handshake::{authorization_url, obtain_access_token, obtain_request_token};
pub use listener::CallbackListener;
pub use types::{AuthorizationResult, RequestToken};

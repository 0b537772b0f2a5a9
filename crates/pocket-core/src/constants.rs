pub const DEFAULT_ORIGIN: &str = "https://getpocket.com";

pub mod endpoints {
    pub const OAUTH_REQUEST: &str = "/v3/oauth/request";
    pub const OAUTH_AUTHORIZE: &str = "/v3/oauth/authorize";
    pub const RETRIEVE: &str = "/v3/get";
    pub const ADD: &str = "/v3/add";
    pub const SEND: &str = "/v3/send";

    /// Browser-facing page, not an API endpoint.
    pub const AUTHORIZE_PAGE: &str = "/auth/authorize";
}

pub mod headers {
    pub const ACCEPT: &str = "X-Accept";
    pub const ERROR: &str = "X-Error";
    pub const ERROR_CODE: &str = "X-Error-Code";
}

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const CALLBACK_BIND_ADDR: &str = "127.0.0.1:0";
pub const CALLBACK_CONFIRMATION: &str = "Authorized.\n";
pub const FAVICON_PATH: &str = "/favicon.ico";

#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod auth;
pub mod client;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod models;
pub mod store;
pub mod transport;

pub use crate::auth::*;
pub use crate::client::*;
pub use crate::constants::*;
pub use crate::credentials::*;
pub use crate::error::*;
pub use crate::models::*;
pub use crate::store::*;
pub use crate::transport::*;

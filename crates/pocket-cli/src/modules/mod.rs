pub(crate) mod auth;
pub(crate) mod items;
pub(crate) mod system;

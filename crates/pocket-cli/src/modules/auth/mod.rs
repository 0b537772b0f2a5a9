mod actions;

pub(crate) use actions::{ensure_authorization, handle_login, handle_logout};

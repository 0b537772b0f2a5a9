mod actions;
pub(crate) mod args;
mod format;

pub(crate) use actions::{handle_add, handle_archive, handle_list};

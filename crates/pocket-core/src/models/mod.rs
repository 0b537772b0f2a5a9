mod add;
pub mod codec;
mod enums;
mod item;
mod modify;
mod retrieve;

pub use add::AddOptions;
pub use enums::{
    ContentType, DetailType, EnumParseError, FavoriteFilter, ItemStatus, MediaPresence, Sort,
    State,
};
pub use item::Item;
pub use modify::{Action, ModifyResult};
pub use retrieve::{RetrieveFilter, RetrieveResult};

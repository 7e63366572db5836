pub mod card;
pub mod list;

pub use card::{Card, CardId};
pub use list::{List, ListId};

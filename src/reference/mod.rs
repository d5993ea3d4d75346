pub mod catalog;
pub mod directory;
pub mod items;
pub mod tierlist;

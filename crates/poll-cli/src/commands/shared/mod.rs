pub mod entries;
pub mod page;
pub mod parse;

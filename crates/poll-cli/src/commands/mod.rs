pub mod create;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
pub mod schema;
pub mod shared;
pub mod update;

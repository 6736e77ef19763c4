pub mod item;
pub mod ownership;
pub mod user;

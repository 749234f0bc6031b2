pub mod auth;
pub mod items;
pub mod todos;
pub mod users;

pub mod index;
pub mod users;

pub mod error;
pub mod memory_user_repo;
pub mod user_repo;

pub use memory_user_repo::MemoryUserRepo;
pub use user_repo::{PgUserRepo, User};

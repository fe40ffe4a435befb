pub mod api_key_repo;
pub mod user_repo;

pub use api_key_repo::ApiKeyRepo;
pub use user_repo::UserRepo;

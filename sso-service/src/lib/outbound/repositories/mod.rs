pub mod app;
pub mod user;

pub use app::SqliteAppRepository;
pub use user::SqliteUserRepository;

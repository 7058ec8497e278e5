pub mod discord;
pub mod role_directory;

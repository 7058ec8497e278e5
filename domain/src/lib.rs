pub mod member;
pub mod ports;
pub mod role_directory;
pub mod roles;

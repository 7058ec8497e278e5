pub mod role_assignment;

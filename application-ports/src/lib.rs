pub mod member_joined;

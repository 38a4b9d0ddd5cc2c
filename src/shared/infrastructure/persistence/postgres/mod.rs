pub mod postgres_connection;
pub mod like_pattern;

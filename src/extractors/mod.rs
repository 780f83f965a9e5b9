pub mod username;
pub use username::Username;

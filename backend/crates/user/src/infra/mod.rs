//! Infrastructure Layer
//!
//! Storage adapters for [`crate::domain::repository::UserStore`].

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUserStore;
pub use postgres::PgUserStore;

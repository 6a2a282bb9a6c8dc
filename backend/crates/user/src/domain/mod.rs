//! Domain Layer
//!
//! Entities, value objects, the persistence port and the error mapper.

pub mod entity;
pub mod error_mapper;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{Profile, User};
pub use repository::{
    NestedCreate, NewProfile, NewUser, StoreError, StoreErrorKind, UserCriteria, UserStore,
};

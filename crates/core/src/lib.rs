//! Domain types shared by the persistence and HTTP layers.

pub mod error;
pub mod favorite;
pub mod types;
pub mod validation;

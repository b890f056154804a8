//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&SqlitePool` as the first argument.

pub mod favorite_repo;
pub mod people_repo;
pub mod planet_repo;
pub mod user_repo;

pub use favorite_repo::FavoriteRepo;
pub use people_repo::PeopleRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;

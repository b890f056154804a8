pub mod favorite;
pub mod ingest;
pub mod people;
pub mod planet;
pub mod users;

//! sea-orm entities for the Holonet API tables.

pub mod favorite;
pub mod people;
pub mod planet;
pub mod user;

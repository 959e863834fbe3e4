//! SeaORM entity definitions, one per table.

pub mod guest;
pub mod movie;
pub mod post;
pub mod reservation;
pub mod user;

//! Domain entities - the core business objects.

mod guest;
mod movie;
mod post;
mod reservation;
mod user;

pub use guest::Guest;
pub use movie::Movie;
pub use post::Post;
pub use reservation::Reservation;
pub use user::User;

pub mod films;
pub mod users;

pub use films::Film;
pub use users::User;

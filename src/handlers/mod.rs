pub mod films;
pub mod health;
pub mod users;

pub use films::*;
pub use health::*;
pub use users::*;

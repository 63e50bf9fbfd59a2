pub mod bookmark;
pub mod recipe;
pub mod user;

pub use bookmark::*;
pub use recipe::*;
pub use user::*;

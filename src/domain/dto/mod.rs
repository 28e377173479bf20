pub mod errors;
pub mod users;

pub use users::*;

//! Domain model for users known to Workboard.

mod ids;
mod user;

pub use ids::UserId;
pub use user::User;

//! Domain model for tasks.
//!
//! Status is a flat enumeration: every status may follow every other,
//! including itself.

mod error;
mod ids;
mod status;
mod task;

pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};

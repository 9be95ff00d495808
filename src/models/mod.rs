//! Data models for the GreenSteps service.
//!
//! Wire names are camelCase to match the web client.

mod lesson;
mod notification;
mod project;
mod resource;
mod snapshot;
mod user;
pub mod validation;

pub use lesson::*;
pub use notification::*;
pub use project::*;
pub use resource::*;
pub use snapshot::*;
pub use user::*;

//! Domain models for the portfolio site.

pub mod project;
pub mod work;

pub use project::{NewProject, Project};
pub use work::{NewWork, Work};

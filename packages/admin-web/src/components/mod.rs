//! Reusable UI components

mod admin_layout;
mod admin_nav;
mod loading;

pub use admin_layout::*;
pub use admin_nav::*;
pub use loading::*;

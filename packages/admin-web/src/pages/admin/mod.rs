//! Admin pages

mod dashboard;
mod documents;
mod events;
mod login;
mod media;
mod members;
mod news;
mod notifications;
mod regions;

pub use dashboard::*;
pub use documents::*;
pub use events::*;
pub use login::*;
pub use media::*;
pub use members::*;
pub use news::*;
pub use notifications::*;
pub use regions::*;

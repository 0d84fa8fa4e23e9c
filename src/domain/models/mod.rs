mod action;
mod confirm;
mod error;
mod event;
mod loading;
mod notice;
mod quiz;
mod quiz_service;
mod textarea;

pub use action::*;
pub use confirm::*;
pub use error::*;
pub use event::*;
pub use loading::*;
pub use notice::*;
pub use quiz::*;
pub use quiz_service::*;
pub use textarea::*;

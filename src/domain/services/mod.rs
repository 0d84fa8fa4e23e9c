pub mod actions;
mod app_state;
pub mod events;
mod history_list;
mod question_list;
mod quiz_session;
mod wrap;

pub use app_state::*;
pub use history_list::*;
pub use question_list::*;
pub use quiz_session::*;
pub use wrap::*;

mod check_in;
mod greeting;
mod page_session;
mod prompts;
mod quick_links;
mod time_context;

pub use check_in::*;
pub use greeting::*;
pub use page_session::*;
pub use prompts::*;
pub use quick_links::*;
pub use time_context::*;

pub mod engine;
pub mod history;
pub mod http_handlers;

pub use engine::*;
pub use history::*;

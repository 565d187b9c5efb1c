pub mod input;
pub mod output;

pub use input::{parse_session, SessionInput};
pub use output::render;

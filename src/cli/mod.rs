mod send;
mod serve;

pub use send::{SendArgs, send};
pub use serve::serve;

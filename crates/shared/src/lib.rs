pub mod site;
mod sport;

pub use sport::*;

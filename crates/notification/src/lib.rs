mod emailjs;
mod smtp;
mod template;

pub use emailjs::*;
pub use smtp::*;

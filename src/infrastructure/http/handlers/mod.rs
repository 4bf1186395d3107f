//! HTTP Handlers

mod department;
mod ping;
mod student;

pub use department::*;
pub use ping::*;
pub use student::*;

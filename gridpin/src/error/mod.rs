//! Error types

mod config;
mod layout;
mod value;

pub use config::*;
pub use layout::*;
pub use value::*;

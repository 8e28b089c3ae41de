mod check;
mod config;
mod error;
mod registry;
mod tag_list;

pub use check::*;
pub use config::*;
pub use error::*;
pub use registry::*;
pub use tag_list::*;

pub mod calendar;
pub mod config;
pub mod contact;
pub mod dataset;
pub mod message;
pub mod mode;
pub mod project;
pub mod thread_map;

pub use calendar::*;
pub use config::*;
pub use contact::*;
pub use dataset::*;
pub use message::*;
pub use mode::*;
pub use project::*;
pub use thread_map::*;

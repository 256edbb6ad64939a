pub use alignment::Alignment;
pub use config::Config;
pub use error::{Error, Which};
pub use global::GlobalAlignment;
pub use nw::{Engine, Layout};

mod alignment;
pub mod batch;
mod config;
mod error;
pub mod global;
pub mod nw;
pub mod report;
pub mod scoring;
pub mod validate;

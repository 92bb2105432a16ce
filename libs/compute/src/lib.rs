pub mod client;
pub mod error;
pub mod handle;
pub mod mode;
pub mod model;

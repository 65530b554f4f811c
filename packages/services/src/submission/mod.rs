pub mod service;
pub mod transport;

pub use service::*;
pub use transport::*;

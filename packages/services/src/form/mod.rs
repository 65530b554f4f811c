pub mod record;

pub use record::{Devices, FormRecord};

// rfidwire/src/device/mod.rs

pub mod builder;
pub mod dle;
pub mod handle;
pub mod multidrop;

pub use builder::DeviceBuilder;
pub use handle::{Device, Request};

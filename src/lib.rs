//! # Creational Patterns
//!
//! Two small demos of creational design patterns:
//!
//! ## Abstract Factory
//! - Product traits `Cpu`, `Memory` and `Display`
//! - One concrete product per family (phone, laptop, tablet)
//! - `AccessoryFactory` builds a matched set for one family
//!
//! ## Factory Method
//! - `HttpAdapter` product trait with a REST implementation
//! - `HttpAdapterFactory` creator that hides the concrete adapter type
//!
//! Both drivers take an optional factory and an output sink. Passing `None`
//! only writes the "no factory" notice.
//!
//! Run the demos with: `cargo run --bin creational-patterns -- --help`

pub mod abstract_factory;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod family;

/// Written by either driver when it is called without a factory.
pub const NO_FACTORY_MESSAGE: &str = "--- No factory provided ---";

pub use abstract_factory::{app_accessory_factory, app_accessory_factory_with, AccessoryArgs};
pub use config::{ConfigError, DemoConfig, DemoSelection};
pub use error::DemoError;
pub use factory_method::app_factory;
pub use family::Family;

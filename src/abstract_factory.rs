//! Abstract Factory: one factory per family, each building a matched set of
//! processor, memory and display products.

use crate::error::DemoError;
use crate::family::Family;
use crate::NO_FACTORY_MESSAGE;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info};

// =============================================================================
// Step 1: Base products
// =============================================================================

pub trait Cpu {
    fn set_series(&self, out: &mut dyn Write, series: &str) -> std::io::Result<()>;
}

pub trait Memory {
    fn set_capacity_in_gb(&self, out: &mut dyn Write, capacity: u32) -> std::io::Result<()>;
}

pub trait Display {
    fn set_resolution(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

// =============================================================================
// Step 2: Concrete products, one per family
// =============================================================================

fn write_series(out: &mut dyn Write, family: Family, series: &str) -> std::io::Result<()> {
    writeln!(out, "[CPU] {series} {} series", family.output_label())
}

fn write_capacity(out: &mut dyn Write, family: Family, capacity: u32) -> std::io::Result<()> {
    writeln!(out, "[MEMORY] {capacity} {} capacity in GB", family.output_label())
}

fn write_resolution(out: &mut dyn Write, family: Family) -> std::io::Result<()> {
    writeln!(out, "[DISPLAY] {} resolution", family.output_label())
}

#[derive(Debug, Default)]
pub struct PhoneCpu;

impl Cpu for PhoneCpu {
    fn set_series(&self, out: &mut dyn Write, series: &str) -> std::io::Result<()> {
        write_series(out, Family::Phone, series)
    }
}

#[derive(Debug, Default)]
pub struct PhoneMemory;

impl Memory for PhoneMemory {
    fn set_capacity_in_gb(&self, out: &mut dyn Write, capacity: u32) -> std::io::Result<()> {
        write_capacity(out, Family::Phone, capacity)
    }
}

#[derive(Debug, Default)]
pub struct PhoneDisplay;

impl Display for PhoneDisplay {
    fn set_resolution(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write_resolution(out, Family::Phone)
    }
}

#[derive(Debug, Default)]
pub struct LaptopCpu;

impl Cpu for LaptopCpu {
    fn set_series(&self, out: &mut dyn Write, series: &str) -> std::io::Result<()> {
        write_series(out, Family::Laptop, series)
    }
}

#[derive(Debug, Default)]
pub struct LaptopMemory;

impl Memory for LaptopMemory {
    fn set_capacity_in_gb(&self, out: &mut dyn Write, capacity: u32) -> std::io::Result<()> {
        write_capacity(out, Family::Laptop, capacity)
    }
}

#[derive(Debug, Default)]
pub struct LaptopDisplay;

impl Display for LaptopDisplay {
    fn set_resolution(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write_resolution(out, Family::Laptop)
    }
}

#[derive(Debug, Default)]
pub struct TabletCpu;

impl Cpu for TabletCpu {
    fn set_series(&self, out: &mut dyn Write, series: &str) -> std::io::Result<()> {
        write_series(out, Family::Tablet, series)
    }
}

#[derive(Debug, Default)]
pub struct TabletMemory;

impl Memory for TabletMemory {
    fn set_capacity_in_gb(&self, out: &mut dyn Write, capacity: u32) -> std::io::Result<()> {
        write_capacity(out, Family::Tablet, capacity)
    }
}

#[derive(Debug, Default)]
pub struct TabletDisplay;

impl Display for TabletDisplay {
    fn set_resolution(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write_resolution(out, Family::Tablet)
    }
}

// =============================================================================
// Step 3: Abstract factory
// =============================================================================

pub trait AccessoryFactory {
    fn family(&self) -> Family;
    fn create_cpu(&self) -> Box<dyn Cpu>;
    fn create_memory(&self) -> Box<dyn Memory>;
    fn create_display(&self) -> Box<dyn Display>;
}

// =============================================================================
// Step 4: Concrete factories
// =============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct PhoneFactory;

impl AccessoryFactory for PhoneFactory {
    fn family(&self) -> Family {
        Family::Phone
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(PhoneCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(PhoneMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(PhoneDisplay)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LaptopFactory;

impl AccessoryFactory for LaptopFactory {
    fn family(&self) -> Family {
        Family::Laptop
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(LaptopCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(LaptopMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(LaptopDisplay)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TabletFactory;

impl AccessoryFactory for TabletFactory {
    fn family(&self) -> Family {
        Family::Tablet
    }

    fn create_cpu(&self) -> Box<dyn Cpu> {
        Box::new(TabletCpu)
    }

    fn create_memory(&self) -> Box<dyn Memory> {
        Box::new(TabletMemory)
    }

    fn create_display(&self) -> Box<dyn Display> {
        Box::new(TabletDisplay)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Literal arguments handed to the descriptive product methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccessoryArgs {
    pub series: String,
    pub capacity_gb: u32,
}

impl Default for AccessoryArgs {
    fn default() -> Self {
        Self {
            series: "12345".to_string(),
            capacity_gb: 64,
        }
    }
}

/// Builds one product of each kind from `factory` and describes it.
///
/// With no factory, only [`NO_FACTORY_MESSAGE`] is written.
pub fn app_accessory_factory(
    factory: Option<&dyn AccessoryFactory>,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    app_accessory_factory_with(factory, &AccessoryArgs::default(), out)
}

pub fn app_accessory_factory_with(
    factory: Option<&dyn AccessoryFactory>,
    args: &AccessoryArgs,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    let Some(factory) = factory else {
        info!("app_accessory_factory called without a factory");
        writeln!(out, "{NO_FACTORY_MESSAGE}")?;
        return Ok(());
    };

    let family = factory.family();
    debug!(%family, "creating accessories");

    let cpu = factory.create_cpu();
    let memory = factory.create_memory();
    let display = factory.create_display();

    cpu.set_series(out, &args.series)?;
    memory.set_capacity_in_gb(out, args.capacity_gb)?;
    display.set_resolution(out)?;

    debug!(%family, "accessories described");
    Ok(())
}

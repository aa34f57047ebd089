use crate::abstract_factory::{AccessoryFactory, LaptopFactory, PhoneFactory, TabletFactory};
use crate::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product family. Each family has one concrete factory and one concrete
/// variant of every product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Phone,
    Laptop,
    Tablet,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Phone, Family::Laptop, Family::Tablet];

    pub fn label(self) -> &'static str {
        match self {
            Family::Phone => "phone",
            Family::Laptop => "laptop",
            Family::Tablet => "tablet",
        }
    }

    /// Label written by the products. Only the phone family is lowercase.
    pub fn output_label(self) -> &'static str {
        match self {
            Family::Phone => "phone",
            Family::Laptop => "Laptop",
            Family::Tablet => "Tablet",
        }
    }

    pub fn factory(self) -> Box<dyn AccessoryFactory> {
        match self {
            Family::Phone => Box::new(PhoneFactory),
            Family::Laptop => Box::new(LaptopFactory),
            Family::Tablet => Box::new(TabletFactory),
        }
    }

    fn labels() -> [&'static str; 3] {
        Self::ALL.map(Family::label)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Family {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DemoError::unknown_family(wanted, &Self::labels()))
    }
}

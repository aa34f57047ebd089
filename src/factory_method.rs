//! Factory Method: a single creator hands out an HTTP adapter without the
//! caller naming the concrete adapter type.

use crate::error::DemoError;
use crate::NO_FACTORY_MESSAGE;
use std::io::{self, Write};
use tracing::{debug, info};

pub trait HttpAdapter {
    fn get(&self, out: &mut dyn Write) -> io::Result<()>;
    fn post(&self, out: &mut dyn Write) -> io::Result<()>;
    fn put(&self, out: &mut dyn Write) -> io::Result<()>;
    fn delete(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct RestHttpAdapter;

impl HttpAdapter for RestHttpAdapter {
    fn get(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[GET]")
    }

    fn post(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[POST]")
    }

    fn put(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[PUT]")
    }

    fn delete(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "[DELETE]")
    }
}

pub trait HttpAdapterFactory {
    fn make_http_adapter(&self) -> Box<dyn HttpAdapter>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RestHttpAdapterFactory;

impl HttpAdapterFactory for RestHttpAdapterFactory {
    fn make_http_adapter(&self) -> Box<dyn HttpAdapter> {
        Box::new(RestHttpAdapter)
    }
}

/// Makes one adapter and calls get, post, put and delete on it, in that order.
pub fn app_factory(
    factory: Option<&dyn HttpAdapterFactory>,
    out: &mut dyn Write,
) -> Result<(), DemoError> {
    let Some(factory) = factory else {
        info!("app_factory called without a factory");
        writeln!(out, "{NO_FACTORY_MESSAGE}")?;
        return Ok(());
    };

    let adapter = factory.make_http_adapter();
    debug!("http adapter created");

    adapter.get(out)?;
    adapter.post(out)?;
    adapter.put(out)?;
    adapter.delete(out)?;
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use creational_patterns::abstract_factory::app_accessory_factory_with;
use creational_patterns::factory_method::{app_factory, HttpAdapterFactory, RestHttpAdapterFactory};
use creational_patterns::{DemoConfig, DemoSelection, Family};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

// =============================================================================
// Command line
// =============================================================================

#[derive(Parser, Debug)]
#[command(name = "creational-patterns")]
#[command(about = "Runs the Abstract Factory and Factory Method demos")]
struct Cli {
    /// Which demo to run: abstract-factory, factory-method or all
    #[arg(long)]
    demo: Option<DemoSelection>,

    /// Product family for the Abstract Factory demo (repeatable)
    #[arg(long = "family")]
    families: Vec<Family>,

    /// TOML file with demo settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Call the drivers without a factory
    #[arg(long)]
    no_factory: bool,

    /// Disable colored banners
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load(path)
                .with_context(|| format!("loading demo config from {}", path.display()))?,
            None => DemoConfig::default(),
        };

        if let Some(demo) = self.demo {
            config.demo = demo;
        }
        if !self.families.is_empty() {
            config.families = self.families.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

// =============================================================================
// Demo runner
// =============================================================================

fn banner(out: &mut dyn Write, driver: &str) -> io::Result<()> {
    let title = format!("--- Calling {driver} ---");
    writeln!(out, "{}", title.cyan().bold())?;
    writeln!(out)
}

fn run(config: &DemoConfig, no_factory: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    debug!(demo = %config.demo, families = config.families.len(), no_factory, "running demos");

    if config.demo.runs_abstract_factory() {
        if no_factory {
            banner(out, "app_accessory_factory")?;
            app_accessory_factory_with(None, &config.accessory, out)?;
        } else {
            for family in &config.families {
                let factory = family.factory();
                banner(out, "app_accessory_factory")?;
                app_accessory_factory_with(Some(factory.as_ref()), &config.accessory, out)?;
            }
        }
    }

    if config.demo.runs_factory_method() {
        let factory = RestHttpAdapterFactory;
        let factory: Option<&dyn HttpAdapterFactory> = if no_factory { None } else { Some(&factory) };
        banner(out, "app_factory")?;
        app_factory(factory, out)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    let config = cli.resolve_config()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&config, cli.no_factory, &mut out)?;
    out.flush()?;
    Ok(())
}

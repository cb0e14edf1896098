use clap::{Args, Parser, Subcommand, ValueEnum};
use pc_app::{AppError, AppResult, ProductService, SweepDefinition, SweepParameter};
use pc_core::{ApplicationTypeId, CategoryId, ProductId, Quantity, parse_quantity};
use pc_perf::ProductConfiguration;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "pc-cli")]
#[command(about = "Product configurator CLI - performance estimates for industrial equipment", long_about = None)]
struct Cli {
    /// Catalog file (YAML, or JSON by extension); the built-in catalog when omitted
    #[arg(long, global = true, env = "PCFG_CATALOG")]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List product categories
    Categories,
    /// List application types
    Applications {
        /// Only application types of this category
        #[arg(long)]
        category: Option<u32>,
    },
    /// List catalog products
    Products {
        #[arg(long)]
        category: Option<u32>,
        /// Case-insensitive match on name, series or description
        #[arg(long)]
        search: Option<String>,
    },
    /// Estimate performance for a configuration
    Calculate {
        #[command(flatten)]
        config: ConfigArgs,
        #[arg(long)]
        json: bool,
    },
    /// Compare the selected product with other alternatives
    Compare {
        #[command(flatten)]
        config: ConfigArgs,
        /// Alternative product ID to include (repeatable)
        #[arg(long = "with", value_name = "ID")]
        with: Vec<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Summarize a configuration with a recommendation
    Summary {
        #[command(flatten)]
        config: ConfigArgs,
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a configuration over a range of one parameter
    Sweep {
        #[command(flatten)]
        config: ConfigArgs,
        #[arg(long, value_enum)]
        parameter: ParameterArg,
        /// First value, unit-tagged (e.g. "100 m3/h")
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// Last value, unit-tagged
        #[arg(long, allow_hyphen_values = true)]
        to: String,
        #[arg(long, default_value_t = 11)]
        points: usize,
        #[arg(long)]
        json: bool,
    },
    /// Write the active catalog to a YAML or JSON file
    ExportCatalog {
        /// Output path; `.json` selects JSON
        path: PathBuf,
    },
}

/// Configuration inputs. Quantities accept a unit suffix; bare numbers are
/// m³/h, bar and °C.
#[derive(Args)]
struct ConfigArgs {
    #[arg(long)]
    category: u32,
    #[arg(long)]
    application: u32,
    /// Flow rate (e.g. "200", "55 l/s")
    #[arg(long)]
    flow: String,
    /// Pressure (e.g. "5", "72 psi")
    #[arg(long)]
    pressure: String,
    /// Temperature (e.g. "45", "113 F")
    #[arg(long, allow_hyphen_values = true)]
    temperature: String,
}

impl ConfigArgs {
    fn to_config(&self) -> AppResult<ProductConfiguration> {
        Ok(ProductConfiguration {
            category_id: CategoryId::new(self.category),
            application_type: ApplicationTypeId::new(self.application),
            flow_rate: parse_quantity(&self.flow, Quantity::FlowRate)?,
            pressure: parse_quantity(&self.pressure, Quantity::Pressure)?,
            temperature: parse_quantity(&self.temperature, Quantity::Temperature)?,
        })
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ParameterArg {
    Flow,
    Pressure,
    Temperature,
}

impl From<ParameterArg> for SweepParameter {
    fn from(arg: ParameterArg) -> Self {
        match arg {
            ParameterArg::Flow => SweepParameter::FlowRate,
            ParameterArg::Pressure => SweepParameter::Pressure,
            ParameterArg::Temperature => SweepParameter::Temperature,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    tracing::debug!(catalog = ?cli.catalog, "starting");

    let service = match &cli.catalog {
        Some(path) => ProductService::from_path(path)?,
        None => ProductService::with_sample_catalog()?,
    };

    match cli.command {
        Commands::Categories => cmd_categories(&service),
        Commands::Applications { category } => cmd_applications(&service, category),
        Commands::Products { category, search } => {
            cmd_products(&service, category, search.as_deref())
        }
        Commands::Calculate { config, json } => cmd_calculate(&service, &config, json),
        Commands::Compare { config, with, json } => cmd_compare(&service, &config, &with, json),
        Commands::Summary { config, json } => cmd_summary(&service, &config, json),
        Commands::Sweep {
            config,
            parameter,
            from,
            to,
            points,
            json,
        } => cmd_sweep(&service, &config, parameter.into(), &from, &to, points, json),
        Commands::ExportCatalog { path } => cmd_export_catalog(&service, &path),
    }
}

fn cmd_categories(service: &ProductService) -> AppResult<()> {
    for category in service.categories() {
        println!("  {} - {}", category.id, category.name);
        if !category.description.is_empty() {
            println!("      {}", category.description);
        }
    }
    Ok(())
}

fn cmd_applications(service: &ProductService, category: Option<u32>) -> AppResult<()> {
    let types = service.application_types(category.map(CategoryId::new));

    if types.is_empty() {
        println!("No application types found");
    } else {
        for app in types {
            println!("  {} - {} (category {})", app.id, app.name, app.category_id);
        }
    }
    Ok(())
}

fn cmd_products(
    service: &ProductService,
    category: Option<u32>,
    search: Option<&str>,
) -> AppResult<()> {
    let category = category.map(CategoryId::new);
    let products: Vec<_> = match search {
        Some(query) => service
            .search(query)
            .into_iter()
            .filter(|p| category.is_none_or(|c| p.category_id == c))
            .collect(),
        None => service.products(category),
    };

    if products.is_empty() {
        println!("No products found");
        return Ok(());
    }

    for product in products {
        println!(
            "  {:>3}  {:<16} {:>6.0}-{:<6.0} m³/h  {:>5.1}-{:<5.1} bar",
            product.id.get(),
            product.name,
            product.min_flow_rate,
            product.max_flow_rate,
            product.min_pressure,
            product.max_pressure,
        );
    }
    Ok(())
}

fn cmd_calculate(service: &ProductService, args: &ConfigArgs, json: bool) -> AppResult<()> {
    let metrics = service.calculate(&args.to_config()?)?;

    if json {
        return print_json(&metrics);
    }

    println!("Efficiency:           {}%", metrics.efficiency);
    println!("Power consumption:    {:.1} kW", metrics.power_consumption);
    println!("Noise level:          {} dB", metrics.noise_level);
    println!(
        "Maintenance interval: {} months",
        metrics.maintenance_interval
    );
    println!("Estimated lifetime:   {} years", metrics.estimated_lifetime);
    println!(
        "Compared to average:  {:+} points",
        metrics.compared_to_average
    );
    println!();
    println!("Performance by load:");
    for point in &metrics.performance_by_load {
        println!("  {:>3}%  {:>3}%", point.load, point.performance);
    }
    println!();
    println!("Alternatives:");
    for product in &metrics.alternative_products {
        let marker = if product.is_selected { "*" } else { " " };
        println!(
            "  {} {:>3}  {:<16} {:>3}%  {:>5.1} kW  {:>6.1} m³/h  ${:.0}",
            marker,
            product.id.get(),
            product.name,
            product.efficiency,
            product.power_consumption,
            product.flow_rate,
            product.price,
        );
    }
    println!();
    println!("Within target power:  {}", flag(metrics.is_within_target_power));
    println!("Exceeds lifetime:     {}", flag(metrics.is_exceeds_lifetime));
    println!("Above target noise:   {}", flag(metrics.is_above_target_noise));
    println!("Extended maintenance: {}", flag(metrics.is_extended_maintenance));
    Ok(())
}

fn cmd_compare(
    service: &ProductService,
    args: &ConfigArgs,
    with: &[u32],
    json: bool,
) -> AppResult<()> {
    let with: Vec<ProductId> = with.iter().copied().map(ProductId::new).collect();
    let scores = service.compare(&args.to_config()?, &with)?;

    if json {
        return print_json(&scores);
    }

    println!(
        "  {:<16} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "product", "eff", "flow", "power", "cost", "maint", "noise"
    );
    for s in &scores {
        let name = if s.is_selected {
            format!("{} *", s.name)
        } else {
            s.name.clone()
        };
        println!(
            "  {:<16} {:>6.0} {:>6.0} {:>6.0} {:>6.0} {:>6.0} {:>6.0}",
            name,
            s.efficiency,
            s.flow_rate_score,
            s.power_efficiency,
            s.cost_efficiency,
            s.maintenance_score,
            s.noise_efficiency,
        );
    }
    Ok(())
}

fn cmd_summary(service: &ProductService, args: &ConfigArgs, json: bool) -> AppResult<()> {
    let summary = service.summary(&args.to_config()?)?;

    if json {
        return print_json(&summary);
    }

    let config = &summary.configuration;
    println!("Category:     {}", summary.category_name);
    println!("Application:  {}", summary.application_type_name);
    println!(
        "Parameters:   {} m³/h, {} bar, {} °C",
        config.flow_rate, config.pressure, config.temperature
    );
    if let Some(product) = &summary.selected_product {
        println!("Product:      {} ({} series)", product.name, product.series);
    }
    println!(
        "Metrics:      {}% efficiency, {:.1} kW, service every {} months, {} years",
        summary.efficiency,
        summary.power_consumption,
        summary.maintenance_interval,
        summary.estimated_lifetime
    );
    println!();
    println!("{}", summary.recommendation_text);
    Ok(())
}

fn cmd_sweep(
    service: &ProductService,
    args: &ConfigArgs,
    parameter: SweepParameter,
    from: &str,
    to: &str,
    points: usize,
    json: bool,
) -> AppResult<()> {
    let sweep = SweepDefinition::from_text(parameter, from, to, points)?;

    let result = service.sweep(&args.to_config()?, &sweep)?;

    if json {
        return print_json(&result);
    }

    println!(
        "  {:>10} {:>6} {:>9} {:>6}",
        parameter.quantity().canonical_unit(),
        "eff %",
        "power kW",
        "dB"
    );
    for point in &result.points {
        println!(
            "  {:>10.2} {:>6} {:>9.1} {:>6}",
            point.value, point.efficiency, point.power_consumption, point.noise_level
        );
    }
    Ok(())
}

fn cmd_export_catalog(service: &ProductService, path: &Path) -> AppResult<()> {
    service.export_catalog(path)?;
    println!("✓ Catalog written to {}", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let text =
        serde_json::to_string_pretty(value).map_err(|e| AppError::Serialization(e.to_string()))?;
    println!("{text}");
    Ok(())
}

fn flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

use quake_energy::energy::{validate_inputs, ComparisonResult, EnergyReport};
use quake_energy::output::{render_comparison, render_energy, ColorMode, OutputFormat, RenderOptions};
use quake_energy::verbose;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Energy released by one or more magnitudes
    Energy {
        /// Moment magnitudes (Mw) between 1.0 and 10.0
        #[arg(required = true, allow_hyphen_values = true)]
        magnitudes: Vec<String>,
    },
    /// How many times stronger one magnitude is than another
    Compare {
        /// First magnitude (Mw)
        #[arg(allow_hyphen_values = true)]
        first: String,
        /// Second magnitude (Mw)
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "quake-energy")]
#[command(about = "Convert earthquake magnitudes into energy equivalents", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/quake-energy/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// When to use colors (overrides config)
    #[arg(long, global = true, value_enum)]
    color: Option<ColorMode>,

    /// Without a command, an interactive mode selector is started
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    quake_energy::log::set_verbose(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);

    let rendered = match cli.command {
        Some(Commands::Init) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            if let Err(e) = quake_energy::config::init::run_init_wizard(&mut input, &mut out, config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_IO);
            }
            std::process::exit(EXIT_SUCCESS);
        }
        Some(Commands::Energy { magnitudes }) => {
            let options = load_render_options(config_path, cli.output, cli.color);
            let names: Vec<String> = (1..=magnitudes.len()).map(|i| format!("m{}", i)).collect();
            let inputs: Vec<(&str, &str)> = names
                .iter()
                .zip(&magnitudes)
                .map(|(name, raw)| (name.as_str(), raw.as_str()))
                .collect();
            let magnitudes = exit_on_input_errors(validate_inputs(&inputs));

            let reports: Vec<EnergyReport> = magnitudes
                .into_iter()
                .map(EnergyReport::from_magnitude)
                .collect();
            verbose!("Calculated {} energy reports", reports.len());
            render_energy(&reports, &options)
        }
        Some(Commands::Compare { first, second }) => {
            let options = load_render_options(config_path, cli.output, cli.color);
            let magnitudes = exit_on_input_errors(validate_inputs(&[
                ("m1", first.as_str()),
                ("m2", second.as_str()),
            ]));
            let result = ComparisonResult::new(magnitudes[0], magnitudes[1]);
            verbose!("Relative factor: {}", result.factor);
            render_comparison(&result, &options)
        }
        None => {
            let options = load_render_options(config_path, cli.output, cli.color);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            if let Err(e) = quake_energy::interactive::run(&mut input, &mut out, &options) {
                eprintln!("{:#}", e);
                std::process::exit(EXIT_IO);
            }
            std::process::exit(EXIT_SUCCESS);
        }
    };

    match rendered {
        Ok(text) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{}", text) {
                eprintln!("Failed to write output: {}", e);
                std::process::exit(EXIT_IO);
            }
        }
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(EXIT_IO);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate config, then apply command-line overrides.
/// Exits with EXIT_CONFIG on any config problem.
fn load_render_options(
    config_path: Option<PathBuf>,
    output: Option<OutputFormat>,
    color: Option<ColorMode>,
) -> RenderOptions {
    let config = match quake_energy::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = quake_energy::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let options = RenderOptions {
        format: output.or(config.output).unwrap_or_default(),
        numbers: config.number_format(),
        colors: color.or(config.color).unwrap_or_default().enabled(),
    };
    verbose!(
        "Output: {:?}, colors: {}, separators: '{}' '{}'",
        options.format,
        options.colors,
        options.numbers.thousands_separator,
        options.numbers.decimal_separator
    );
    options
}

fn exit_on_input_errors<T>(result: Result<T, Vec<String>>) -> T {
    match result {
        Ok(value) => value,
        Err(errors) => {
            eprintln!("Input errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_VALIDATION);
        }
    }
}

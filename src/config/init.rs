use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use clap::ValueEnum;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use super::{get_config_path, validate_config, Config, FormatConfig};
use crate::output::{ColorMode, OutputFormat};
use crate::prompt::{prompt_with_default, prompt_yes_no};

/// Prompt until the answer names one of the enum's values (case-insensitive).
fn prompt_choice<T, R, W>(input: &mut R, out: &mut W, message: &str, default: &str) -> Result<T>
where
    T: ValueEnum,
    R: BufRead,
    W: Write,
{
    let names: Vec<String> = T::value_variants()
        .iter()
        .filter_map(|v| v.to_possible_value())
        .map(|v| v.get_name().to_string())
        .collect();
    loop {
        let answer = prompt_with_default(input, out, message, default)?;
        match T::from_str(&answer, true) {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(out, "  Invalid: choose one of {}. Try again.", names.join(", "))?,
        }
    }
}

/// Answers are trimmed, so a blank separator is typed as "space".
fn separator_answer(answer: String) -> String {
    if answer.eq_ignore_ascii_case("space") {
        " ".to_string()
    } else {
        answer
    }
}

/// Write a config file atomically, creating parent directories as needed.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, it is offered as the config file path.
/// Otherwise the default config path is offered.
/// Returns the path written, or None if the user declined to overwrite.
pub fn run_init_wizard<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    writeln!(out, "quake-energy configuration")?;
    writeln!(out, "==========================")?;
    writeln!(out)?;

    // 1. Number separators, re-asked together until they are consistent
    writeln!(out, "Large numbers are grouped in thousands, e.g. 15,080,242.459.")?;
    writeln!(out, "Type 'space' for a blank separator.")?;
    let format = loop {
        let thousands = separator_answer(prompt_with_default(input, out, "Thousands separator", ",")?);
        let decimal = separator_answer(prompt_with_default(input, out, "Decimal separator", ".")?);
        let candidate = Config {
            format: Some(FormatConfig {
                thousands_separator: Some(thousands),
                decimal_separator: Some(decimal),
            }),
            ..Config::default()
        };
        match validate_config(&candidate) {
            Ok(()) => break candidate.format,
            Err(errors) => {
                for error in errors {
                    writeln!(out, "  Invalid: {}", error)?;
                }
                writeln!(out, "  Try again.")?;
            }
        }
    };

    // 2. Output defaults
    writeln!(out)?;
    let output: OutputFormat = prompt_choice(input, out, "Output format (list, tsv, json)", "list")?;
    let color: ColorMode = prompt_choice(input, out, "Color (auto, always, never)", "auto")?;

    // 3. Config path
    let default_config_path = match default_path {
        Some(p) => p,
        None => get_config_path()?,
    };
    writeln!(out)?;
    let path_str = prompt_with_default(
        input,
        out,
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            input,
            out,
            &format!("Config already exists at {}. Overwrite?", config_path.display()),
            false,
        )?;
        if !overwrite {
            writeln!(out, "Aborted.")?;
            return Ok(None);
        }
    }

    // 4. Write config
    let config = Config {
        format,
        output: Some(output),
        color: Some(color),
    };
    write_config(&config_path, &config)?;

    writeln!(out)?;
    writeln!(out, "Config written to {}", config_path.display())?;
    Ok(Some(config_path))
}

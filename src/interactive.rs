//! Prompt-driven mode: pick "single" or "compare", enter magnitudes, see
//! results, repeat until the user quits.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::energy::{ComparisonResult, EnergyReport, Magnitude, ValidationError};
use crate::output::{render_comparison, render_energy, RenderOptions};
use crate::prompt::{prompt, prompt_or_eof, prompt_yes_no};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SelectMode,
    Single,
    Compare,
    Quit,
}

impl Screen {
    /// Map a selector answer to the next screen. None means unrecognized.
    pub fn from_choice(choice: &str) -> Option<Screen> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "s" | "single" => Some(Screen::Single),
            "2" | "c" | "compare" => Some(Screen::Compare),
            "q" | "quit" | "exit" => Some(Screen::Quit),
            _ => None,
        }
    }
}

/// Ask for a magnitude until a valid one is entered.
pub fn read_magnitude<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> Result<Magnitude> {
    loop {
        let answer = prompt(input, out, message)?;
        match Magnitude::parse(&answer) {
            Ok(m) => return Ok(m),
            Err(ValidationError::Empty) => continue,
            Err(e) => writeln!(out, "  Invalid: {}. Try again.", e)?,
        }
    }
}

/// Run the mode selector loop until the user quits.
pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W, options: &RenderOptions) -> Result<()> {
    let mut screen = Screen::SelectMode;

    loop {
        screen = match screen {
            Screen::SelectMode => {
                writeln!(out, "Select mode:")?;
                writeln!(out, "  1) single   energy released by one magnitude")?;
                writeln!(out, "  2) compare  relative strength of two magnitudes")?;
                writeln!(out, "  q) quit")?;
                // Closing the input at the selector (Ctrl-D) quits
                match prompt_or_eof(input, out, "> ")? {
                    None => {
                        writeln!(out)?;
                        Screen::Quit
                    }
                    Some(choice) => match Screen::from_choice(&choice) {
                        Some(next) => next,
                        None => {
                            writeln!(out, "  Unknown choice '{}'.", choice)?;
                            Screen::SelectMode
                        }
                    },
                }
            }
            Screen::Single => {
                let magnitude = read_magnitude(input, out, "Magnitude (1.0-10.0): ")?;
                crate::verbose!("Calculating energy for Mw {}", magnitude);
                let report = EnergyReport::from_magnitude(magnitude);
                writeln!(out, "{}", render_energy(&[report], options)?)?;
                next_after_result(input, out)?
            }
            Screen::Compare => {
                let first = read_magnitude(input, out, "First magnitude (1.0-10.0): ")?;
                let second = read_magnitude(input, out, "Second magnitude (1.0-10.0): ")?;
                crate::verbose!("Comparing Mw {} with Mw {}", first, second);
                let result = ComparisonResult::new(first, second);
                writeln!(out, "{}", render_comparison(&result, options)?)?;
                next_after_result(input, out)?
            }
            Screen::Quit => return Ok(()),
        };
    }
}

fn next_after_result<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Screen> {
    writeln!(out)?;
    if prompt_yes_no(input, out, "Another calculation?", true)? {
        Ok(Screen::SelectMode)
    } else {
        Ok(Screen::Quit)
    }
}

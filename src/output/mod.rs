pub mod formatter;
pub mod options;

pub use formatter::{
    format_comparison, format_comparison_tsv, format_energy_list, format_energy_tsv,
    render_comparison, render_energy,
};
pub use options::{should_use_colors, ColorMode, OutputFormat, RenderOptions};

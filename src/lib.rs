//! Prints an ASCII-art banner next to a short info block, colored with the
//! current pywal palette.

pub mod ascii;
pub mod config;
pub mod error;
pub mod info;
pub mod layout;
pub mod palette;
pub mod template;
pub mod ui;

pub use config::Config;

use ascii::{ArtBlock, load_ascii_art};
use info::InfoBlock;
use palette::Palette;
use std::io::Write;
use template::{Bindings, color_bindings, substitute};
use ui::ColorMode;

/// Composes the banner rows, or nothing when there is no art. Art is padded
/// while its placeholders are still in place, so rows sharing the same
/// placeholders line up once they are turned into markers.
pub fn banner_lines(art: &ArtBlock, info: &InfoBlock, bindings: &Bindings) -> Vec<String> {
    if art.is_empty() {
        return Vec::new();
    }
    layout::compose(&art.lines(), info.lines(), art.width)
        .iter()
        .map(|row| substitute(row, bindings))
        .collect()
}

pub fn generate_output_with<W: Write>(
    config: &Config,
    palette: &Palette,
    out: &mut W,
    mode: ColorMode,
) -> anyhow::Result<()> {
    let bindings = color_bindings(palette);
    let art = load_ascii_art(config, out);
    if art.is_empty() {
        tracing::debug!("no ascii art, nothing to print");
        return Ok(());
    }
    let info = InfoBlock::from_config(config, &bindings);
    let lines = banner_lines(&art, &info, &bindings);
    ui::render(&lines, out, mode)?;
    Ok(())
}

/// Prints the banner to stdout. Notices share the stream with the banner.
pub fn generate_output(config: &Config, mode: ColorMode) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    let palette = palette::resolve(config, &mut out);
    generate_output_with(config, &palette, &mut out, mode)
}

use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::tty::IsTty;
use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => io::stdout().is_tty(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Foreground(Color),
    Bold,
    Reset,
}

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\[\]]+)\]").expect("static regex"))
}

fn parse_marker(token: &str) -> Option<Marker> {
    let token = token.trim();
    match token {
        "reset" | "/" => return Some(Marker::Reset),
        "bold" => return Some(Marker::Bold),
        _ => {}
    }
    if token.starts_with('#') {
        return parse_hex_color(token).map(Marker::Foreground);
    }
    // crossterm knows names like "red", "dark_blue", "grey".
    Color::try_from(token).ok().map(Marker::Foreground)
}

/// Replaces style markers with ANSI sequences, or drops them when `color` is
/// off. Brackets that aren't a known style are printed as written.
pub fn style_line(line: &str, color: bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for caps in marker_regex().captures_iter(line) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Some(marker) = parse_marker(token.as_str()) else {
            continue;
        };
        out.push_str(&line[last..whole.start()]);
        last = whole.end();
        if !color {
            continue;
        }
        match marker {
            Marker::Foreground(c) => out.push_str(&format!("{}", SetForegroundColor(c))),
            Marker::Bold => out.push_str(&format!("{}", SetAttribute(Attribute::Bold))),
            Marker::Reset => {
                out.push_str(&format!("{}", SetAttribute(Attribute::Reset)));
                out.push_str(&format!("{}", ResetColor));
            }
        }
    }
    out.push_str(&line[last..]);
    if color {
        out.push_str(&format!("{}", SetAttribute(Attribute::Reset)));
    }
    out
}

pub fn render<W: Write>(lines: &[String], out: &mut W, mode: ColorMode) -> io::Result<()> {
    let color = mode.enabled();
    for line in lines {
        writeln!(out, "{}", style_line(line, color))?;
    }
    out.flush()
}

/// Writes a user-facing notice line. A failed write is logged, never raised.
pub fn notice<W: Write>(out: &mut W, message: &str) {
    if let Err(e) = writeln!(out, "{message}") {
        tracing::warn!(error = %e, notice = message, "failed to print notice");
    }
}

pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() == 6 {
        if let Ok(rgb) = u32::from_str_radix(hex, 16) {
            let r = ((rgb >> 16) & 0xFF) as u8;
            let g = ((rgb >> 8) & 0xFF) as u8;
            let b = (rgb & 0xFF) as u8;
            return Some(Color::Rgb { r, g, b });
        }
    }
    None
}

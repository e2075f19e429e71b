//! `{name}` placeholder substitution.
//!
//! Names starting with [`COLOR_PREFIX`] that are bound to text become style
//! markers (`[value]`) for the renderer; everything else is inserted as is.
//! Replacement is literal, one binding at a time in binding order, and
//! placeholders without a binding are left alone.

use crate::palette::Palette;
use std::fmt;

pub const COLOR_PREFIX: &str = "cl";

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// Ordered name to value table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding, replacing the value in place if the name is taken.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn replacement(name: &str, value: &Value) -> String {
    match value {
        Value::Text(s) if name.starts_with(COLOR_PREFIX) => format!("[{s}]"),
        other => other.to_string(),
    }
}

pub fn substitute(template: &str, bindings: &Bindings) -> String {
    let mut out = template.to_string();
    for (name, value) in bindings.iter() {
        let token = format!("{{{name}}}");
        if out.contains(&token) {
            out = out.replace(&token, &replacement(name, value));
        }
    }
    out
}

/// `cl0`..`cl15` from the palette, `cl16` for reset and `clb` for bold.
pub fn color_bindings(palette: &Palette) -> Bindings {
    let mut bindings = Bindings::new();
    for (slot, (_, color)) in palette.iter().enumerate() {
        bindings.insert(format!("{COLOR_PREFIX}{slot}"), color);
    }
    bindings.insert("cl16", "reset");
    bindings.insert("clb", "bold");
    bindings
}

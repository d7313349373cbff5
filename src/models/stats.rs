//! Aggregate creator metrics.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metrics served by `/creator/stats`. The backend decides which metrics exist,
/// so they are kept by name and rendered generically.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct CreatorStats(Map<String, Value>);

/// One rendered metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl CreatorStats {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn rows(&self) -> Vec<StatRow> {
        self.0
            .iter()
            .map(|(key, value)| StatRow {
                key: key.clone(),
                label: format_label(key),
                value: format_value(value),
            })
            .collect()
    }
}

/// Humanise a metric key: `totalViews` and `total_views` both become `Total Views`.
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;
    for c in key.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if prev.is_some_and(|p| p.is_ascii_lowercase()) && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
        prev = Some(c);
    }

    spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a metric value; numbers get thousands separators and at most three decimals.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                group_thousands(&i.unsigned_abs().to_string(), i < 0)
            } else if let Some(f) = n.as_f64() {
                let rendered = format!("{:.3}", f.abs());
                let rendered = rendered.trim_end_matches('0').trim_end_matches('.');
                let (int_part, frac_part) = match rendered.split_once('.') {
                    Some((i, f)) => (i, Some(f)),
                    None => (rendered, None),
                };
                let grouped = group_thousands(int_part, f < 0.0);
                match frac_part {
                    Some(frac) => format!("{}.{}", grouped, frac),
                    None => grouped,
                }
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Null => "N/A".to_string(),
        other => other.to_string(),
    }
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use getarg::ArgStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Int,
    Bool,
}

/// Typed value returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LookupReport {
    pub key: String,
    pub kind: Kind,
    pub present: bool,
    pub value: Value,
}

fn parse_bool_default(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        other => bail!("invalid boolean default '{other}' (expected true/false/1/0)"),
    }
}

/// Run one typed lookup against `store`.
///
/// `default` is parsed according to `kind`; `None` means the kind's zero value.
pub fn lookup(store: &ArgStore, key: &str, kind: Kind, default: Option<&str>) -> Result<LookupReport> {
    let value = match kind {
        Kind::String => Value::String(store.get_str(key, default.unwrap_or(""))),
        Kind::Int => {
            let default = match default {
                Some(raw) => raw
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("invalid integer default '{raw}'"))?,
                None => 0,
            };
            Value::Int(store.get_int(key, default))
        }
        Kind::Bool => {
            let default = match default {
                Some(raw) => parse_bool_default(raw)?,
                None => false,
            };
            Value::Bool(store.get_bool(key, default))
        }
    };

    tracing::debug!(key, ?kind, %value, "lookup");

    Ok(LookupReport {
        key: key.to_string(),
        kind,
        present: store.contains(key),
        value,
    })
}

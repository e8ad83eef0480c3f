use std::io::{self, Write};

use serde::Serialize;

use crate::record::FieldValue;

/// Reply to a single command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A single field value
    Value(FieldValue),
    /// A record or the whole store, as JSON
    Json(serde_json::Value),
    /// Nothing stored under the requested key or field
    Nil,
    /// Errors
    Error(String),
}

impl Reply {
    /// Create an error reply
    pub fn error(msg: impl Into<String>) -> Self {
        Reply::Error(msg.into())
    }

    /// Serialize `value` into a JSON reply
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Reply::Json(json),
            Err(e) => Reply::error(format!("ERR {}", e)),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Reply::Error(_))
    }

    /// Render the reply as a single line of text
    pub fn encode(&self) -> String {
        match self {
            Reply::Value(FieldValue::Text(s)) => s.clone(),
            Reply::Value(FieldValue::Number(n)) => n.to_string(),
            Reply::Value(FieldValue::List(items)) => {
                serde_json::Value::from(items.clone()).to_string()
            }
            Reply::Json(json) => json.to_string(),
            Reply::Nil => "(nil)".to_string(),
            Reply::Error(e) => e.clone(),
        }
    }

    /// Write the rendered reply followed by a newline
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.encode())
    }
}

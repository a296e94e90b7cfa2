use serde_json::Value;

/// Result of decoding a JSON-encoded list field.
///
/// Decoding never fails: anything that is not a JSON array decodes to `Empty`.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodedList {
    Parsed(Vec<Value>),
    Empty,
}

impl EncodedList {
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            EncodedList::Parsed(values) => values,
            EncodedList::Empty => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            EncodedList::Parsed(values) => values.is_empty(),
            EncodedList::Empty => true,
        }
    }

    /// Iterate over the string elements only. Other element types are skipped,
    /// since they can never match a weight table entry.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        let values: &[Value] = match self {
            EncodedList::Parsed(values) => values,
            EncodedList::Empty => &[],
        };
        values.iter().filter_map(Value::as_str)
    }
}

/// Decode a raw encoded-list field.
///
/// Returns `Empty` when the value is absent, blank, not valid JSON, or valid
/// JSON whose root is not an array. Array elements are returned untouched.
pub fn decode_list(raw: Option<&str>) -> EncodedList {
    let raw = match raw {
        Some(s) if !s.is_empty() => s,
        _ => return EncodedList::Empty,
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(values)) => EncodedList::Parsed(values),
        _ => EncodedList::Empty,
    }
}

/// Encode a list of strings the way list fields are stored.
pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
    let values: Vec<Value> = items
        .iter()
        .map(|s| Value::String(s.as_ref().to_string()))
        .collect();
    Value::Array(values).to_string()
}

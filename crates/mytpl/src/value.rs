//! Runtime values for template arguments.

/// A runtime template argument.
///
/// Callers construct these explicitly (usually through the `From` impls) and
/// pass them positionally to [`build_query`](crate::build_query). Maps to the
/// value forms the template grammar can render.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL
    Null,

    /// Boolean, rendered as `1` / `0`
    Bool(bool),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit float
    Float(f64),

    /// Text, rendered as a single-quoted literal
    Text(String),

    /// An ordered container of positional and/or named entries
    Array(Vec<Entry>),

    /// Marker that suppresses the next conditional block when it is the
    /// last argument. Obtain it via [`skip()`]; it never renders.
    Skip,
}

/// One entry of a [`Value::Array`] container.
///
/// Containers keep their entries in insertion order. A positional entry
/// renders as a bare literal, a named entry as `` `name` = literal ``; the
/// two kinds may be mixed within one container.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Positional entry (sequential integer key in the source model)
    Item(Value),

    /// Named entry (string key)
    Field(String, Value),
}

impl Value {
    /// Returns true if this is a NULL value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is the skip marker.
    pub fn is_skip(&self) -> bool {
        matches!(self, Value::Skip)
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Text(_) => "string",
            Value::Array(_) => "array",
            Value::Skip => "skip marker",
        }
    }
}

impl Entry {
    /// Create a positional entry.
    pub fn item(value: impl Into<Value>) -> Self {
        Entry::Item(value.into())
    }

    /// Create a named entry.
    pub fn field(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Entry::Field(name.into(), value.into())
    }

    /// The entry's value, regardless of kind.
    pub fn value(&self) -> &Value {
        match self {
            Entry::Item(v) => v,
            Entry::Field(_, v) => v,
        }
    }
}

/// Returns the marker that omits the next conditional block.
///
/// Pass it as the **last** argument to [`build_query`](crate::build_query)
/// to drop the `{ ... }` fragment entirely. Stateless and side-effect-free.
pub fn skip() -> Value {
    Value::Skip
}

// Convenient From impls
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<Vec<Entry>> for Value {
    fn from(entries: Vec<Entry>) -> Self {
        Value::Array(entries)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values.into_iter().map(Entry::Item).collect())
    }
}

impl From<Vec<(String, Value)>> for Value {
    fn from(fields: Vec<(String, Value)>) -> Self {
        Value::Array(
            fields
                .into_iter()
                .map(|(name, v)| Entry::Field(name, v))
                .collect(),
        )
    }
}

impl From<Vec<(&str, Value)>> for Value {
    fn from(fields: Vec<(&str, Value)>) -> Self {
        Value::Array(
            fields
                .into_iter()
                .map(|(name, v)| Entry::Field(name.to_owned(), v))
                .collect(),
        )
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(items.iter().map(|v| Entry::Item(v.into())).collect())
            }
            serde_json::Value::Object(map) => Value::Array(
                map.iter()
                    .map(|(k, v)| Entry::Field(k.clone(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        (&v).into()
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDateTime> for Value {
    fn from(v: chrono::NaiveDateTime) -> Self {
        Value::Text(v.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Value {
    fn from(v: chrono::NaiveDate) -> Self {
        Value::Text(v.format("%Y-%m-%d").to_string())
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        v.naive_utc().into()
    }
}

//! JSON rendering of runtime values
//!
//! Values render as `{"@type": <qualified type>, "value": <payload>}`.
//! Quantities add a `unit` member; lists render their elements recursively.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::{CqlList, CqlValue};

impl Serialize for CqlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = if matches!(self, Self::Quantity(_)) { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("@type", &self.runtime_type().qualified_name())?;
        match self {
            Self::Null(_) => map.serialize_entry("value", &())?,
            Self::Boolean(b) => map.serialize_entry("value", b)?,
            Self::Integer(i) => map.serialize_entry("value", i)?,
            Self::Long(l) => map.serialize_entry("value", l)?,
            Self::Decimal(d) => map.serialize_entry("value", d)?,
            Self::String(s) => map.serialize_entry("value", s)?,
            Self::Quantity(q) => {
                map.serialize_entry("value", &q.value)?;
                map.serialize_entry("unit", &q.unit)?;
            }
            Self::List(list) => map.serialize_entry("value", &Elements(list))?,
        }
        map.end()
    }
}

struct Elements<'a>(&'a CqlList);

impl Serialize for Elements<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for elem in self.0.iter() {
            seq.serialize_element(elem)?;
        }
        seq.end()
    }
}

impl CqlValue {
    /// Render this value as a JSON tree
    pub fn to_json(&self) -> serde_json::Value {
        // to_value only fails on non-string map keys, never emitted here
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

use serde::{
    ser::{Serialize, SerializeMap, SerializeSeq},
    Serializer,
};

use crate::value::Value;

/// Renders a [`Value`] as JSON text. Never fails.
///
/// Escaping is minimal: only `\` and `"` are escaped in strings, everything
/// else passes through verbatim. Non-finite numbers render as `null`.
///
/// ```rust
/// use json_codec::{stringify, value::{Map, Value}};
///
/// let mut members = Map::new();
/// members.insert("b".to_string(), Value::Number(2.0));
/// members.insert("a".to_string(), Value::Number(1.0));
///
/// assert_eq!(stringify(&Value::Object(members)), r#"{"b":2,"a":1}"#);
/// ```
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();

    write_value(&mut out, value);

    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(num) => write_number(out, *num),
        Value::String(str) => write_string(out, str),
        Value::Array(array) => {
            out.push('[');

            for (index, element) in array.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }

                write_value(out, element);
            }

            out.push(']');
        }
        Value::Object(obj) => {
            out.push('{');

            for (index, (key, member)) in obj.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }

                write_string(out, key);
                out.push(':');
                write_value(out, member);
            }

            out.push('}');
        }
    }
}

fn write_number(out: &mut String, num: f64) {
    if num.is_finite() {
        out.push_str(&num.to_string());
    } else {
        out.push_str("null");
    }
}

fn write_string(out: &mut String, str: &str) {
    out.push('"');

    for c in str.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }

    out.push('"');
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(bool) => serializer.serialize_bool(*bool),
            Self::Number(num) => serializer.serialize_f64(*num),
            Self::String(str) => serializer.serialize_str(str),
            Self::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;

                for v in array {
                    seq.serialize_element(v)?;
                }

                seq.end()
            }
            Self::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;

                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }

                map.end()
            }
        }
    }
}

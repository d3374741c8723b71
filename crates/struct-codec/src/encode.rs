//! Tolerant encoder.
//!
//! Known fields are written in declared order. An extra sharing a field's
//! wire key replaces that field's value in place; the remaining extras follow
//! in insertion order.

use serde_json::{Map, Value};
use tracing::debug;

use crate::descriptor::{Record, SlotEncodeError, TypeDescriptor};
use crate::error::EncodeError;
use crate::extras::Extras;
use crate::value::RawValue;

impl<T> TypeDescriptor<T> {
    pub fn encode_value(&self, value: &T, extras: &Extras) -> Result<RawValue, EncodeError> {
        self.encode_object(value, extras).inspect_err(|err| {
            debug!(type_name = self.name(), error = %err, "encode failed");
        })
    }

    pub fn encode_vec(&self, value: &T, extras: &Extras) -> Result<Vec<u8>, EncodeError> {
        let encoded = self.encode_value(value, extras)?;
        Ok(serde_json::to_vec(&encoded)?)
    }

    pub fn encode_string(&self, value: &T, extras: &Extras) -> Result<String, EncodeError> {
        let encoded = self.encode_value(value, extras)?;
        Ok(serde_json::to_string(&encoded)?)
    }

    fn encode_object(&self, value: &T, extras: &Extras) -> Result<RawValue, EncodeError> {
        let mut out = Map::new();

        for field in self.fields() {
            let key = field.wire_key();
            if let Some(extra) = extras.get(key) {
                out.insert(key.to_string(), extra.clone());
                continue;
            }
            match field.slot.encode(value) {
                Ok(Some(encoded)) => {
                    out.insert(key.to_string(), encoded);
                }
                Ok(None) => {}
                Err(SlotEncodeError::Unrepresentable) => {
                    return Err(EncodeError::Unrepresentable {
                        type_name: self.name(),
                        field: field.name(),
                        wire_key: key,
                    });
                }
                Err(SlotEncodeError::Nested(err)) => return Err(err),
            }
        }

        for (key, extra) in extras {
            if self.field(key).is_none() {
                out.insert(key.clone(), extra.clone());
            }
        }

        Ok(Value::Object(out))
    }
}

pub(crate) fn encode_nested<R: Record>(record: &R) -> Result<RawValue, EncodeError> {
    R::descriptor().encode_object(record, record.extras())
}

/// Encodes a record, including its extras, to JSON bytes.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, EncodeError> {
    R::descriptor().encode_vec(record, record.extras())
}

pub fn encode_string<R: Record>(record: &R) -> Result<String, EncodeError> {
    R::descriptor().encode_string(record, record.extras())
}

pub fn encode_value<R: Record>(record: &R) -> Result<RawValue, EncodeError> {
    R::descriptor().encode_value(record, record.extras())
}

/// Pretty-printed JSON of a record, for debugging output.
///
/// Never fails: an unencodable record renders as a marker naming the error.
pub fn to_debug_string<R: Record>(record: &R) -> String {
    match encode_value(record).and_then(|v| Ok(serde_json::to_string_pretty(&v)?)) {
        Ok(text) => text,
        Err(err) => format!("<{}: unrepresentable ({err})>", R::descriptor().name()),
    }
}

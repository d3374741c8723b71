//! Field and type descriptors.
//!
//! A [`TypeDescriptor`] is the static table generated code builds once per
//! resource shape. Each [`FieldDescriptor`] binds a wire key to an accessor
//! into the owning struct's `Option<_>` storage.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::decode::decode_nested;
use crate::encode::encode_nested;
use crate::error::{DecodeError, EncodeError};
use crate::extras::Extras;
use crate::query::QueryOptions;
use crate::value::{Mismatch, RawValue, ValueKind, WireValue};

/// A struct the codec can decode into and encode from.
///
/// Implemented by generated per-resource code. The descriptor is built once
/// (typically in a `OnceLock`) and never mutated afterwards.
pub trait Record: Default + Sized + 'static {
    fn descriptor() -> &'static TypeDescriptor<Self>;
    fn extras(&self) -> &Extras;
    fn extras_mut(&mut self) -> &mut Extras;
}

/// How a field takes part in query-parameter projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Emit `(wire_key, value)`.
    Value,
    /// Recurse into a nested object, prefixing child keys.
    Flatten,
    /// Never projected.
    Skip,
}

// -------------------------------------------------------------------------
// Accessors

pub(crate) enum SlotDecodeError {
    Mismatch(Mismatch),
    Nested(DecodeError),
}

pub(crate) enum SlotEncodeError {
    Unrepresentable,
    Nested(EncodeError),
}

/// Type-erased read/write handle into one field of `T`.
pub(crate) trait FieldSlot<T>: Send + Sync {
    fn is_set(&self, target: &T) -> bool;
    fn decode(&self, target: &mut T, value: RawValue) -> Result<(), SlotDecodeError>;
    fn encode(&self, target: &T) -> Result<Option<RawValue>, SlotEncodeError>;
    fn project(
        &self,
        target: &T,
        key: &str,
        mode: QueryMode,
        options: &QueryOptions,
        out: &mut Vec<(String, String)>,
    );
}

struct ScalarSlot<T, V> {
    get: fn(&T) -> &Option<V>,
    get_mut: fn(&mut T) -> &mut Option<V>,
}

impl<T, V: WireValue> FieldSlot<T> for ScalarSlot<T, V> {
    fn is_set(&self, target: &T) -> bool {
        (self.get)(target).as_ref().is_some_and(|v| !v.is_null())
    }

    fn decode(&self, target: &mut T, value: RawValue) -> Result<(), SlotDecodeError> {
        let decoded = V::from_wire(value).map_err(SlotDecodeError::Mismatch)?;
        *(self.get_mut)(target) = Some(decoded);
        Ok(())
    }

    fn encode(&self, target: &T) -> Result<Option<RawValue>, SlotEncodeError> {
        match (self.get)(target) {
            None => Ok(None),
            // A held null reads back as absent, so it is written as absent.
            Some(v) if v.is_null() => Ok(None),
            Some(v) => v
                .to_wire()
                .map(Some)
                .ok_or(SlotEncodeError::Unrepresentable),
        }
    }

    fn project(
        &self,
        target: &T,
        key: &str,
        mode: QueryMode,
        _options: &QueryOptions,
        out: &mut Vec<(String, String)>,
    ) {
        if mode == QueryMode::Skip {
            return;
        }
        if let Some(text) = (self.get)(target).as_ref().and_then(WireValue::to_query) {
            out.push((key.to_string(), text));
        }
    }
}

struct ObjectSlot<T, R> {
    get: fn(&T) -> &Option<R>,
    get_mut: fn(&mut T) -> &mut Option<R>,
}

impl<T, R: Record> FieldSlot<T> for ObjectSlot<T, R> {
    fn is_set(&self, target: &T) -> bool {
        (self.get)(target).is_some()
    }

    fn decode(&self, target: &mut T, value: RawValue) -> Result<(), SlotDecodeError> {
        let Value::Object(map) = value else {
            return Err(SlotDecodeError::Mismatch(Mismatch::of(&value)));
        };
        let nested = decode_nested::<R>(map).map_err(SlotDecodeError::Nested)?;
        *(self.get_mut)(target) = Some(nested);
        Ok(())
    }

    fn encode(&self, target: &T) -> Result<Option<RawValue>, SlotEncodeError> {
        match (self.get)(target) {
            None => Ok(None),
            Some(nested) => encode_nested(nested)
                .map(Some)
                .map_err(SlotEncodeError::Nested),
        }
    }

    fn project(
        &self,
        target: &T,
        key: &str,
        mode: QueryMode,
        options: &QueryOptions,
        out: &mut Vec<(String, String)>,
    ) {
        if mode != QueryMode::Flatten {
            return;
        }
        if let Some(nested) = (self.get)(target) {
            R::descriptor().project_into(nested, Some(key), options, out);
        }
    }
}

struct ObjectListSlot<T, R> {
    get: fn(&T) -> &Option<Vec<R>>,
    get_mut: fn(&mut T) -> &mut Option<Vec<R>>,
}

impl<T, R: Record> FieldSlot<T> for ObjectListSlot<T, R> {
    fn is_set(&self, target: &T) -> bool {
        (self.get)(target).is_some()
    }

    fn decode(&self, target: &mut T, value: RawValue) -> Result<(), SlotDecodeError> {
        let Value::Array(items) = value else {
            return Err(SlotDecodeError::Mismatch(Mismatch::of(&value)));
        };
        let mut decoded = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let Value::Object(map) = item else {
                return Err(SlotDecodeError::Mismatch(
                    Mismatch::of(&item).at(i.to_string()),
                ));
            };
            let nested = decode_nested::<R>(map)
                .map_err(|e| SlotDecodeError::Nested(e.nested_under(&i.to_string())))?;
            decoded.push(nested);
        }
        *(self.get_mut)(target) = Some(decoded);
        Ok(())
    }

    fn encode(&self, target: &T) -> Result<Option<RawValue>, SlotEncodeError> {
        let Some(items) = (self.get)(target) else {
            return Ok(None);
        };
        let encoded = items
            .iter()
            .map(encode_nested)
            .collect::<Result<Vec<_>, _>>()
            .map_err(SlotEncodeError::Nested)?;
        Ok(Some(Value::Array(encoded)))
    }

    fn project(
        &self,
        _target: &T,
        _key: &str,
        _mode: QueryMode,
        _options: &QueryOptions,
        _out: &mut Vec<(String, String)>,
    ) {
        // Lists of objects have no unambiguous query form.
    }
}

// -------------------------------------------------------------------------
// FieldDescriptor

fn scalar_kind<V: WireValue>() -> ValueKind {
    V::kind()
}

fn object_kind<R: Record>() -> ValueKind {
    ValueKind::Object(R::descriptor().name())
}

fn object_list_kind<R: Record>() -> ValueKind {
    ValueKind::Array(Box::new(object_kind::<R>()))
}

/// One modeled field of a structured type.
///
/// The kind is resolved on demand: a nested type's descriptor is not touched
/// while the enclosing descriptor is being built, so records may refer to
/// each other.
pub struct FieldDescriptor<T> {
    name: &'static str,
    wire_key: &'static str,
    optional: bool,
    kind: fn() -> ValueKind,
    nested: bool,
    query: QueryMode,
    pub(crate) slot: Box<dyn FieldSlot<T>>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// A primitive, raw-passthrough or array-of-primitive field.
    pub fn scalar<V: WireValue + 'static>(
        name: &'static str,
        wire_key: &'static str,
        get: fn(&T) -> &Option<V>,
        get_mut: fn(&mut T) -> &mut Option<V>,
    ) -> Self {
        Self {
            name,
            wire_key,
            optional: true,
            kind: scalar_kind::<V>,
            nested: false,
            query: QueryMode::Value,
            slot: Box::new(ScalarSlot { get, get_mut }),
        }
    }

    /// A nested structured field. Not projected into query parameters
    /// unless marked with [`FieldDescriptor::flatten_query`].
    pub fn object<R: Record>(
        name: &'static str,
        wire_key: &'static str,
        get: fn(&T) -> &Option<R>,
        get_mut: fn(&mut T) -> &mut Option<R>,
    ) -> Self {
        Self {
            name,
            wire_key,
            optional: true,
            kind: object_kind::<R>,
            nested: true,
            query: QueryMode::Skip,
            slot: Box::new(ObjectSlot { get, get_mut }),
        }
    }

    pub fn object_list<R: Record>(
        name: &'static str,
        wire_key: &'static str,
        get: fn(&T) -> &Option<Vec<R>>,
        get_mut: fn(&mut T) -> &mut Option<Vec<R>>,
    ) -> Self {
        Self {
            name,
            wire_key,
            optional: true,
            kind: object_list_kind::<R>,
            nested: false,
            query: QueryMode::Skip,
            slot: Box::new(ObjectListSlot { get, get_mut }),
        }
    }
}

impl<T> FieldDescriptor<T> {
    /// Projects a nested object into `parent.child` query keys.
    ///
    /// # Panics
    ///
    /// When the field is not a nested object.
    pub fn flatten_query(mut self) -> Self {
        assert!(
            self.nested,
            "flatten_query on non-object field `{}`",
            self.wire_key
        );
        self.query = QueryMode::Flatten;
        self
    }

    /// Excludes the field from query projection.
    pub fn skip_query(mut self) -> Self {
        self.query = QueryMode::Skip;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn kind(&self) -> ValueKind {
        (self.kind)()
    }

    pub fn query_mode(&self) -> QueryMode {
        self.query
    }

    /// Whether the field currently holds a value in `target`.
    pub fn is_set(&self, target: &T) -> bool {
        self.slot.is_set(target)
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("wire_key", &self.wire_key)
            .field("optional", &self.optional)
            .field("kind", &self.kind())
            .field("query", &self.query)
            .finish()
    }
}

// -------------------------------------------------------------------------
// TypeDescriptor

/// Ordered, immutable field table for one structured type.
pub struct TypeDescriptor<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
    index: HashMap<&'static str, usize>,
}

impl<T> TypeDescriptor<T> {
    pub fn builder(name: &'static str) -> TypeDescriptorBuilder<T> {
        TypeDescriptorBuilder {
            name,
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Fields in declared order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    pub fn field(&self, wire_key: &str) -> Option<&FieldDescriptor<T>> {
        self.index.get(wire_key).map(|&i| &self.fields[i])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

pub struct TypeDescriptorBuilder<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> TypeDescriptorBuilder<T> {
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        self.fields.push(field);
        self
    }

    /// # Panics
    ///
    /// When two fields share a wire key.
    pub fn build(self) -> TypeDescriptor<T> {
        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, field) in self.fields.iter().enumerate() {
            let previous = index.insert(field.wire_key, i);
            assert!(
                previous.is_none(),
                "duplicate wire key `{}` in {}",
                field.wire_key,
                self.name
            );
        }
        TypeDescriptor {
            name: self.name,
            fields: self.fields,
            index,
        }
    }
}

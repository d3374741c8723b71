//! Query parameter projection.
//!
//! Set fields become `(wire_key, value)` pairs in declared order. Nested
//! objects are only projected when their field is marked
//! [`flatten_query`](crate::FieldDescriptor::flatten_query), producing keys
//! such as `created_at.after`. Extras are never projected.

use crate::descriptor::{Record, TypeDescriptor};

#[derive(Debug, Clone)]
pub struct QueryOptions {
    /// Joins a flattened parent key and its child keys.
    pub separator: &'static str,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self { separator: "." }
    }
}

impl<T> TypeDescriptor<T> {
    pub fn to_query_params(&self, value: &T) -> Vec<(String, String)> {
        self.to_query_params_with(value, &QueryOptions::default())
    }

    pub fn to_query_params_with(&self, value: &T, options: &QueryOptions) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.project_into(value, None, options, &mut out);
        out
    }

    pub(crate) fn project_into(
        &self,
        value: &T,
        prefix: Option<&str>,
        options: &QueryOptions,
        out: &mut Vec<(String, String)>,
    ) {
        for field in self.fields() {
            let key = match prefix {
                Some(parent) => format!("{parent}{}{}", options.separator, field.wire_key()),
                None => field.wire_key().to_string(),
            };
            field
                .slot
                .project(value, &key, field.query_mode(), options, out);
        }
    }
}

pub fn to_query_params<R: Record>(record: &R) -> Vec<(String, String)> {
    R::descriptor().to_query_params(record)
}

pub fn to_query_params_with<R: Record>(
    record: &R,
    options: &QueryOptions,
) -> Vec<(String, String)> {
    R::descriptor().to_query_params_with(record, options)
}

/// `application/x-www-form-urlencoded` rendering of [`to_query_params`].
pub fn to_query_string<R: Record>(record: &R) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(to_query_params(record))
        .finish()
}

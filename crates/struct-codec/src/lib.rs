//! Tolerant JSON struct codec.
//!
//! Generated API resource types describe their fields once in a static
//! [`TypeDescriptor`]; this crate decodes JSON into them, keeps every wire key
//! the type does not model in an [`Extras`] bag, encodes them back without
//! losing those keys, and projects filter types into query parameters.
//!
//! Fields are `Option<_>`: `None` is "absent", and a JSON `null` on a known
//! key decodes to `None`. Zero values are real values.

pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod extras;
pub mod query;
pub mod timestamp;
pub mod value;

pub use decode::{decode, decode_str, decode_value};
pub use descriptor::{FieldDescriptor, QueryMode, Record, TypeDescriptor, TypeDescriptorBuilder};
pub use encode::{encode, encode_string, encode_value, to_debug_string};
pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use extras::Extras;
pub use query::{to_query_params, to_query_params_with, to_query_string, QueryOptions};
pub use timestamp::{format_timestamp, parse_timestamp, TimestampError};
pub use value::{json_type_name, Mismatch, Raw, RawValue, ValueKind, WireValue};

//! Typed entry points: get-or-create an object or array at a pointer.

use json_nav_pointer::{JsonPointer, Segment};
use serde_json::{Map, Value};

use crate::error::WithError;
use crate::kind::NodeKind;
use crate::navigate::{navigate, Container};
use crate::options::{OverwriteMode, WithOptions};

/// Get or create the object at `pointer`, replacing only `null`s on the way.
///
/// # Example
///
/// ```
/// use json_nav::with_object;
/// use json_nav_pointer::JsonPointer;
/// use serde_json::json;
///
/// let mut doc = json!({"arr": []});
/// let ptr = JsonPointer::compile("/arr/2").unwrap();
/// with_object(&mut doc, &ptr).unwrap().insert("v".into(), json!(1));
/// assert_eq!(doc, json!({"arr": [null, null, {"v": 1}]}));
/// ```
pub fn with_object<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
) -> Result<&'v mut Map<String, Value>, WithError> {
    with_object_opts(doc, pointer, &WithOptions::default())
}

/// [`with_object`] with an explicit overwrite mode and index preference.
pub fn with_object_mode<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
    mode: OverwriteMode,
    prefer_index: bool,
) -> Result<&'v mut Map<String, Value>, WithError> {
    with_object_opts(doc, pointer, &WithOptions::new(mode, prefer_index))
}

pub fn with_object_opts<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
    options: &WithOptions,
) -> Result<&'v mut Map<String, Value>, WithError> {
    navigate(doc, pointer, options)
}

/// Compile `expr` and call [`with_object`].
pub fn with_object_expr<'v>(
    doc: &'v mut Value,
    expr: &str,
) -> Result<&'v mut Map<String, Value>, WithError> {
    let pointer = JsonPointer::compile(expr)?;
    with_object(doc, &pointer)
}

/// Get or create the array at `pointer`, replacing only `null`s on the way.
///
/// # Example
///
/// ```
/// use json_nav::with_array;
/// use json_nav_pointer::JsonPointer;
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": [1, 2], "c": true}});
/// let ptr = JsonPointer::compile("/a/x").unwrap();
/// with_array(&mut doc, &ptr).unwrap().push(json!(3));
/// assert_eq!(doc, json!({"a": {"b": [1, 2], "c": true, "x": [3]}}));
/// ```
pub fn with_array<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
) -> Result<&'v mut Vec<Value>, WithError> {
    with_array_opts(doc, pointer, &WithOptions::default())
}

/// [`with_array`] with an explicit overwrite mode and index preference.
pub fn with_array_mode<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
    mode: OverwriteMode,
    prefer_index: bool,
) -> Result<&'v mut Vec<Value>, WithError> {
    with_array_opts(doc, pointer, &WithOptions::new(mode, prefer_index))
}

pub fn with_array_opts<'v>(
    doc: &'v mut Value,
    pointer: &JsonPointer,
    options: &WithOptions,
) -> Result<&'v mut Vec<Value>, WithError> {
    navigate(doc, pointer, options)
}

/// Compile `expr` and call [`with_array`].
pub fn with_array_expr<'v>(
    doc: &'v mut Value,
    expr: &str,
) -> Result<&'v mut Vec<Value>, WithError> {
    let pointer = JsonPointer::compile(expr)?;
    with_array(doc, &pointer)
}

/// Get or create the object held by member `name` of the object `doc`.
///
/// An absent or `null` member is replaced by `{}`; any other non-object
/// member is an error. `name` is always a member name, even if numeric.
pub fn with_object_property<'v>(
    doc: &'v mut Value,
    name: &str,
) -> Result<&'v mut Map<String, Value>, WithError> {
    property(doc, name)
}

/// Get or create the array held by member `name` of the object `doc`.
pub fn with_array_property<'v>(
    doc: &'v mut Value,
    name: &str,
) -> Result<&'v mut Vec<Value>, WithError> {
    property(doc, name)
}

fn property<'v, C: Container>(doc: &'v mut Value, name: &str) -> Result<&'v mut C, WithError> {
    if !doc.is_object() {
        return Err(WithError::NotAnObject {
            method: C::PROPERTY_METHOD,
            actual: NodeKind::of(doc),
        });
    }
    let pointer = JsonPointer::from_segments(vec![Segment::property(name)]);
    navigate(doc, &pointer, &WithOptions::default())
}

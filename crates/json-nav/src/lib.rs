//! Pointer-guided get-or-create navigation of `serde_json` trees.
//!
//! Given a document and a compiled [`JsonPointer`], the `with_*` functions
//! walk the pointer one segment at a time, materializing missing objects and
//! arrays (padding arrays with `null`), and return a mutable reference to the
//! terminal container. Existing nodes of the wrong kind are replaced or
//! refused according to an [`OverwriteMode`].
//!
//! # Example
//!
//! ```
//! use json_nav::{with_object, with_object_mode, OverwriteMode};
//! use json_nav_pointer::JsonPointer;
//! use serde_json::json;
//!
//! let mut doc = json!({"a": null});
//! let ptr = JsonPointer::compile("/a/b").unwrap();
//!
//! // `null` may be replaced under the default mode...
//! with_object(&mut doc, &ptr).unwrap().insert("value".into(), json!(42));
//! assert_eq!(doc, json!({"a": {"b": {"value": 42}}}));
//!
//! // ...but a number only under `OverwriteMode::All`.
//! let mut doc = json!({"a": 13});
//! assert!(with_object(&mut doc, &ptr).is_err());
//! assert!(with_object_mode(&mut doc, &ptr, OverwriteMode::All, true).is_ok());
//! assert_eq!(doc, json!({"a": {"b": {}}}));
//! ```

mod error;
mod kind;
mod navigate;
mod options;
mod with;

pub use error::{ErrorKind, WithError};
pub use json_nav_pointer::{JsonPointer, PointerError, Segment};
pub use kind::{ContainerKind, NodeKind};
pub use navigate::{navigate, Container};
pub use options::{OverwriteMode, ParseModeError, WithOptions};
pub use with::{
    with_array, with_array_expr, with_array_mode, with_array_opts, with_array_property,
    with_object, with_object_expr, with_object_mode, with_object_opts, with_object_property,
};

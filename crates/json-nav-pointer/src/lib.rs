//! JSON Pointer (RFC 6901) compilation and segment iteration.
//!
//! A pointer expression is compiled once into a [`JsonPointer`], whose
//! segments can then be walked any number of times with
//! [`JsonPointer::segments`]. Each yielded [`Step`] knows the segment that
//! follows it, which is what a navigator needs to decide the kind of an
//! intermediate container.
//!
//! # Example
//!
//! ```
//! use json_nav_pointer::JsonPointer;
//!
//! let ptr: JsonPointer = "/arr/2".parse().unwrap();
//! let mut steps = ptr.segments();
//!
//! let first = steps.next().unwrap();
//! assert_eq!(first.segment().name(), "arr");
//! assert_eq!(first.next().and_then(|s| s.index()), Some(2));
//!
//! let last = steps.next().unwrap();
//! assert!(last.is_last());
//! assert!(steps.next().is_none());
//! ```

pub mod pointer;
pub mod util;
pub mod validate;

pub use pointer::{JsonPointer, Segment, Segments, Step};
pub use util::{escape_component, is_valid_index, parse_index, unescape_component, MAX_INDEX};
pub use validate::{validate_json_pointer, PointerError, MAX_POINTER_LENGTH};

//! The get-or-create walk behind every `with_*` entry point.

use json_nav_pointer::{JsonPointer, Segment, Step};
use serde_json::map::Entry;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::WithError;
use crate::kind::{ContainerKind, NodeKind};
use crate::options::{OverwriteMode, WithOptions};

/// A container type a navigation can end on.
pub trait Container {
    const KIND: ContainerKind;
    /// Name of the pointer entry point, used in error messages.
    const METHOD: &'static str;
    /// Name of the single-property entry point, used in error messages.
    const PROPERTY_METHOD: &'static str;

    fn view_mut(node: &mut Value) -> Option<&mut Self>;
}

impl Container for Map<String, Value> {
    const KIND: ContainerKind = ContainerKind::Object;
    const METHOD: &'static str = "with_object";
    const PROPERTY_METHOD: &'static str = "with_object_property";

    fn view_mut(node: &mut Value) -> Option<&mut Self> {
        node.as_object_mut()
    }
}

impl Container for Vec<Value> {
    const KIND: ContainerKind = ContainerKind::Array;
    const METHOD: &'static str = "with_array";
    const PROPERTY_METHOD: &'static str = "with_array_property";

    fn view_mut(node: &mut Value) -> Option<&mut Self> {
        node.as_array_mut()
    }
}

/// What a slot has to hold once the walk passes through it.
#[derive(Debug, Clone, Copy)]
enum Requirement<'p> {
    /// The last slot: a container of the requested kind.
    Terminal(ContainerKind),
    /// Any container `next` can be looked up in.
    Intermediate {
        next: &'p Segment,
        prefer_index: bool,
    },
}

impl Requirement<'_> {
    fn accepts(&self, node: &Value) -> bool {
        match *self {
            Requirement::Terminal(kind) => kind.matches(node),
            Requirement::Intermediate { next, .. } => can_host(node, next),
        }
    }

    fn fresh(&self) -> Value {
        match *self {
            Requirement::Terminal(kind) => kind.empty(),
            Requirement::Intermediate { next, prefer_index } => {
                if prefer_index && next.may_match_element() {
                    ContainerKind::Array.empty()
                } else {
                    ContainerKind::Object.empty()
                }
            }
        }
    }
}

/// Whether `segment` can be looked up in `node`.
///
/// Objects take any token as a member name; arrays only take index tokens.
fn can_host(node: &Value, segment: &Segment) -> bool {
    match node {
        Value::Object(_) => true,
        Value::Array(_) => segment.may_match_element(),
        _ => false,
    }
}

/// Walk `pointer` from `root`, creating missing containers, and return the
/// terminal container.
///
/// Everything created before a failing slot stays in the tree.
///
/// # Errors
///
/// - [`WithError::EmptyPathMismatch`] if `pointer` is empty and `root` is not
///   a `C` container.
/// - [`WithError::ContextMismatch`] if `root` cannot hold the first segment.
/// - [`WithError::OverwriteForbidden`] if an occupied slot of the wrong kind
///   may not be replaced under `options.mode`.
pub fn navigate<'v, C: Container>(
    root: &'v mut Value,
    pointer: &JsonPointer,
    options: &WithOptions,
) -> Result<&'v mut C, WithError> {
    let node = walk(root, pointer, C::KIND, C::METHOD, options)?;
    match C::view_mut(node) {
        Some(container) => Ok(container),
        None => unreachable!("walk always settles on a `{}` node", C::KIND),
    }
}

fn walk<'v>(
    root: &'v mut Value,
    pointer: &JsonPointer,
    terminal: ContainerKind,
    method: &'static str,
    options: &WithOptions,
) -> Result<&'v mut Value, WithError> {
    if pointer.is_empty() {
        if terminal.matches(root) {
            return Ok(root);
        }
        return Err(WithError::EmptyPathMismatch {
            method,
            expected: terminal,
            actual: NodeKind::of(root),
        });
    }

    let mut current = root;
    for step in pointer.segments() {
        let requirement = match step.next() {
            Some(next) => Requirement::Intermediate {
                next,
                prefer_index: options.prefer_index,
            },
            None => Requirement::Terminal(terminal),
        };
        current = descend(current, step, requirement, options.mode, pointer, method)?;
    }
    Ok(current)
}

fn descend<'v>(
    parent: &'v mut Value,
    step: Step<'_>,
    requirement: Requirement<'_>,
    mode: OverwriteMode,
    pointer: &JsonPointer,
    method: &'static str,
) -> Result<&'v mut Value, WithError> {
    let segment = step.segment();
    match parent {
        Value::Object(map) => match map.entry(segment.name()) {
            Entry::Vacant(slot) => {
                let fresh = requirement.fresh();
                trace!(%pointer, position = step.position(), kind = %NodeKind::of(&fresh), "creating missing member");
                Ok(slot.insert(fresh))
            }
            Entry::Occupied(slot) => settle(slot.into_mut(), step, requirement, mode, pointer),
        },
        Value::Array(items) => match segment.index() {
            Some(index) if index < items.len() => {
                settle(&mut items[index], step, requirement, mode, pointer)
            }
            Some(index) => {
                let fresh = requirement.fresh();
                trace!(
                    %pointer,
                    position = step.position(),
                    padding = index - items.len(),
                    kind = %NodeKind::of(&fresh),
                    "creating missing element"
                );
                items.resize(index, Value::Null);
                items.push(fresh);
                Ok(&mut items[index])
            }
            None => Err(WithError::ContextMismatch {
                method,
                pointer: pointer.to_string(),
                actual: NodeKind::Array,
            }),
        },
        // Every parent after the root was settled to host its segment, so
        // only the root can end up here.
        other => Err(WithError::ContextMismatch {
            method,
            pointer: pointer.to_string(),
            actual: NodeKind::of(other),
        }),
    }
}

/// Reuse, replace or refuse an occupied slot.
fn settle<'v>(
    slot: &'v mut Value,
    step: Step<'_>,
    requirement: Requirement<'_>,
    mode: OverwriteMode,
    pointer: &JsonPointer,
) -> Result<&'v mut Value, WithError> {
    if requirement.accepts(slot) {
        return Ok(slot);
    }

    let existing = NodeKind::of(slot);
    let at = pointer.prefix(step.position() + 1);
    if !mode.may_replace(slot) {
        debug!(%pointer, %at, %existing, %mode, "refusing to replace node");
        return Err(WithError::OverwriteForbidden {
            existing,
            at: at.to_string(),
            pointer: pointer.to_string(),
            mode,
        });
    }

    *slot = requirement.fresh();
    debug!(%pointer, %at, %existing, %mode, replacement = %NodeKind::of(&*slot), "replaced node");
    Ok(slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ptr(expr: &str) -> JsonPointer {
        JsonPointer::compile(expr).unwrap()
    }

    #[test]
    fn test_can_host() {
        assert!(can_host(&json!({}), &Segment::new("x")));
        assert!(can_host(&json!({}), &Segment::new("3")));
        assert!(can_host(&json!([]), &Segment::new("3")));
        assert!(!can_host(&json!([]), &Segment::new("x")));
        assert!(!can_host(&json!(null), &Segment::new("0")));
        assert!(!can_host(&json!("s"), &Segment::new("a")));
    }

    #[test]
    fn test_fresh_intermediate_follows_next_segment() {
        let index = Segment::new("0");
        let name = Segment::new("a");
        let array = Requirement::Intermediate { next: &index, prefer_index: true };
        let object = Requirement::Intermediate { next: &index, prefer_index: false };
        let named = Requirement::Intermediate { next: &name, prefer_index: true };
        assert_eq!(array.fresh(), json!([]));
        assert_eq!(object.fresh(), json!({}));
        assert_eq!(named.fresh(), json!({}));
    }

    #[test]
    fn test_walk_mixed_path_creates_both_kinds() {
        let mut doc = json!({});
        let found = navigate::<Map<String, Value>>(&mut doc, &ptr("/a/1/b"), &WithOptions::default()).unwrap();
        found.insert("k".to_string(), json!(true));
        assert_eq!(doc, json!({"a": [null, {"b": {"k": true}}]}));
    }

    #[test]
    fn test_walk_reports_prefix_of_refused_slot() {
        let mut doc = json!({"a": {"b": "text"}});
        let err = navigate::<Vec<Value>>(&mut doc, &ptr("/a/b/c/d"), &WithOptions::default()).unwrap_err();
        assert_eq!(
            err,
            WithError::OverwriteForbidden {
                existing: NodeKind::String,
                at: "/a/b".to_string(),
                pointer: "/a/b/c/d".to_string(),
                mode: OverwriteMode::Nulls,
            }
        );
        assert_eq!(doc, json!({"a": {"b": "text"}}));
    }

    #[test]
    fn test_walk_array_root_with_name_segment() {
        let mut doc = json!([1, 2]);
        let err = navigate::<Map<String, Value>>(&mut doc, &ptr("/x"), &WithOptions::default()).unwrap_err();
        assert_eq!(
            err,
            WithError::ContextMismatch {
                method: "with_object",
                pointer: "/x".to_string(),
                actual: NodeKind::Array,
            }
        );
    }
}

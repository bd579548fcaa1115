//! Turning user selections into focus entries.
//!
//! Selections arrive as loosely typed requests (a kind name and an id, or a
//! body name). Unknown kinds are dropped without touching the stack; unknown
//! bodies are reported to the caller.

use orrery_orbit::{BodyCatalog, BodyId, Orbit};
use thiserror::Error;
use tracing::debug;

use crate::{FocusData, FocusEntry, FocusKind, FocusStack, SceneHandle};

/// Errors from resolving a selection against the catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// No body with this id exists.
    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    /// No body with this name exists.
    #[error("no body named '{0}'")]
    UnknownName(String),

    /// The request's kind does not match the catalog entry.
    #[error("body {id} is a {actual}, not a {requested}")]
    KindMismatch {
        id: BodyId,
        requested: FocusKind,
        actual: FocusKind,
    },
}

/// A selection as delivered by the UI: an untrusted kind name plus an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusRequest {
    /// "sun", "planet", "moon" or "site". Anything else is ignored.
    pub kind: String,
    /// Catalog id (or site id).
    pub id: u32,
}

impl FocusRequest {
    /// Create a request.
    pub fn new(kind: impl Into<String>, id: u32) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }
}

/// Build a focus entry for a catalog body, with its parent chain attached.
pub fn entry_for_body(catalog: &BodyCatalog, id: BodyId) -> Result<FocusEntry, SelectionError> {
    let body = catalog.get(id).ok_or(SelectionError::UnknownBody(id))?;
    let entry = FocusEntry::new(
        body.kind.into(),
        body.id,
        FocusData {
            name: body.name.clone(),
            size: body.size,
            orbit: body.orbit,
            scene_handle: Some(SceneHandle(body.id)),
        },
    );
    match body.parent {
        Some(parent) => Ok(entry.with_parent(entry_for_body(catalog, parent)?)),
        None => Ok(entry),
    }
}

/// A surface site entry. Sites have no scene object of their own.
pub fn site_entry(id: u32, parent: Option<FocusEntry>) -> FocusEntry {
    let entry = FocusEntry::new(
        FocusKind::Site,
        BodyId(id),
        FocusData {
            name: format!("Site {id}"),
            size: 0.0,
            orbit: Orbit::stationary(),
            scene_handle: None,
        },
    );
    match parent {
        Some(parent) => entry.with_parent(parent),
        None => entry,
    }
}

/// Apply a request to the stack.
///
/// Returns `Ok(false)` when the kind is unknown and the request was ignored.
pub fn apply_request(
    stack: &mut FocusStack,
    catalog: &BodyCatalog,
    request: &FocusRequest,
) -> Result<bool, SelectionError> {
    let kind: FocusKind = match request.kind.parse() {
        Ok(kind) => kind,
        Err(e) => {
            debug!(%e, id = request.id, "ignoring focus request");
            return Ok(false);
        }
    };

    let entry = if kind == FocusKind::Site {
        // A site replaces any current site, so it hangs off the deepest body.
        let parent = stack
            .entries()
            .iter()
            .rev()
            .find(|e| e.kind.rank() < FocusKind::Site.rank())
            .cloned();
        site_entry(request.id, parent)
    } else {
        let entry = entry_for_body(catalog, BodyId(request.id))?;
        if entry.kind != kind {
            return Err(SelectionError::KindMismatch {
                id: entry.id,
                requested: kind,
                actual: entry.kind,
            });
        }
        entry
    };
    stack.push_focus(entry);
    Ok(true)
}

/// Focus a body by name (case-insensitive).
pub fn select_by_name(
    stack: &mut FocusStack,
    catalog: &BodyCatalog,
    name: &str,
) -> Result<(), SelectionError> {
    let body = catalog
        .by_name(name)
        .ok_or_else(|| SelectionError::UnknownName(name.to_string()))?;
    stack.push_focus(entry_for_body(catalog, body.id)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_orbit::PresetOptions;

    fn catalog() -> BodyCatalog {
        BodyCatalog::solar_system(&PresetOptions::default())
    }

    #[test]
    fn test_moon_entry_carries_planet_parent() {
        let entry = entry_for_body(&catalog(), BodyId(301)).unwrap();
        assert_eq!(entry.kind, FocusKind::Moon);
        assert_eq!(entry.data.name, "Moon");
        let parent = entry.parent.as_deref().unwrap();
        assert_eq!(parent.id, BodyId(3));
        assert_eq!(parent.data.name, "Earth");
        assert!(parent.parent.is_none());
    }

    #[test]
    fn test_unknown_kind_is_ignored() {
        let mut stack = FocusStack::default();
        let applied = apply_request(&mut stack, &catalog(), &FocusRequest::new("comet", 3)).unwrap();
        assert!(!applied);
        assert_eq!(stack.len(), 1);
        assert!(stack.previous().is_none());
    }

    #[test]
    fn test_request_pushes_planet() {
        let mut stack = FocusStack::default();
        assert!(apply_request(&mut stack, &catalog(), &FocusRequest::new("planet", 3)).unwrap());
        assert_eq!(stack.current().headline(), "Planet: Earth");
    }

    #[test]
    fn test_kind_mismatch() {
        let mut stack = FocusStack::default();
        let err = apply_request(&mut stack, &catalog(), &FocusRequest::new("moon", 3)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::KindMismatch {
                id: BodyId(3),
                requested: FocusKind::Moon,
                actual: FocusKind::Planet,
            }
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_unknown_body() {
        let mut stack = FocusStack::default();
        let err = apply_request(&mut stack, &catalog(), &FocusRequest::new("planet", 42)).unwrap_err();
        assert_eq!(err, SelectionError::UnknownBody(BodyId(42)));
    }

    #[test]
    fn test_site_hangs_off_current_focus() {
        let mut stack = FocusStack::default();
        let catalog = catalog();
        select_by_name(&mut stack, &catalog, "earth").unwrap();
        apply_request(&mut stack, &catalog, &FocusRequest::new("site", 7)).unwrap();
        assert_eq!(stack.len(), 3);
        let site = stack.current();
        assert_eq!(site.kind, FocusKind::Site);
        assert!(site.data.scene_handle.is_none());
        assert_eq!(site.parent.as_deref().unwrap().id, BodyId(3));
    }

    #[test]
    fn test_second_site_replaces_first_and_keeps_body_parent() {
        let mut stack = FocusStack::default();
        let catalog = catalog();
        select_by_name(&mut stack, &catalog, "earth").unwrap();
        apply_request(&mut stack, &catalog, &FocusRequest::new("site", 7)).unwrap();
        apply_request(&mut stack, &catalog, &FocusRequest::new("site", 8)).unwrap();

        let keys: Vec<_> = stack.entries().iter().map(|e| (e.kind, e.id.0)).collect();
        assert_eq!(
            keys,
            vec![(FocusKind::Sun, 0), (FocusKind::Planet, 3), (FocusKind::Site, 8)]
        );
        let parent = stack.current().parent.as_deref().unwrap();
        assert_eq!(parent.key(), stack.entries()[1].key());
    }

    #[test]
    fn test_select_by_unknown_name() {
        let mut stack = FocusStack::default();
        let err = select_by_name(&mut stack, &catalog(), "Vulcan").unwrap_err();
        assert_eq!(err, SelectionError::UnknownName("Vulcan".to_string()));
    }
}

//! Surface registry - mount-ordered bindings between surfaces and widgets
//!
//! A binding records the last focus state that was imperatively applied to
//! (or reported by) its widget. The widget handles themselves are owned by
//! the runtime; the registry only tracks identity, order and focus bits.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::cell::CellId;

/// An editing surface: a cell body or the document title field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceId {
    Cell(CellId),
    Title,
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceId::Cell(id) => write!(f, "{}", id),
            SurfaceId::Title => write!(f, "title"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceBinding {
    pub id: SurfaceId,
    /// Last-known imperative focus state of the widget
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    bindings: Vec<SurfaceBinding>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface at the end of the mount order.
    ///
    /// Re-mounting an id drops the previous binding first, so the surface
    /// moves to the end of the order and starts unfocused.
    pub fn mount(&mut self, id: SurfaceId) {
        self.unmount(id);
        self.bindings.push(SurfaceBinding { id, focused: false });
    }

    /// Drop a surface. Returns the binding if it was mounted.
    pub fn unmount(&mut self, id: SurfaceId) -> Option<SurfaceBinding> {
        let pos = self.bindings.iter().position(|b| b.id == id)?;
        Some(self.bindings.remove(pos))
    }

    pub fn is_mounted(&self, id: SurfaceId) -> bool {
        self.bindings.iter().any(|b| b.id == id)
    }

    pub fn get(&self, id: SurfaceId) -> Option<&SurfaceBinding> {
        self.bindings.iter().find(|b| b.id == id)
    }

    pub fn is_focused(&self, id: SurfaceId) -> bool {
        self.get(id).map(|b| b.focused).unwrap_or(false)
    }

    /// Record a focus state observed on the widget. Unmounted ids are ignored.
    pub fn set_focused(&mut self, id: SurfaceId, focused: bool) {
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.id == id) {
            binding.focused = focused;
        }
    }

    /// Bindings in mount order
    pub fn iter(&self) -> impl Iterator<Item = &SurfaceBinding> {
        self.bindings.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut SurfaceBinding> {
        self.bindings.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_preserves_order() {
        let mut registry = SurfaceRegistry::new();
        registry.mount(SurfaceId::Cell(CellId(2)));
        registry.mount(SurfaceId::Title);
        registry.mount(SurfaceId::Cell(CellId(0)));

        let order: Vec<_> = registry.iter().map(|b| b.id).collect();
        assert_eq!(
            order,
            vec![
                SurfaceId::Cell(CellId(2)),
                SurfaceId::Title,
                SurfaceId::Cell(CellId(0)),
            ]
        );
    }

    #[test]
    fn remount_moves_to_end_and_resets_focus() {
        let mut registry = SurfaceRegistry::new();
        registry.mount(SurfaceId::Title);
        registry.mount(SurfaceId::Cell(CellId(1)));
        registry.set_focused(SurfaceId::Title, true);

        registry.mount(SurfaceId::Title);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().last().map(|b| b.id), Some(SurfaceId::Title));
        assert!(!registry.is_focused(SurfaceId::Title));
    }

    #[test]
    fn unmount_unknown_is_none() {
        let mut registry = SurfaceRegistry::new();
        assert!(registry.unmount(SurfaceId::Title).is_none());
        registry.set_focused(SurfaceId::Title, true);
        assert!(registry.is_empty());
    }
}

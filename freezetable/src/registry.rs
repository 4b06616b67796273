//! Guard against attaching two widgets to the same table.

use std::collections::HashMap;

use crate::error::StructuralError;

/// Table identifiers that currently have a live widget.
///
/// Hand the same registry to every attach on a page. Tests can create their
/// own to stay isolated from each other.
#[derive(Debug, Default)]
pub struct Registry {
    initialized: HashMap<String, bool>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            initialized: HashMap::new(),
        }
    }

    pub fn is_initialized(&self, id: &str) -> bool {
        self.initialized.get(id).copied().unwrap_or(false)
    }

    /// Fail if `id` is already taken, without claiming it.
    pub(crate) fn check(&self, id: &str) -> Result<(), StructuralError> {
        if self.is_initialized(id) {
            return Err(StructuralError::AlreadyInitialized(id.to_string()));
        }
        Ok(())
    }

    /// Check-then-set in one step.
    pub(crate) fn claim(&mut self, id: &str) -> Result<(), StructuralError> {
        self.check(id)?;
        self.initialized.insert(id.to_string(), true);
        log::debug!("[registry] claimed {}", id);
        Ok(())
    }

    /// Returns true if `id` was registered.
    pub(crate) fn release(&mut self, id: &str) -> bool {
        let released = self.initialized.remove(id).is_some();
        if released {
            log::debug!("[registry] released {}", id);
        }
        released
    }

    pub fn len(&self) -> usize {
        self.initialized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.initialized.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_is_exclusive_until_released() {
        let mut registry = Registry::new();
        registry.claim("table").unwrap();
        assert!(registry.is_initialized("table"));
        assert_eq!(
            registry.claim("table"),
            Err(StructuralError::AlreadyInitialized("table".into()))
        );

        assert!(registry.release("table"));
        assert!(!registry.is_initialized("table"));
        assert!(registry.claim("table").is_ok());
    }

    #[test]
    fn registries_are_independent() {
        let mut a = Registry::new();
        let b = Registry::new();
        a.claim("table").unwrap();
        assert!(b.check("table").is_ok());
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}

//! Source identity.
//!
//! Positions carry a 4-byte [`SourceId`] instead of the file path itself;
//! the [`SourceMap`] resolves ids back to the names the file loader supplied.

use rustc_hash::FxHashMap;

/// Compact identifier of one source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SourceId(u32);

impl SourceId {
    /// Id used for buffers that were never registered (tests, REPL input).
    pub const ANONYMOUS: SourceId = SourceId(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SourceId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Registry of source names, indexed by [`SourceId`].
///
/// Id 0 is pre-registered as `<anonymous>`. Registering the same name twice
/// returns the same id.
#[derive(Clone, Debug)]
pub struct SourceMap {
    names: Vec<String>,
    by_name: FxHashMap<String, SourceId>,
}

impl SourceMap {
    /// Name reported for [`SourceId::ANONYMOUS`].
    pub const ANONYMOUS_NAME: &'static str = "<anonymous>";

    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        by_name.insert(Self::ANONYMOUS_NAME.to_owned(), SourceId::ANONYMOUS);
        SourceMap {
            names: vec![Self::ANONYMOUS_NAME.to_owned()],
            by_name,
        }
    }

    /// Register a source name and return its id.
    ///
    /// Saturates at `u32::MAX` sources; ids past that collide with the last.
    pub fn add(&mut self, name: impl Into<String>) -> SourceId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        let id = SourceId(u32::try_from(self.names.len()).unwrap_or(u32::MAX));
        self.names.push(name.clone());
        self.by_name.insert(name, id);
        id
    }

    /// Resolve an id to its registered name.
    pub fn name(&self, id: SourceId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Number of registered sources, including the anonymous one.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SourceMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_is_preregistered() {
        let map = SourceMap::new();
        assert_eq!(map.name(SourceId::ANONYMOUS), Some("<anonymous>"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn add_is_idempotent_per_name() {
        let mut map = SourceMap::new();
        let a = map.add("main.rn");
        let b = map.add("lib.rn");
        assert_ne!(a, b);
        assert_eq!(map.add("main.rn"), a);
        assert_eq!(map.name(b), Some("lib.rn"));
    }

    #[test]
    fn unknown_id_has_no_name() {
        let map = SourceMap::new();
        assert_eq!(map.name(SourceId::from_raw(42)), None);
    }
}

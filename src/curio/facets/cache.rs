//! Memoized option lists.
//!
//! Deriving options walks the whole collection, so the result is kept per facet
//! and tagged with the version of the source it was built from. The owner of the
//! collection bumps the version on every change; a lookup with a different
//! version rebuilds. Nothing here watches the collection by itself.

use log::debug;
use std::collections::HashMap;
use std::convert::Infallible;

use super::FacetOption;

#[derive(Debug, Default)]
pub struct OptionCache {
    entries: HashMap<String, CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    version: u64,
    options: Vec<FacetOption>,
}

impl OptionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the options for `key`, calling `build` only if nothing is cached
    /// for `version`.
    pub fn get_or_build<F>(&mut self, version: u64, key: &str, build: F) -> &[FacetOption]
    where
        F: FnOnce() -> Vec<FacetOption>,
    {
        match self.try_get_or_build::<_, Infallible>(version, key, || Ok(build())) {
            Ok(options) => options,
            Err(never) => match never {},
        }
    }

    /// Like [`get_or_build`](Self::get_or_build) for builders that can fail.
    /// A failed build leaves the cache as it was.
    pub fn try_get_or_build<F, E>(
        &mut self,
        version: u64,
        key: &str,
        build: F,
    ) -> Result<&[FacetOption], E>
    where
        F: FnOnce() -> Result<Vec<FacetOption>, E>,
    {
        let stale = self
            .entries
            .get(key)
            .map_or(true, |entry| entry.version != version);

        if stale {
            debug!("rebuilding options for '{}' at version {}", key, version);
            let options = build()?;
            self.entries
                .insert(key.to_string(), CacheEntry { version, options });
        }

        Ok(self
            .entries
            .get(key)
            .map(|entry| entry.options.as_slice())
            .unwrap_or_default())
    }

    /// Drops everything.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Drops the entry for one facet.
    pub fn invalidate_key(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn build(counter: &Cell<usize>, ids: &[&str]) -> Vec<FacetOption> {
        counter.set(counter.get() + 1);
        ids.iter().map(|id| FacetOption::new(*id)).collect()
    }

    #[test]
    fn same_version_hits_cache() {
        let mut cache = OptionCache::new();
        let builds = Cell::new(0);

        cache.get_or_build(1, "artist", || build(&builds, &["A"]));
        let options = cache.get_or_build(1, "artist", || build(&builds, &["B"]));

        assert_eq!(options, &[FacetOption::new("A")]);
        assert_eq!(builds.get(), 1);
    }

    #[test]
    fn new_version_rebuilds() {
        let mut cache = OptionCache::new();
        let builds = Cell::new(0);

        cache.get_or_build(1, "artist", || build(&builds, &["A"]));
        let options = cache.get_or_build(2, "artist", || build(&builds, &["B"]));

        assert_eq!(options, &[FacetOption::new("B")]);
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = OptionCache::new();
        let builds = Cell::new(0);

        cache.get_or_build(1, "artist", || build(&builds, &["A"]));
        cache.get_or_build(1, "year", || build(&builds, &["1920"]));
        assert_eq!(cache.len(), 2);
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let mut cache = OptionCache::new();
        let builds = Cell::new(0);

        cache.get_or_build(1, "artist", || build(&builds, &["A"]));
        cache.invalidate_key("artist");
        cache.get_or_build(1, "artist", || build(&builds, &["A"]));
        cache.invalidate();
        assert!(cache.is_empty());
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn failed_build_caches_nothing() {
        let mut cache = OptionCache::new();
        let result: Result<&[FacetOption], String> =
            cache.try_get_or_build(1, "artist", || Err("source down".to_string()));
        assert!(result.is_err());
        assert!(cache.is_empty());

        let options = cache
            .try_get_or_build::<_, String>(1, "artist", || Ok(vec![FacetOption::new("A")]))
            .unwrap();
        assert_eq!(options, &[FacetOption::new("A")]);
    }
}

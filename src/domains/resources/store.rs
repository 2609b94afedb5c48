//! Resource store: id to content mapping.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Producer for content computed when the resource is read.
pub type ContentFn = Arc<dyn Fn() -> String + Send + Sync>;

/// Content of a single resource.
#[derive(Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(Cow<'static, str>),

    /// Content produced at read time.
    Lazy(ContentFn),
}

impl ResourceContent {
    /// Static content from a string literal.
    pub const fn text(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }

    /// Content produced by `f` each time the resource is read.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(f))
    }

    /// Resolve to the text served to clients.
    pub fn resolve(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text.as_ref()),
            Self::Lazy(produce) => Cow::Owned(produce()),
        }
    }
}

impl fmt::Debug for ResourceContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

impl From<String> for ResourceContent {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<&'static str> for ResourceContent {
    fn from(text: &'static str) -> Self {
        Self::text(text)
    }
}

/// Mapping from resource id to content.
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    entries: HashMap<String, ResourceContent>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert content for `id`, returning any content it replaced.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        content: impl Into<ResourceContent>,
    ) -> Option<ResourceContent> {
        self.entries.insert(id.into(), content.into())
    }

    pub fn get(&self, id: &str) -> Option<&ResourceContent> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Ids present in the store, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Remove the entry for `id`.
    pub fn remove(&mut self, id: &str) -> Option<ResourceContent> {
        self.entries.remove(id)
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
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_static_content_is_borrowed() {
        let content = ResourceContent::text("# Hello");
        assert!(matches!(content.resolve(), Cow::Borrowed("# Hello")));
    }

    #[test]
    fn test_lazy_content_is_produced_on_each_read() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let content = ResourceContent::lazy(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            "generated".to_string()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(content.resolve(), "generated");
        assert_eq!(content.resolve(), "generated");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_store_insert_and_get() {
        let mut store = ResourceStore::new();
        assert!(store.insert("docs://a", "A").is_none());
        assert!(store.insert("docs://a", "B").is_some());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("docs://a").unwrap().resolve(), "B");
        assert!(store.get("docs://b").is_none());
    }

    #[test]
    fn test_debug_does_not_dump_content() {
        let content = ResourceContent::text("a very long document");
        assert_eq!(format!("{:?}", content), "Text(20)");
    }
}

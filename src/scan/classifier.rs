//! Named cell predicates with stable identities

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CLASSIFIER_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a classifier, used as the key of scan results.
///
/// Ids are process-unique, so results from scanners built with different
/// classifier sets can be merged without two predicates sharing a bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassifierId(u64);

impl ClassifierId {
    fn next() -> Self {
        Self(NEXT_CLASSIFIER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// A predicate over cell data that buckets matching cells during a scan
pub struct Classifier<T> {
    id: ClassifierId,
    name: String,
    predicate: Predicate<T>,
}

impl<T> Classifier<T> {
    pub fn new(name: impl Into<String>, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            id: ClassifierId::next(),
            name: name.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn id(&self) -> ClassifierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test cell data against this classifier
    pub fn test(&self, data: &T) -> bool {
        (self.predicate)(data)
    }
}

impl<T> fmt::Debug for Classifier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of shared classifiers handed to a scanner.
///
/// Cloning is cheap; clones share the same classifiers and ids.
pub struct ClassifierSet<T> {
    classifiers: Vec<Arc<Classifier<T>>>,
}

impl<T> ClassifierSet<T> {
    pub fn new() -> Self {
        Self { classifiers: Vec::new() }
    }

    /// Add a predicate and return the id its matches will be filed under
    pub fn add(
        &mut self,
        name: impl Into<String>,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> ClassifierId {
        self.push(Arc::new(Classifier::new(name, predicate)))
    }

    /// Add an existing classifier handle. Handles already present are
    /// not duplicated.
    pub fn push(&mut self, classifier: Arc<Classifier<T>>) -> ClassifierId {
        let id = classifier.id();
        if !self.contains(id) {
            self.classifiers.push(classifier);
        }
        id
    }

    pub fn get(&self, id: ClassifierId) -> Option<&Arc<Classifier<T>>> {
        self.classifiers.iter().find(|c| c.id() == id)
    }

    pub fn contains(&self, id: ClassifierId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Classifier<T>>> {
        self.classifiers.iter()
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

impl<T> Clone for ClassifierSet<T> {
    fn clone(&self) -> Self {
        Self { classifiers: self.classifiers.clone() }
    }
}

impl<T> Default for ClassifierSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ClassifierSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.classifiers.iter()).finish()
    }
}

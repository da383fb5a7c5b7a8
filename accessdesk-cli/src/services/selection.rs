//! Selection stores shared between pickers.
//!
//! A selection store holds the items a user has chosen across one or more
//! views of the same entity kind, independent of which view selected them.
//! Insertion order is the display order; membership is by id only.

use crate::model::{Application, Entitlement, Location, User, UserGroup};

/// Anything that can live in a [`SelectionStore`].
pub trait Selectable {
    fn id(&self) -> &str;
}

impl Selectable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Selectable for UserGroup {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Selectable for Application {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Selectable for Entitlement {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Selectable for Location {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Insertion-ordered, id-deduplicated collection of chosen items.
///
/// All operations are total: adding a duplicate and removing an absent id
/// are no-ops. Every mutation bumps `revision`, so a view can tell whether
/// its projection of the store is stale without comparing contents.
#[derive(Debug, Clone)]
pub struct SelectionStore<T: Selectable> {
    items: Vec<T>,
    revision: u64,
}

impl<T: Selectable> Default for SelectionStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Selectable> SelectionStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Append `item` unless an item with the same id is already present.
    pub fn add(&mut self, item: T) {
        if self.contains(item.id()) {
            return;
        }
        self.items.push(item);
        self.revision += 1;
    }

    /// Remove the item with matching id, if any.
    pub fn remove(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.items.len() != before {
            self.revision += 1;
        }
    }

    /// Add if absent, remove if present. Returns true if now selected.
    pub fn toggle(&mut self, item: T) -> bool {
        if self.contains(item.id()) {
            self.remove(item.id());
            false
        } else {
            self.add(item);
            true
        }
    }

    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.revision += 1;
        }
    }

    /// Bulk-set the sequence, e.g. when seeding from an external source.
    /// Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        for item in items {
            if !self.contains(item.id()) {
                self.items.push(item);
            }
        }
        self.revision += 1;
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonically increasing counter bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// All selection stores backing the access request flow.
///
/// Created when the portal session starts and cleared as a unit when the
/// request is submitted or cancelled.
#[derive(Debug, Default)]
pub struct SelectionSet {
    pub users: SelectionStore<User>,
    pub groups: SelectionStore<UserGroup>,
    pub locations: SelectionStore<Location>,
    pub apps: SelectionStore<Application>,
    pub entitlements: SelectionStore<Entitlement>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_all(&mut self) {
        self.users.clear();
        self.groups.clear();
        self.locations.clear();
        self.apps.clear();
        self.entitlements.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.groups.is_empty()
            && self.locations.is_empty()
            && self.apps.is_empty()
            && self.entitlements.is_empty()
    }
}

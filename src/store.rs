//! Committed hotspot storage.
//!
//! The store owns every committed hotspot, in creation order. That order is
//! the list display order and the HTML emission order. Selection is a weak
//! handle (the hotspot id) that is cleared whenever the selected hotspot
//! leaves the store.

use crate::model::{Hotspot, HotspotId, Point};
use crate::notify::{ListenerId, Notifier};

/// Change notifications fired by [`HotspotStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A hotspot was appended.
    Added(HotspotId),
    /// A hotspot was removed.
    Removed(HotspotId),
    /// The selection was set (fired even when unchanged).
    Selected(Option<HotspotId>),
    /// Link fields or translation of a hotspot changed.
    Updated(HotspotId),
    /// All hotspots were removed at once.
    Cleared,
}

/// Ordered collection of committed hotspots with selection state.
#[derive(Debug, Default)]
pub struct HotspotStore {
    hotspots: Vec<Hotspot>,
    selected_id: Option<HotspotId>,
    notifier: Notifier<StoreEvent>,
}

impl HotspotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener.
    pub fn subscribe<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.notifier.subscribe(f)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Append a hotspot and return its id.
    pub fn add(&mut self, hotspot: Hotspot) -> HotspotId {
        let id = hotspot.id().clone();
        self.hotspots.push(hotspot);
        log::debug!("Added hotspot {}, total: {}", id, self.hotspots.len());
        self.notifier.emit(&StoreEvent::Added(id.clone()));
        id
    }

    /// Remove a hotspot by id.
    pub fn remove(&mut self, id: &HotspotId) -> Option<Hotspot> {
        let index = self.index_of(id)?;
        let removed = self.hotspots.remove(index);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        log::debug!("Removed hotspot {}, total: {}", id, self.hotspots.len());
        self.notifier.emit(&StoreEvent::Removed(id.clone()));
        Some(removed)
    }

    /// Remove the selected hotspot, if any.
    pub fn delete_selected(&mut self) -> Option<Hotspot> {
        let id = self.selected_id.clone()?;
        self.remove(&id)
    }

    /// Remove every hotspot and clear the selection.
    pub fn clear(&mut self) {
        let count = self.hotspots.len();
        self.hotspots.clear();
        self.selected_id = None;
        log::debug!("Cleared {} hotspots", count);
        self.notifier.emit(&StoreEvent::Cleared);
    }

    /// Select a hotspot, or deselect with `None`.
    ///
    /// Unknown ids select nothing. The notification fires on every call,
    /// including when the selection does not change.
    pub fn select(&mut self, id: Option<&HotspotId>) {
        self.selected_id = id.filter(|id| self.index_of(id).is_some()).cloned();
        self.notifier
            .emit(&StoreEvent::Selected(self.selected_id.clone()));
    }

    /// Get the selected hotspot ID.
    pub fn selected(&self) -> Option<&HotspotId> {
        self.selected_id.as_ref()
    }

    pub fn selected_hotspot(&self) -> Option<&Hotspot> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    /// Get a hotspot by ID.
    pub fn get(&self, id: &HotspotId) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id() == id)
    }

    /// Get a mutable reference to a hotspot by ID.
    ///
    /// Changes made through this reference are not announced; use
    /// [`set_link`](Self::set_link) or [`translate`](Self::translate) when
    /// listeners must hear about them.
    pub fn get_mut(&mut self, id: &HotspotId) -> Option<&mut Hotspot> {
        self.hotspots.iter_mut().find(|h| h.id() == id)
    }

    /// Update the link fields of a hotspot.
    pub fn set_link(
        &mut self,
        id: &HotspotId,
        url: impl Into<String>,
        alt_text: impl Into<String>,
        title: impl Into<String>,
    ) -> bool {
        let Some(hotspot) = self.get_mut(id) else {
            return false;
        };
        hotspot.url = url.into();
        hotspot.alt_text = alt_text.into();
        hotspot.title = title.into();
        self.notifier.emit(&StoreEvent::Updated(id.clone()));
        true
    }

    /// Move a hotspot by a delta.
    pub fn translate(&mut self, id: &HotspotId, dx: f64, dy: f64) -> bool {
        let Some(hotspot) = self.get_mut(id) else {
            return false;
        };
        hotspot.translate_by(dx, dy);
        self.notifier.emit(&StoreEvent::Updated(id.clone()));
        true
    }

    /// Find the top-most hotspot at a scene point.
    ///
    /// Later hotspots are drawn above earlier ones, so the search runs from
    /// the most recently added.
    pub fn hit_test(&self, point: &Point) -> Option<&HotspotId> {
        self.hotspots
            .iter()
            .rev()
            .find(|h| h.contains_point(point))
            .map(Hotspot::id)
    }

    /// Get all hotspots in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    pub fn as_slice(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    fn index_of(&self, id: &HotspotId) -> Option<usize> {
        self.hotspots.iter().position(|h| h.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rect;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(store: &mut HotspotStore) -> Rc<RefCell<Vec<StoreEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        events
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Hotspot {
        Hotspot::rectangle(Rect::new(x, y, w, h))
    }

    #[test]
    fn test_add_keeps_order() {
        let mut store = HotspotStore::new();
        let a = store.add(rect(0.0, 0.0, 10.0, 10.0));
        let b = store.add(rect(20.0, 0.0, 10.0, 10.0));

        let ids: Vec<_> = store.iter().map(|h| h.id().clone()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_hit_test_prefers_most_recent() {
        let mut store = HotspotStore::new();
        let _below = store.add(rect(0.0, 0.0, 50.0, 50.0));
        let above = store.add(rect(25.0, 25.0, 50.0, 50.0));

        assert_eq!(store.hit_test(&Point::new(30.0, 30.0)), Some(&above));
        assert_eq!(store.hit_test(&Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn test_removing_selected_clears_selection() {
        let mut store = HotspotStore::new();
        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));
        store.select(Some(&id));
        assert_eq!(store.selected(), Some(&id));

        let removed = store.delete_selected();
        assert!(removed.is_some());
        assert_eq!(store.selected(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_removing_other_keeps_selection() {
        let mut store = HotspotStore::new();
        let a = store.add(rect(0.0, 0.0, 10.0, 10.0));
        let b = store.add(rect(20.0, 0.0, 10.0, 10.0));
        store.select(Some(&a));

        store.remove(&b);
        assert_eq!(store.selected(), Some(&a));
    }

    #[test]
    fn test_clear() {
        let mut store = HotspotStore::new();
        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));
        store.add(rect(20.0, 0.0, 10.0, 10.0));
        store.select(Some(&id));
        let events = recorded(&mut store);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.selected(), None);
        assert_eq!(*events.borrow(), vec![StoreEvent::Cleared]);
    }

    #[test]
    fn test_select_refires_for_same_hotspot() {
        let mut store = HotspotStore::new();
        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));
        let events = recorded(&mut store);

        store.select(Some(&id));
        store.select(Some(&id));
        store.select(None);

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Selected(Some(id.clone())),
                StoreEvent::Selected(Some(id)),
                StoreEvent::Selected(None),
            ]
        );
    }

    #[test]
    fn test_select_unknown_id_selects_nothing() {
        let mut store = HotspotStore::new();
        store.add(rect(0.0, 0.0, 10.0, 10.0));
        let stray = rect(0.0, 0.0, 1.0, 1.0);

        store.select(Some(stray.id()));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn test_notifications_for_add_remove_update() {
        let mut store = HotspotStore::new();
        let events = recorded(&mut store);

        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));
        assert!(store.set_link(&id, "/a", "A", "Title"));
        assert!(store.translate(&id, 2.0, 3.0));
        store.remove(&id);

        assert_eq!(
            *events.borrow(),
            vec![
                StoreEvent::Added(id.clone()),
                StoreEvent::Updated(id.clone()),
                StoreEvent::Updated(id.clone()),
                StoreEvent::Removed(id),
            ]
        );
    }

    #[test]
    fn test_added_event_carries_stored_id() {
        let mut store = HotspotStore::new();
        let seen_id = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&seen_id);
        store.subscribe(move |e| {
            if let StoreEvent::Added(id) = e {
                *sink.borrow_mut() = Some(id.clone());
            }
        });
        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));

        assert_eq!(seen_id.borrow().as_ref(), Some(&id));
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_translate_moves_hit_area() {
        let mut store = HotspotStore::new();
        let id = store.add(rect(0.0, 0.0, 10.0, 10.0));
        store.translate(&id, 100.0, 0.0);

        assert_eq!(store.hit_test(&Point::new(5.0, 5.0)), None);
        assert_eq!(store.hit_test(&Point::new(105.0, 5.0)), Some(&id));
    }
}

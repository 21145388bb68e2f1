//! Skip selection state

use crate::catalog::CatalogItem;

/// The skip the user picked, if any
#[derive(Debug, Clone, Default)]
pub struct ItemSelection {
    selected: Option<CatalogItem>,
}

impl ItemSelection {
    pub fn selected(&self) -> Option<&CatalogItem> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected.as_ref().is_some_and(|s| s.id == id)
    }

    /// Select `item`, or clear the selection if it is already the selected one
    pub fn toggle_select(&mut self, item: &CatalogItem) {
        if self.is_selected(item.id) {
            self.selected = None;
        } else {
            self.selected = Some(item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::item;

    #[test]
    fn test_starts_empty() {
        assert!(ItemSelection::default().selected().is_none());
    }

    #[test]
    fn test_toggle_twice_clears() {
        let mut selection = ItemSelection::default();
        let skip = item(7, 6, 305.0);

        selection.toggle_select(&skip);
        assert_eq!(selection.selected().map(|s| s.id), Some(7));

        selection.toggle_select(&skip);
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_toggle_other_replaces() {
        let mut selection = ItemSelection::default();
        selection.toggle_select(&item(1, 4, 200.0));
        selection.toggle_select(&item(2, 6, 250.0));

        assert!(selection.is_selected(2));
        assert!(!selection.is_selected(1));
    }

    #[test]
    fn test_matching_is_by_id() {
        let mut selection = ItemSelection::default();
        selection.toggle_select(&item(5, 4, 200.0));

        // Same id with different fields still counts as a re-click
        selection.toggle_select(&item(5, 8, 999.0));
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_accepts_items_outside_any_catalog() {
        let mut selection = ItemSelection::default();
        selection.toggle_select(&item(424242, 40, 0.0));
        assert!(selection.is_selected(424242));
    }
}

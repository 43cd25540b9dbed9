//! Viewer session: reference data plus the current filter state.

use catalogview_catalog::{
    derive_visible_products, EnrichedProduct, FilterAction, FilterState, ReferenceData,
};

use crate::presenter::{CatalogView, ControlPanel};

/// Owns the filter state of one viewer and recomputes the view on demand.
///
/// Filter changes go through [`ViewerSession::dispatch`]; the state is
/// replaced on every action, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerSession {
    reference: ReferenceData,
    filter: FilterState,
}

impl ViewerSession {
    pub fn new(reference: ReferenceData) -> Self {
        Self {
            reference,
            filter: FilterState::default(),
        }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Apply a control action and return the new filter state.
    pub fn dispatch(&mut self, action: FilterAction) -> &FilterState {
        tracing::debug!(?action, "applying filter action");
        self.filter = std::mem::take(&mut self.filter).apply(action);
        &self.filter
    }

    pub fn visible_products(&self) -> Vec<EnrichedProduct> {
        derive_visible_products(&self.reference, &self.filter)
    }

    pub fn view(&self) -> CatalogView {
        CatalogView::from_products(&self.visible_products())
    }

    pub fn controls(&self) -> ControlPanel {
        ControlPanel::new(&self.reference, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ViewerSession {
        ViewerSession::new(ReferenceData::bundled().unwrap())
    }

    #[test]
    fn starts_unfiltered() {
        let session = session();
        assert!(session.filter().is_empty());
        assert_eq!(session.view().rows().len(), session.reference().products().len());
    }

    #[test]
    fn dispatch_replaces_filter_state() {
        let mut session = session();
        session.dispatch(FilterAction::SelectCategory("Drinks".to_string()));
        session.dispatch(FilterAction::SelectCategory("Drinks".to_string()));

        assert_eq!(session.filter().selected_category_titles().len(), 1);
        let names: Vec<_> = session.view().rows().iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec!["Milk", "Beer"]);
        assert!(session.controls().all_categories_outlined);
    }

    #[test]
    fn unmatched_search_switches_to_no_matches_and_clear_restores() {
        let mut session = session();
        session.dispatch(FilterAction::SetSearchQuery("caviar".to_string()));
        assert!(session.view().is_empty());
        assert!(session.controls().show_clear_search);

        session.dispatch(FilterAction::ClearSearch);
        assert!(!session.view().is_empty());
        assert!(session.filter().is_empty());
    }
}

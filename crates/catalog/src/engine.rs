//! Enrichment + filter engine.
//!
//! Pure derivation of the rows a catalog view shows: every call recomputes
//! from the reference data and the filter state, with no cached state.
//! Output order always follows the input product order.

use crate::filter::FilterState;
use crate::model::EnrichedProduct;
use crate::reference::ReferenceData;

/// Join every product to its category and owner, keeping unresolved rows.
pub fn enrich_products(reference: &ReferenceData) -> Vec<EnrichedProduct> {
    reference
        .products()
        .iter()
        .map(|product| {
            let (category, user) = reference.resolve(product);
            EnrichedProduct::new(product, category, user)
        })
        .collect()
}

/// Enrich the products and keep the rows passing every active criterion
/// (owner name, case-insensitive name search, category titles).
pub fn derive_visible_products(
    reference: &ReferenceData,
    filter: &FilterState,
) -> Vec<EnrichedProduct> {
    let visible: Vec<EnrichedProduct> = reference
        .products()
        .iter()
        .filter_map(|product| {
            let (category, user) = reference.resolve(product);
            filter
                .matches(product, category, user)
                .then(|| EnrichedProduct::new(product, category, user))
        })
        .collect();

    tracing::debug!(
        total = reference.products().len(),
        visible = visible.len(),
        "derived visible products"
    );
    visible
}

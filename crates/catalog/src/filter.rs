//! Filter criteria and the transitions the viewer controls apply to them.

use serde::{Deserialize, Serialize};

use catalogview_core::ValueObject;

use crate::model::{Category, Product, User};

/// Selected category titles: unique, kept in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySelection(Vec<String>);

impl CategorySelection {
    pub fn contains(&self, title: &str) -> bool {
        self.0.iter().any(|t| t == title)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    fn insert(mut self, title: String) -> Self {
        if !self.contains(&title) {
            self.0.push(title);
        }
        self
    }
}

impl From<Vec<String>> for CategorySelection {
    fn from(titles: Vec<String>) -> Self {
        titles.into_iter().fold(Self::default(), Self::insert)
    }
}

impl From<CategorySelection> for Vec<String> {
    fn from(selection: CategorySelection) -> Self {
        selection.0
    }
}

impl ValueObject for CategorySelection {}

/// A single filter-state transition, one per viewer control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterAction {
    SelectAllUsers,
    SelectUser(String),
    SetSearchQuery(String),
    ClearSearch,
    SelectCategory(String),
    SelectAllCategories,
    ResetAll,
}

/// The active filter criteria. An empty field means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    selected_user_name: String,
    search_query: String,
    selected_category_titles: CategorySelection,
}

impl ValueObject for FilterState {}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_user_name(&self) -> &str {
        &self.selected_user_name
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category_titles(&self) -> &CategorySelection {
        &self.selected_category_titles
    }

    pub fn is_empty(&self) -> bool {
        self.selected_user_name.is_empty()
            && self.search_query.is_empty()
            && self.selected_category_titles.is_empty()
    }

    /// Apply one transition and return the next state.
    pub fn apply(self, action: FilterAction) -> Self {
        match action {
            FilterAction::SelectAllUsers => Self {
                selected_user_name: String::new(),
                ..self
            },
            FilterAction::SelectUser(name) => Self {
                selected_user_name: name,
                ..self
            },
            FilterAction::SetSearchQuery(query) => Self {
                search_query: query,
                ..self
            },
            FilterAction::ClearSearch => Self {
                search_query: String::new(),
                ..self
            },
            FilterAction::SelectCategory(title) => Self {
                selected_category_titles: self.selected_category_titles.insert(title),
                ..self
            },
            FilterAction::SelectAllCategories => Self {
                selected_category_titles: CategorySelection::default(),
                ..self
            },
            FilterAction::ResetAll => Self::default(),
        }
    }

    /// Apply a sequence of transitions in order.
    pub fn apply_all(self, actions: impl IntoIterator<Item = FilterAction>) -> Self {
        actions.into_iter().fold(self, Self::apply)
    }

    /// Whether a resolved row passes every active criterion.
    pub(crate) fn matches(
        &self,
        product: &Product,
        category: Option<&Category>,
        user: Option<&User>,
    ) -> bool {
        self.matches_user(user) && self.matches_search(product) && self.matches_category(category)
    }

    fn matches_user(&self, user: Option<&User>) -> bool {
        self.selected_user_name.is_empty()
            || user.is_some_and(|u| u.name == self.selected_user_name)
    }

    fn matches_search(&self, product: &Product) -> bool {
        self.search_query.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search_query.to_lowercase())
    }

    fn matches_category(&self, category: Option<&Category>) -> bool {
        self.selected_category_titles.is_empty()
            || category.is_some_and(|c| self.selected_category_titles.contains(&c.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(title: &str) -> FilterAction {
        FilterAction::SelectCategory(title.to_string())
    }

    #[test]
    fn default_state_has_no_criteria() {
        assert!(FilterState::new().is_empty());
    }

    #[test]
    fn selecting_a_user_replaces_the_previous_one() {
        let state = FilterState::new().apply_all([
            FilterAction::SelectUser("Max".to_string()),
            FilterAction::SelectUser("Anna".to_string()),
        ]);
        assert_eq!(state.selected_user_name(), "Anna");

        let state = state.apply(FilterAction::SelectAllUsers);
        assert_eq!(state.selected_user_name(), "");
    }

    #[test]
    fn search_query_is_kept_verbatim() {
        let state = FilterState::new().apply(FilterAction::SetSearchQuery("  MiLk ".to_string()));
        assert_eq!(state.search_query(), "  MiLk ");

        let state = state.apply(FilterAction::ClearSearch);
        assert_eq!(state.search_query(), "");
    }

    #[test]
    fn selecting_a_category_twice_does_not_duplicate_it() {
        let state =
            FilterState::new().apply_all([select("Grocery"), select("Drinks"), select("Grocery")]);
        let titles: Vec<&str> = state.selected_category_titles().iter().collect();
        assert_eq!(titles, vec!["Grocery", "Drinks"]);
    }

    #[test]
    fn select_all_categories_clears_only_categories() {
        let state = FilterState::new().apply_all([
            FilterAction::SelectUser("Max".to_string()),
            select("Grocery"),
            FilterAction::SelectAllCategories,
        ]);
        assert!(state.selected_category_titles().is_empty());
        assert_eq!(state.selected_user_name(), "Max");
    }

    #[test]
    fn reset_all_clears_every_field() {
        let state = FilterState::new()
            .apply_all([
                FilterAction::SelectUser("Max".to_string()),
                FilterAction::SetSearchQuery("milk".to_string()),
                select("Grocery"),
            ])
            .apply(FilterAction::ResetAll);
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn deserialized_state_keeps_category_titles_unique() {
        let state: FilterState = serde_json::from_value(serde_json::json!({
            "selectedUserName": "",
            "searchQuery": "",
            "selectedCategoryTitles": ["Drinks", "Fruits", "Drinks"],
        }))
        .unwrap();

        assert_eq!(state.selected_category_titles().len(), 2);
        let titles: Vec<&str> = state.selected_category_titles().iter().collect();
        assert_eq!(titles, vec!["Drinks", "Fruits"]);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selectedCategoryTitles"], serde_json::json!(["Drinks", "Fruits"]));
    }

    #[test]
    fn actions_serialize_with_type_tag() {
        let json = serde_json::to_value(FilterAction::SelectUser("Max".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "select_user", "value": "Max" }));

        let action: FilterAction = serde_json::from_str(r#"{"type":"reset_all"}"#).unwrap();
        assert_eq!(action, FilterAction::ResetAll);
    }
}

//! Leptos catalog page: filter panel and product table.

use leptos::*;

use catalogview_catalog::{FilterAction, ReferenceData};

use crate::presenter::{CatalogView, ControlPanel, COLUMNS, NO_MATCHING_MESSAGE};
use crate::session::ViewerSession;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let reference = ReferenceData::bundled().unwrap_or_else(|e| {
        logging::error!("failed to load bundled catalog data: {e}");
        ReferenceData::new(Vec::new(), Vec::new(), Vec::new())
    });

    let session = create_rw_signal(ViewerSession::new(reference));
    let on_action = Callback::new(move |action: FilterAction| {
        session.update(|s| {
            s.dispatch(action);
        })
    });

    let controls = create_memo(move |_| session.with(ViewerSession::controls));
    let catalog = create_memo(move |_| session.with(ViewerSession::view));

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <FilterPanel controls=controls on_action=on_action/>
                </div>

                <div class="box table-container">
                    <ProductTable catalog=catalog/>
                </div>
            </div>
        </div>
    }
}

/// Owner tabs, search box, category buttons and the reset control.
#[component]
fn FilterPanel(controls: Memo<ControlPanel>, on_action: Callback<FilterAction>) -> impl IntoView {
    view! {
        <nav class="panel">
            <p class="panel-heading">"Filters"</p>

            <p class="panel-tabs has-text-weight-bold">
                <a
                    href="#/"
                    class:is-active=move || controls.with(|c| c.all_users_active)
                    on:click=move |_| on_action.call(FilterAction::SelectAllUsers)
                >
                    "All"
                </a>
                {move || {
                    controls.with(|c| {
                        c.users
                            .iter()
                            .cloned()
                            .map(|tab| {
                                let action = tab.action;
                                view! {
                                    <a
                                        href="#/"
                                        class:is-active=tab.active
                                        on:click=move |_| on_action.call(action.clone())
                                    >
                                        {tab.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    })
                }}
            </p>

            <div class="panel-block">
                <p class="control has-icons-left has-icons-right">
                    <input
                        type="text"
                        class="input"
                        placeholder="Search"
                        prop:value=move || controls.with(|c| c.search_query.clone())
                        on:input=move |ev| {
                            on_action.call(FilterAction::SetSearchQuery(event_target_value(&ev)))
                        }
                    />
                    <span class="icon is-left">
                        <i class="fas fa-search" aria-hidden="true"></i>
                    </span>
                    <Show when=move || controls.with(|c| c.show_clear_search)>
                        <span class="icon is-right">
                            <button
                                type="button"
                                class="delete"
                                on:click=move |_| on_action.call(FilterAction::ClearSearch)
                            ></button>
                        </span>
                    </Show>
                </p>
            </div>

            <div class="panel-block is-flex-wrap-wrap">
                <a
                    href="#/"
                    class="button is-success mr-6"
                    class:is-outlined=move || controls.with(|c| c.all_categories_outlined)
                    on:click=move |_| on_action.call(FilterAction::SelectAllCategories)
                >
                    "All"
                </a>
                {move || {
                    controls.with(|c| {
                        c.categories
                            .iter()
                            .cloned()
                            .map(|button| {
                                let action = button.action;
                                view! {
                                    <a
                                        href="#/"
                                        class="button mr-2 my-1"
                                        class:is-info=button.selected
                                        on:click=move |_| on_action.call(action.clone())
                                    >
                                        {button.title}
                                    </a>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>

            <div class="panel-block">
                <a
                    href="#/"
                    class="button is-link is-outlined is-fullwidth"
                    on:click=move |_| on_action.call(FilterAction::ResetAll)
                >
                    "Reset all filters"
                </a>
            </div>
        </nav>
    }
}

/// Product table, or the no-match message when nothing is visible.
#[component]
fn ProductTable(catalog: Memo<CatalogView>) -> impl IntoView {
    move || match catalog.get() {
        CatalogView::NoMatches => view! { <p>{NO_MATCHING_MESSAGE}</p> }.into_view(),
        CatalogView::Table(rows) => view! {
            <table class="table is-striped is-narrow is-fullwidth">
                <thead>
                    <tr>
                        {COLUMNS
                            .iter()
                            .map(|column| {
                                // sort icons are decorative only
                                view! {
                                    <th>
                                        <span class="is-flex is-flex-wrap-nowrap">
                                            {*column}
                                            <a href="#/">
                                                <span class="icon">
                                                    <i class="fas fa-sort"></i>
                                                </span>
                                            </a>
                                        </span>
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td class="has-text-weight-bold">{row.id.to_string()}</td>
                                    <td>{row.name}</td>
                                    <td>{row.category_label}</td>
                                    <td class=row.owner_tone.css_class().unwrap_or_default()>
                                        {row.owner_name}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_view(),
    }
}

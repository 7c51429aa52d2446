use leptos::*;
use strum::IntoEnumIterator;

use crate::application::dispatch_or_log;
use crate::domain::filters::{FilterField, SortDirection, SortKey};
use crate::domain::session::SessionCommand;
use crate::global_state;
use crate::presentation::{FilterDropdown, ItemCard};

const PAGES: [&str; 5] = ["1", "2", "3", "...", "100"];

/// Everything shown after "УЗНАТЬ СТОИМОСТЬ": owner summary, controls,
/// the item grid and pagination.
#[component]
pub fn ResultsPanel() -> impl IntoView {
    let session = global_state::session();
    let summary = global_state::inventory_summary();
    let currency = move || session.with(|state| state.currency());

    view! {
        <section class="results">
            <div class="summary-card">
                <div class="summary-owner">
                    <div class="avatar">
                        <img src=move || summary.with(|s| s.avatar_url.clone()) alt="User Avatar"/>
                    </div>
                    <div>
                        <h2 class="owner-name">{move || summary.with(|s| s.owner_name.clone())}</h2>
                        <div class="summary-value">
                            <span class="summary-caption">{move || summary.with(|s| s.value_caption())}</span>
                            <span class="summary-amount">
                                {move || summary.with(|s| s.value_label(currency()))}
                            </span>
                        </div>
                    </div>
                </div>
                <div class="summary-download">
                    <span class="summary-caption">"Скачать стоимость инвентаря в txt формате:"</span>
                    <button class="primary-button">"⬇ СКАЧАТЬ"</button>
                </div>
            </div>

            <div class="inventory">
                <div class="inventory-caption">{move || summary.with(|s| s.count_caption())}</div>

                <div class="controls">
                    {FilterField::iter()
                        .map(|field| view! { <FilterDropdown field=field/> })
                        .collect_view()}
                    <div class="sort-buttons">
                        {SortKey::iter().map(|key| view! { <SortButton sort_key=key/> }).collect_view()}
                    </div>
                </div>

                <div class="grid-panel">
                    <div class="item-grid">
                        <For
                            each=move || session.with(|state| state.items().to_vec())
                            key=|item| (item.id.clone(), item.in_cart)
                            children=|item| view! { <ItemCard item=item/> }
                        />
                    </div>
                    <div class="pagination">
                        {PAGES
                            .iter()
                            .enumerate()
                            .map(|(index, page)| {
                                view! {
                                    <button class="page-button" class:current={index == 0}>
                                        {*page}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Header button of a sortable column. Cycling only changes the arrow.
#[component]
pub fn SortButton(sort_key: SortKey) -> impl IntoView {
    let session = global_state::session();
    let direction = move || session.with(|state| state.sort().direction(sort_key));

    view! {
        <button
            class="sort-button"
            class:active=move || direction() != SortDirection::Unsorted
            on:click=move |_| dispatch_or_log(SessionCommand::CycleSort(sort_key))
        >
            {sort_key.label()}
            <span class="sort-glyph">{move || direction().glyph()}</span>
        </button>
    }
}

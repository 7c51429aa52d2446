use leptos::*;

use crate::application::dispatch_or_log;
use crate::domain::currency::Currency;
use crate::domain::filters::FilterField;
use crate::domain::session::{DropdownId, SessionCommand};
use crate::global_state;

/// Matches every dropdown button and menu; clicks inside them are not
/// "outside" clicks.
pub const DROPDOWN_SELECTOR: &str = "[data-dropdown]";

/// Currency picker next to the profile input
#[component]
pub fn CurrencyDropdown() -> impl IntoView {
    let session = global_state::session();
    let id = DropdownId::Currency;
    let is_open = move || session.with(|state| state.is_dropdown_open(id));
    let current = move || session.with(|state| state.currency());

    view! {
        <div class="dropdown currency-dropdown" data-dropdown="">
            <button
                class="dropdown-button"
                on:click=move |_| dispatch_or_log(SessionCommand::ToggleDropdown(id))
            >
                <span>{move || current().option_label()}</span>
                <span class="chevron" class:open=is_open>"▾"</span>
            </button>
            <Show when=is_open>
                <div class="dropdown-menu align-right" data-dropdown="">
                    {Currency::all()
                        .map(|currency| {
                            view! {
                                <button
                                    class="dropdown-option"
                                    class:selected=move || current() == currency
                                    on:click=move |_| dispatch_or_log(SessionCommand::SelectCurrency(currency))
                                >
                                    {currency.option_label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

/// One of the four filter selectors of the results panel
#[component]
pub fn FilterDropdown(field: FilterField) -> impl IntoView {
    let session = global_state::session();
    let id = DropdownId::Filter(field);
    let is_open = move || session.with(|state| state.is_dropdown_open(id));
    let selected = move || session.with(|state| state.filters().value_of(field));

    view! {
        <div class="dropdown filter-dropdown" data-dropdown="">
            <button
                class="dropdown-button"
                title=field.to_string()
                on:click=move |_| dispatch_or_log(SessionCommand::ToggleDropdown(id))
            >
                <span>{move || session.with(|state| state.filters().label_of(field))}</span>
                <span class="chevron" class:open=is_open>"▾"</span>
            </button>
            <Show when=is_open>
                <div class="dropdown-menu" data-dropdown="">
                    {field
                        .choices()
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <button
                                    class="dropdown-option"
                                    class:selected=move || selected() == choice.value
                                    on:click=move |_| {
                                        dispatch_or_log(SessionCommand::SetFilter {
                                            field,
                                            value: choice.value.to_string(),
                                        })
                                    }
                                >
                                    {choice.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

use leptos::*;

use crate::application::dispatch_or_log;
use crate::domain::catalog::InventoryItem;
use crate::domain::session::SessionCommand;
use crate::global_state;
use crate::infrastructure::clipboard::copy_text;

/// Grid card for one item.
///
/// Every value on the card copies itself on click. The hover overlay adds
/// the item to the cart or, for cart members, removes it.
#[component]
pub fn ItemCard(item: InventoryItem) -> impl IntoView {
    let session = global_state::session();
    let currency = move || session.with(|state| state.currency());

    let InventoryItem { id, name, image, market_price, quantity, in_cart, .. } = item.clone();
    let line_total = item.line_total();

    let toggle = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        dispatch_or_log(SessionCommand::ToggleCart(id.clone()));
    };

    let overlay = if in_cart {
        view! {
            <div class="overlay-actions">
                <button class="in-cart-badge" disabled=true>"🛒 В КОРЗИНЕ"</button>
                <div class="overlay-divider"></div>
                <button class="remove-button" on:click=toggle>"УБРАТЬ"</button>
            </div>
        }
        .into_view()
    } else {
        view! { <button class="add-button" on:click=toggle>"ДОБАВИТЬ"</button> }.into_view()
    };

    let alt = name.clone();
    let copied_name = name.clone();

    view! {
        <div class="item-card" class:in-cart=in_cart>
            <div class="item-image">
                <img src=image alt=alt/>
                <div class="item-overlay">{overlay}</div>
            </div>
            <div class="item-separator"></div>
            <div class="item-body">
                <div class="item-name" on:click=move |_| copy_text(copied_name.clone())>
                    <h3>{name}</h3>
                    <span class="copy-glyph">"⧉"</span>
                </div>
                <div class="item-values">
                    <div class="value-caption">"Количество"</div>
                    <div class="value-caption right">"Стоимость"</div>
                    <div class="value unit-quantity" on:click=|_| copy_text("1".to_string())>
                        "1 шт"
                    </div>
                    <div
                        class="value unit-price right"
                        on:click=move |_| copy_text(currency().format_suffixed(market_price))
                    >
                        {move || currency().format_suffixed(market_price)}
                    </div>
                    <div class="value quantity" on:click=move |_| copy_text(quantity.to_string())>
                        {format!("{} шт", quantity)}
                    </div>
                    <div
                        class="value line-total right"
                        on:click=move |_| copy_text(currency().format_suffixed(line_total))
                    >
                        {move || currency().format_suffixed(line_total)}
                    </div>
                </div>
            </div>
            <Show when=move || in_cart>
                <div class="check-badge">"✓"</div>
            </Show>
        </div>
    }
}

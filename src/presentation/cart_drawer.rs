use leptos::*;

use crate::application::dispatch_or_log;
use crate::domain::catalog::InventoryItem;
use crate::domain::session::SessionCommand;
use crate::global_state;

/// Side drawer listing the cart members in catalog order
#[component]
pub fn CartDrawer() -> impl IntoView {
    let session = global_state::session();
    let members = move || session.with(|state| state.selection().to_owned_items());

    view! {
        <aside class="cart-drawer" class:open=move || session.with(|state| state.cart_open())>
            <div class="cart-drawer-inner">
                <div class="cart-header">
                    <h2>"Корзина"</h2>
                    <button class="icon-button" on:click=|_| dispatch_or_log(SessionCommand::CloseCart)>
                        "✕"
                    </button>
                </div>
                <div class="cart-list">
                    <For
                        each=members
                        key=|item| item.id.clone()
                        children=|item| view! { <CartRow item=item/> }
                    />
                </div>
                <div class="cart-footer">
                    <div class="cart-total-row">
                        <span class="cart-total-caption">"Итого:"</span>
                        <span class="cart-total">
                            {move || session.with(|state| state.cart_total_label())}
                        </span>
                    </div>
                    <button class="primary-button wide">"ОФОРМИТЬ ЗАКАЗ"</button>
                </div>
            </div>
        </aside>
    }
}

#[component]
pub fn CartRow(item: InventoryItem) -> impl IntoView {
    let session = global_state::session();
    let InventoryItem { id, name, image, market_price, .. } = item;
    let alt = name.clone();

    view! {
        <div class="cart-row">
            <img src=image alt=alt/>
            <div class="cart-row-body">
                <h3>{name}</h3>
                <p class="cart-row-price">
                    {move || session.with(|state| state.currency().format_prefixed(market_price))}
                </p>
            </div>
            <button
                class="icon-button"
                on:click=move |_| dispatch_or_log(SessionCommand::ToggleCart(id.clone()))
            >
                "−"
            </button>
        </div>
    }
}

/// Floating button opening the drawer, badged with the cart size
#[component]
pub fn CartButton() -> impl IntoView {
    let session = global_state::session();
    let count = move || session.with(|state| state.selection().count());

    view! {
        <button class="cart-button" on:click=|_| dispatch_or_log(SessionCommand::OpenCart)>
            "🛒"
            <Show when=move || { count() > 0 }>
                <span class="cart-badge">{count}</span>
            </Show>
        </button>
    }
}

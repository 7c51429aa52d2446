use leptos::*;

use crate::application::dispatch_or_log;
use crate::domain::session::SessionCommand;
use crate::event_utils::dismiss_on_outside_click;
use crate::global_state;
use crate::presentation::{CartButton, CartDrawer, CurrencyDropdown, DROPDOWN_SELECTOR, ResultsPanel};

const PROFILE_PLACEHOLDER: &str = "https://steamcommunity.com/profiles/76561198083135565/";

/// 🦀 Главный компонент страницы оценки инвентаря
#[component]
pub fn App() -> impl IntoView {
    let session = global_state::session();

    // Клик мимо любого dropdown закрывает все, ничего не выбирая
    dismiss_on_outside_click(DROPDOWN_SELECTOR, || {
        dispatch_or_log(SessionCommand::CloseAllDropdowns)
    });

    view! {
        <style>
            {r#"
            * {
                box-sizing: border-box;
            }

            body {
                margin: 0;
            }

            .inventory-app {
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #191C22;
                min-height: 100vh;
                color: white;
            }

            button {
                font-family: inherit;
                cursor: pointer;
                border: none;
            }

            .header {
                height: 80px;
                padding: 0 24px;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .header h1 {
                font-size: 18px;
                font-weight: 700;
                letter-spacing: 0.025em;
            }

            .primary-button {
                background: #3C73DD;
                color: rgba(255, 255, 255, 0.95);
                font-weight: 700;
                font-size: 14px;
                border-radius: 12px;
                padding: 8px 16px;
                height: 40px;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                transition: background 0.2s ease;
            }

            .primary-button:hover {
                background: #4d82ec;
            }

            .primary-button.wide {
                width: 100%;
                border-radius: 8px;
            }

            .primary-button.lookup {
                width: 200px;
                height: 48px;
                box-shadow: 0 10px 15px rgba(60, 115, 221, 0.2);
                transition: all 0.2s ease;
            }

            .primary-button.lookup:hover {
                transform: scale(1.02);
            }

            .hero-banner {
                width: 100%;
                height: 600px;
                background: #212327;
                overflow: hidden;
            }

            .hero-banner img {
                width: 100%;
                height: 100%;
                object-fit: cover;
                object-position: center 25%;
            }

            .page {
                padding: 24px;
            }

            .page-card {
                min-height: calc(100vh - 4rem);
                border-radius: 16px;
                background: #1E2128;
                padding: 32px;
                box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
            }

            .intro {
                text-align: center;
                margin: 24px 0 32px;
                color: rgba(255, 255, 255, 0.9);
                line-height: 1.6;
            }

            .lookup-label {
                display: block;
                text-align: center;
                font-size: 14px;
                color: rgba(255, 255, 255, 0.7);
                margin-bottom: 16px;
            }

            .lookup-row {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 12px;
                max-width: 1000px;
                margin: 0 auto;
            }

            .profile-field {
                position: relative;
                flex: 1;
            }

            .profile-input {
                width: 100%;
                height: 40px;
                background: #313131;
                border: 2px solid #414141;
                border-radius: 8px;
                padding: 0 12px;
                font-size: 14px;
                color: rgba(255, 255, 255, 0.9);
            }

            .profile-input:focus {
                outline: none;
                border-color: #3C73DD;
            }

            .clear-button {
                position: absolute;
                right: 12px;
                top: 50%;
                transform: translateY(-50%);
                background: none;
                color: rgba(255, 255, 255, 0.5);
            }

            .lookup-action {
                display: flex;
                justify-content: center;
                margin-top: 24px;
            }

            .dropdown {
                position: relative;
            }

            .dropdown-button {
                width: 150px;
                height: 40px;
                background: #2C3035;
                border: 2px solid rgba(255, 255, 255, 0.2);
                border-radius: 8px;
                padding: 0 12px;
                color: rgba(255, 255, 255, 0.9);
                font-size: 14px;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }

            .currency-dropdown .dropdown-button {
                border-color: #414141;
            }

            .chevron {
                transition: transform 0.2s ease;
            }

            .chevron.open {
                transform: rotate(180deg);
            }

            .dropdown-menu {
                position: absolute;
                top: 48px;
                left: 0;
                width: 150px;
                background: #2C3035;
                border: 2px solid rgba(255, 255, 255, 0.2);
                border-radius: 12px;
                z-index: 50;
                overflow: hidden;
            }

            .dropdown-menu.align-right {
                left: auto;
                right: 0;
            }

            .dropdown-option {
                width: 100%;
                text-align: left;
                padding: 8px 12px;
                font-size: 14px;
                background: none;
                color: rgba(255, 255, 255, 0.5);
            }

            .dropdown-option:hover {
                background: rgba(60, 115, 221, 0.2);
            }

            .dropdown-option.selected {
                color: white;
            }

            .results {
                margin-top: 32px;
            }

            .summary-card {
                background: #2C3035;
                border-radius: 12px;
                padding: 24px;
                display: flex;
                flex-wrap: wrap;
                justify-content: space-between;
                align-items: center;
                gap: 24px;
            }

            .summary-owner {
                display: flex;
                align-items: center;
                gap: 24px;
            }

            .avatar {
                width: 100px;
                height: 100px;
                border-radius: 8px;
                overflow: hidden;
                background: #1E2128;
            }

            .avatar img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }

            .owner-name {
                font-size: 20px;
                margin: 0 0 8px;
            }

            .summary-value,
            .summary-download {
                display: flex;
                flex-direction: column;
                gap: 4px;
            }

            .summary-download {
                align-items: flex-end;
                gap: 12px;
            }

            .summary-caption {
                color: rgba(255, 255, 255, 0.5);
                font-weight: 500;
            }

            .summary-amount {
                font-size: 24px;
                font-weight: 600;
                color: #4DAEFC;
                white-space: nowrap;
            }

            .inventory {
                margin-top: 24px;
            }

            .inventory-caption {
                color: rgba(255, 255, 255, 0.9);
                margin-bottom: 16px;
            }

            .controls {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 16px;
                margin-bottom: 24px;
            }

            .sort-buttons {
                margin-left: auto;
                display: flex;
                gap: 24px;
            }

            .sort-button {
                background: none;
                text-transform: uppercase;
                font-size: 14px;
                font-weight: 500;
                color: rgba(255, 255, 255, 0.5);
                display: flex;
                align-items: center;
                gap: 4px;
            }

            .sort-button.active {
                color: white;
            }

            .grid-panel {
                background: #1E2128;
                border-radius: 12px;
                padding: 24px;
            }

            .item-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
                gap: 16px;
            }

            .item-card {
                position: relative;
                background: #2C3035;
                border-radius: 8px;
                overflow: hidden;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            }

            .item-image {
                position: relative;
                aspect-ratio: 270 / 178;
                background: linear-gradient(to bottom, #3C3C3C, #2C2C2C);
            }

            .item-image img {
                width: 100%;
                height: 100%;
                object-fit: cover;
            }

            .item-overlay {
                position: absolute;
                inset: 0;
                background: rgba(0, 0, 0, 0.6);
                backdrop-filter: blur(4px);
                opacity: 0;
                transition: opacity 0.2s ease;
                display: flex;
                align-items: center;
                justify-content: center;
            }

            .item-card:hover .item-overlay {
                opacity: 1;
            }

            .overlay-actions {
                width: 140px;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 12px;
            }

            .add-button {
                background: none;
                color: #3677AB;
                font-weight: 700;
                font-size: 14px;
                text-decoration: underline;
            }

            .add-button:hover {
                color: #4488CC;
            }

            .in-cart-badge,
            .remove-button {
                width: 100%;
                height: 40px;
                border-radius: 8px;
                font-weight: 700;
                font-size: 14px;
                color: rgba(255, 255, 255, 0.9);
            }

            .in-cart-badge {
                background: #4EC75A;
                cursor: default;
            }

            .remove-button {
                background: #FF4A4A;
            }

            .remove-button:hover {
                background: #FF5C5C;
            }

            .overlay-divider {
                width: 100%;
                height: 1px;
                background: rgba(255, 255, 255, 0.2);
            }

            .item-separator {
                height: 1px;
                background: #707071;
            }

            .item-body {
                padding: 12px;
            }

            .item-name {
                display: flex;
                align-items: flex-start;
                gap: 6px;
                margin-bottom: 8px;
                cursor: pointer;
            }

            .item-name h3 {
                margin: 0;
                font-size: 14px;
                font-weight: 500;
                color: rgba(255, 255, 255, 0.95);
                word-break: break-word;
            }

            .copy-glyph {
                font-size: 12px;
                color: rgba(255, 255, 255, 0.5);
                opacity: 0;
                transition: opacity 0.2s ease;
            }

            .item-name:hover .copy-glyph {
                opacity: 1;
            }

            .item-values {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 8px;
                font-size: 12px;
            }

            .item-values .right {
                text-align: right;
            }

            .value-caption {
                color: rgba(255, 255, 255, 0.5);
            }

            .value {
                cursor: pointer;
                white-space: nowrap;
                transition: color 0.2s ease;
            }

            .unit-quantity:hover {
                color: #4DAEFC;
            }

            .unit-price {
                color: #4DAEFC;
            }

            .unit-price:hover {
                color: #6DBFFF;
            }

            .quantity:hover {
                color: #06FF4C;
            }

            .line-total {
                color: #06FF4C;
            }

            .line-total:hover {
                color: #39FF73;
            }

            .check-badge {
                position: absolute;
                top: 8px;
                right: 8px;
                width: 24px;
                height: 24px;
                border-radius: 50%;
                background: #4EC75A;
                display: flex;
                align-items: center;
                justify-content: center;
                font-size: 14px;
            }

            .pagination {
                display: flex;
                justify-content: center;
                gap: 8px;
                margin-top: 24px;
            }

            .page-button {
                width: 32px;
                height: 32px;
                border-radius: 8px;
                background: none;
                color: rgba(255, 255, 255, 0.5);
            }

            .page-button:hover {
                color: white;
                background: #2C3035;
            }

            .page-button.current {
                background: #3C73DD;
                color: white;
            }

            .cart-button {
                position: fixed;
                bottom: 24px;
                right: 24px;
                width: 48px;
                height: 48px;
                border-radius: 50%;
                background: #2C3035;
                font-size: 20px;
                box-shadow: 0 4px 10px rgba(0, 0, 0, 0.2);
                z-index: 10000;
            }

            .cart-button:hover {
                background: #3C3C3C;
            }

            .cart-badge {
                position: absolute;
                top: -4px;
                right: -4px;
                min-width: 20px;
                height: 20px;
                padding: 0 6px;
                border-radius: 10px;
                background: #3C73DD;
                font-size: 12px;
                font-weight: 700;
                color: white;
                display: flex;
                align-items: center;
                justify-content: center;
            }

            .cart-drawer {
                position: fixed;
                top: 0;
                right: 0;
                width: 320px;
                height: 100%;
                background: #2C3035;
                box-shadow: -4px 0 10px rgba(0, 0, 0, 0.2);
                transform: translateX(100%);
                transition: transform 0.3s ease-in-out;
                z-index: 10000;
            }

            .cart-drawer.open {
                transform: translateX(0);
            }

            .cart-drawer-inner {
                padding: 16px;
                height: 100%;
                display: flex;
                flex-direction: column;
            }

            .cart-header {
                display: flex;
                align-items: center;
                justify-content: space-between;
                margin-bottom: 16px;
            }

            .cart-header h2 {
                font-size: 18px;
                margin: 0;
            }

            .icon-button {
                background: none;
                color: rgba(255, 255, 255, 0.5);
                font-size: 18px;
                padding: 4px;
            }

            .icon-button:hover {
                color: white;
            }

            .cart-list {
                flex: 1;
                overflow-y: auto;
            }

            .cart-row {
                display: flex;
                align-items: center;
                gap: 12px;
                padding: 12px;
                margin-bottom: 12px;
                background: #191C22;
                border-radius: 8px;
            }

            .cart-row img {
                width: 64px;
                height: 64px;
                object-fit: cover;
                border-radius: 6px;
            }

            .cart-row-body {
                flex: 1;
                min-width: 0;
            }

            .cart-row-body h3 {
                margin: 0 0 4px;
                font-size: 14px;
                font-weight: 500;
                white-space: nowrap;
                overflow: hidden;
                text-overflow: ellipsis;
            }

            .cart-row-price,
            .cart-total {
                margin: 0;
                font-weight: 700;
                color: #06FF4C;
            }

            .cart-footer {
                border-top: 1px solid rgba(255, 255, 255, 0.1);
                padding-top: 12px;
                margin-top: 12px;
            }

            .cart-total-row {
                display: flex;
                align-items: center;
                justify-content: space-between;
                margin-bottom: 12px;
            }

            .cart-total-caption {
                color: rgba(255, 255, 255, 0.7);
            }

            .cart-total {
                font-size: 18px;
            }
            "#}
        </style>
        <main class="inventory-app">
            <Header/>
            <HeroBanner/>
            <div class="page">
                <div class="page-card">
                    <Intro/>
                    <LookupForm/>
                    <Show when=move || session.with(|state| state.results_revealed())>
                        <ResultsPanel/>
                    </Show>
                </div>
            </div>
            <CartButton/>
            <CartDrawer/>
        </main>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Steam Inventory"</h1>
            <button class="primary-button">"ВОЙТИ ЧЕРЕЗ STEAM"</button>
        </header>
    }
}

#[component]
fn HeroBanner() -> impl IntoView {
    let banner = global_state::page_config().banner_url.clone();

    view! {
        <div class="hero-banner">
            <img src=banner alt="Gaming Heroes Banner"/>
        </div>
    }
}

#[component]
fn Intro() -> impl IntoView {
    view! {
        <div class="intro">
            <p>
                "SkinSpace Sorter – это сервис, позволяющий узнать стоимость инвентаря по каждой игре из вашего аккаунта в Steam."
            </p>
            <p>"Наш сайт позволяет оценить стоимость инвентаря таких игр как: CS:GO, DOTA 2, RUST и других."</p>
        </div>
    }
}

/// Поле профиля, выбор валюты и кнопка "УЗНАТЬ СТОИМОСТЬ"
#[component]
fn LookupForm() -> impl IntoView {
    let session = global_state::session();
    let has_input = move || session.with(|state| !state.profile_input().is_empty());

    view! {
        <div class="lookup">
            <label class="lookup-label" for="profile-input">
                "Вставьте в данное поле ссылку на ваш профиль в Steam, Steam ID или ссылку на Маркет и выберите валюту."
            </label>
            <div class="lookup-row">
                <div class="profile-field">
                    <input
                        id="profile-input"
                        class="profile-input"
                        type="text"
                        placeholder=PROFILE_PLACEHOLDER
                        prop:value=move || session.with(|state| state.profile_input().to_string())
                        on:input=move |ev| dispatch_or_log(SessionCommand::EditProfile(event_target_value(&ev)))
                    />
                    <Show when=has_input>
                        <button class="clear-button" on:click=|_| dispatch_or_log(SessionCommand::ClearProfile)>
                            "✕"
                        </button>
                    </Show>
                </div>
                <CurrencyDropdown/>
            </div>
            <div class="lookup-action">
                <button
                    class="primary-button lookup"
                    on:click=|_| dispatch_or_log(SessionCommand::RevealResults)
                >
                    "УЗНАТЬ СТОИМОСТЬ"
                </button>
            </div>
        </div>
    }
}

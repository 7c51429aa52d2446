use crate::config::AppConfig;
use crate::domain::catalog::{Catalog, InventorySummary};
use crate::domain::session::SessionState;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub session: RwSignal<SessionState>,
    pub inventory_summary: RwSignal<InventorySummary>,
    pub config: AppConfig,
}

impl Globals {
    fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            session: create_rw_signal(SessionState::new(catalog, config.default_currency)),
            inventory_summary: create_rw_signal(InventorySummary::sample(config.avatar_url.clone())),
            config,
        }
    }
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

/// Installs the page state. Returns false if it was already installed.
pub fn init_globals(config: AppConfig, catalog: Catalog) -> bool {
    GLOBALS.set(Globals::new(config, catalog)).is_ok()
}

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals::new(AppConfig::default(), Catalog::default()))
}

pub fn page_config() -> &'static AppConfig {
    &globals().config
}

crate::global_signals! {
    pub session => session: SessionState,
    pub inventory_summary => inventory_summary: InventorySummary,
}

use super::value_objects::{Game, Price};
use crate::domain::currency::Currency;

/// Header figures of the results panel, as a pricing backend would report
/// them for one profile.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySummary {
    pub owner_name: String,
    pub avatar_url: String,
    pub game: Game,
    pub total_items: u32,
    pub paid_items: u32,
    pub total_value: Price,
}

impl InventorySummary {
    /// The fixed profile shown by the demo page
    pub fn sample(avatar_url: impl Into<String>) -> Self {
        Self {
            owner_name: "Obivan Kenobi".to_string(),
            avatar_url: avatar_url.into(),
            game: Game::CounterStrike,
            total_items: 1090,
            paid_items: 500,
            total_value: Price::new(54645.0),
        }
    }

    pub fn value_caption(&self) -> String {
        format!("Стоимость инвентаря по {}:", self.game.title())
    }

    pub fn value_label(&self, currency: Currency) -> String {
        currency.format_whole(self.total_value)
    }

    pub fn count_caption(&self) -> String {
        format!(
            "Всего в инвентаре по {} найдено {} скинов ({} платные):",
            self.game.title(),
            self.total_items,
            self.paid_items
        )
    }
}

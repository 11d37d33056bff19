//! Headless HUD: keeps the last strings shown.

use bevy::prelude::*;

use crate::shared::DisplaySink;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct HudText {
    pub health: String,
    pub stamina: String,
}

impl DisplaySink for HudText {
    fn show_health(&mut self, text: &str) {
        if self.health != text {
            self.health = text.to_string();
        }
    }

    fn show_stamina(&mut self, text: &str) {
        if self.stamina != text {
            self.stamina = text.to_string();
        }
    }
}

/// "HP: {n}"
pub fn health_text(current: i32) -> String {
    format!("HP: {}", current)
}

/// "Stamina: {n}" (`n` already rounded, see `Stamina::display_value`)
pub fn stamina_text(value: i32) -> String {
    format!("Stamina: {}", value)
}

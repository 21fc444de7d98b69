//! Actor capabilities: Encumbrance, Inventory
//!
//! Оба компонента опциональны. Interaction системы работают с ними best-effort:
//! нет компонента у актора — не ошибка, просто пропускаем.

use bevy::prelude::*;

/// Актор несёт/рассматривает предмет (руки заняты)
///
/// Выставляется при pickup, снимается при store.
/// Locomotion (вне этого крейта) читает `movement_penalty` пока `encumbered == true`.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Encumbrance {
    pub encumbered: bool,
    /// Movement speed multiplier пока encumbered (0.5 = half speed)
    pub movement_penalty: f32,
}

impl Default for Encumbrance {
    fn default() -> Self {
        Self {
            encumbered: false,
            movement_penalty: 0.0, // Во время inspect актор стоит на месте
        }
    }
}

impl Encumbrance {
    pub fn set_encumbered(&mut self, encumbered: bool) {
        self.encumbered = encumbered;
    }

    /// Итоговый speed multiplier для locomotion
    pub fn speed_multiplier(&self) -> f32 {
        if self.encumbered {
            self.movement_penalty
        } else {
            1.0
        }
    }
}

/// Запись о сложенном предмете (копия данных до despawn)
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct ItemRecord {
    pub name: String,
    pub description: String,
}

/// Собранные предметы актора
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Inventory {
    pub items: Vec<ItemRecord>,
}

impl Inventory {
    pub fn add(&mut self, record: ItemRecord) {
        self.items.push(record);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encumbrance_speed_multiplier() {
        let mut encumbrance = Encumbrance {
            encumbered: false,
            movement_penalty: 0.5,
        };
        assert_eq!(encumbrance.speed_multiplier(), 1.0);

        encumbrance.set_encumbered(true);
        assert_eq!(encumbrance.speed_multiplier(), 0.5);

        encumbrance.set_encumbered(false);
        assert_eq!(encumbrance.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_inventory_add_and_lookup() {
        let mut inventory = Inventory::default();
        assert!(inventory.is_empty());

        inventory.add(ItemRecord {
            name: "Brass Key".into(),
            description: "Opens the cellar door".into(),
        });

        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains("Brass Key"));
        assert!(!inventory.contains("Lantern"));
    }
}

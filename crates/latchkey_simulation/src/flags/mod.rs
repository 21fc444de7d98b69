//! FlagStore — общий key → bool state для puzzle-зависимостей между объектами.
//!
//! Один resource на World (сцену). Ключи создаются лениво при первой записи,
//! `get` на неизвестном ключе возвращает `false`. Без persistence: живёт столько же,
//! сколько App.
//!
//! Notification-on-change нет: зависимые объекты читают флаг в момент `interact`.

use bevy::prelude::*;
use std::collections::HashMap;

/// Глобальное хранилище булевых флагов (ключ — имя флага, например "has_key")
#[derive(Resource, Debug, Clone, Default)]
pub struct FlagStore {
    flags: HashMap<String, bool>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Значение флага; отсутствующий ключ = `false`
    pub fn get(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Insert/overwrite без условий
    pub fn set(&mut self, key: impl Into<String>, value: bool) {
        let key = key.into();
        crate::log(&format!("🚩 Flag '{}' = {}", key, value));
        self.flags.insert(key, value);
    }

    /// Был ли ключ хоть раз записан (в отличие от `get`, различает false и "не видели")
    pub fn contains(&self, key: &str) -> bool {
        self.flags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

//! Clip player — модель внешней animation подсистемы
//!
//! Хост (движок) владеет настоящими анимациями; ядру нужен только интерфейс:
//! - `is_playing()`, `has_clip(name)`, `play(name, rate, from_end)`
//! - `ClipFinished { player, name }` когда clip доиграл
//!
//! `ClipPlayer` хранит длины clip'ов и продвигает позицию по `Time`, поэтому
//! headless симуляция и тесты работают без движка.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::interaction::InteractionError;

/// Clip доиграл до конца (или до начала, если rate < 0)
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ClipFinished {
    pub player: Entity,
    pub name: String,
}

/// Что проиграть
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub name: String,
    /// 1.0 = вперёд, -1.0 = назад
    pub rate: f32,
    /// Стартовать с конца clip'а (для rate < 0)
    pub from_end: bool,
}

impl ClipRequest {
    pub fn forward(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rate: 1.0,
            from_end: false,
        }
    }

    /// Тот же clip задом наперёд: rate -1 с конца
    pub fn backward(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rate: -1.0,
            from_end: true,
        }
    }
}

/// Текущий проигрываемый clip
#[derive(Debug, Clone, PartialEq)]
pub struct PlayingClip {
    pub name: String,
    pub rate: f32,
    pub position: f32,
    pub length: f32,
}

/// Animation player entity (один clip за раз)
#[derive(Component, Debug, Clone, Default)]
pub struct ClipPlayer {
    /// name → длина (секунды)
    clips: HashMap<String, f32>,
    playing: Option<PlayingClip>,
}

impl ClipPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clip(mut self, name: impl Into<String>, length: f32) -> Self {
        self.clips.insert(name.into(), length.max(0.0));
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn current(&self) -> Option<&PlayingClip> {
        self.playing.as_ref()
    }

    /// Старт clip'а. Текущий clip заменяется без ClipFinished.
    pub fn play(&mut self, player: Entity, request: &ClipRequest) -> Result<(), InteractionError> {
        let Some(&length) = self.clips.get(&request.name) else {
            return Err(InteractionError::MissingClip {
                player,
                name: request.name.clone(),
            });
        };

        self.playing = Some(PlayingClip {
            name: request.name.clone(),
            rate: request.rate,
            position: if request.from_end { length } else { 0.0 },
            length,
        });

        Ok(())
    }

    /// Продвинуть на `delta` секунд; возвращает имя clip'а, если он доиграл
    pub fn advance(&mut self, delta: f32) -> Option<String> {
        let clip = self.playing.as_mut()?;
        clip.position += delta * clip.rate;

        let finished = if clip.rate > 0.0 {
            clip.position >= clip.length
        } else if clip.rate < 0.0 {
            clip.position <= 0.0
        } else {
            false // rate 0 = пауза
        };

        if finished {
            self.playing.take().map(|clip| clip.name)
        } else {
            None
        }
    }
}

/// Система: продвижение всех clip players, ClipFinished на завершение
pub fn advance_clip_players(
    time: Res<Time>,
    mut players: Query<(Entity, &mut ClipPlayer)>,
    mut finished: EventWriter<ClipFinished>,
) {
    let delta = time.delta_secs();

    for (entity, mut player) in players.iter_mut() {
        if !player.is_playing() {
            continue;
        }
        if let Some(name) = player.advance(delta) {
            crate::log(&format!("🎞️ {:?} clip '{}' finished", entity, name));
            finished.write(ClipFinished { player: entity, name });
        }
    }
}

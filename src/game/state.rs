//! Top-level game state machine
//!
//! AwaitingCommand -> SelectingEncounter <-> Combat -> GameOver
//!
//! Every command runs to completion before returning. A rejected command
//! returns a `CommandError` and leaves the game untouched.

use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

use crate::action_bar::ActionBar;
use crate::combat::{resolve_turn, roll_victory_rewards, TurnOutcome};
use crate::core::config::{ConfigError, GameConfig};
use crate::core::error::CommandError;
use crate::core::types::{GameRng, Level};
use crate::encounter::{
    generate_options, resolve_event, Encounter, EncounterOption, EncounterType, EventOutcome,
    SHOP_MESSAGE,
};
use crate::entity::{Enemy, EnemyKind, PartyMember};
use crate::game::messages::{GameMessage, MessageLog, Severity};
use crate::relic::Relic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GamePhase {
    #[default]
    AwaitingCommand,
    SelectingEncounter,
    Combat,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::AwaitingCommand => "Awaiting command",
            GamePhase::SelectingEncounter => "Selecting encounter",
            GamePhase::Combat => "Combat",
            GamePhase::GameOver => "Game over",
        };
        f.write_str(name)
    }
}

/// Everything a resolved turn reports back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    /// Log lines produced by the turn, in order
    pub entries: Vec<String>,
    /// The fight ended this turn, by victory or by the party falling
    pub combat_complete: bool,
}

/// A single run of the game
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: GameRng,
    phase: GamePhase,
    level: Level,
    party: Vec<PartyMember>,
    relics: Vec<Relic>,
    options: Vec<EncounterOption>,
    encounter: Encounter,
    action_bar: Option<ActionBar>,
    messages: MessageLog,
    turn: u32,
    last_turn_log: Vec<String>,
    last_lock_position: Option<f64>,
}

impl Game {
    /// Create a game with the default roster
    ///
    /// Without a seed one is drawn from the OS; see [`Game::seed`].
    pub fn new(seed: Option<u64>) -> Self {
        Self::from_validated(GameConfig::default(), seed)
    }

    /// Create a game from a custom config, rejecting one that fails
    /// [`GameConfig::validate`]
    pub fn with_config(config: GameConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, seed))
    }

    fn from_validated(config: GameConfig, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let party = Self::fresh_party(&config);
        let messages = MessageLog::with_capacity(config.message_log_capacity);

        Self {
            config,
            seed,
            rng: GameRng::seed_from_u64(seed),
            phase: GamePhase::AwaitingCommand,
            level: 1,
            party,
            relics: Vec::new(),
            options: Vec::new(),
            encounter: Encounter::None,
            action_bar: None,
            messages,
            turn: 0,
            last_turn_log: Vec::new(),
            last_lock_position: None,
        }
    }

    fn fresh_party(config: &GameConfig) -> Vec<PartyMember> {
        config.roster.iter().map(PartyMember::from_config).collect()
    }

    /// Return to `AwaitingCommand` with a fresh party and an empty run
    ///
    /// The random stream is not reseeded.
    pub fn reset(&mut self) {
        self.phase = GamePhase::AwaitingCommand;
        self.level = 1;
        self.party = Self::fresh_party(&self.config);
        self.relics.clear();
        self.options.clear();
        self.encounter = Encounter::None;
        self.action_bar = None;
        self.messages.clear();
        self.turn = 0;
        self.last_turn_log.clear();
        self.last_lock_position = None;
        tracing::debug!("Game reset");
    }

    /// Reset and offer the first set of encounters
    pub fn start_new_run(&mut self) {
        self.reset();
        self.phase = GamePhase::SelectingEncounter;

        let names: Vec<&str> = self.party.iter().map(|m| m.name.as_str()).collect();
        self.messages.push(GameMessage::success(format!(
            "A new run begins. {} set out.",
            names.join(", ")
        )));
        tracing::info!(seed = self.seed, "New run started");

        let prompt = self.offer_options();
        self.messages.push(prompt);
    }

    /// Pick one of the offered encounters
    ///
    /// Returns the confirmation message on success.
    pub fn try_choose_option(&mut self, index: usize) -> Result<String, CommandError> {
        if self.phase != GamePhase::SelectingEncounter {
            return Err(self.reject(CommandError::WrongPhase {
                expected: GamePhase::SelectingEncounter,
                actual: self.phase,
            }));
        }
        if index >= self.options.len() {
            return Err(self.reject(CommandError::OptionOutOfRange {
                index,
                available: self.options.len(),
            }));
        }

        let option = self.options.swap_remove(index);
        self.options.clear();

        let confirmation = format!("You chose: {}.", option.label);
        self.messages.push(GameMessage::info(confirmation.clone()));
        tracing::debug!(kind = %option.kind, level = self.level, "Encounter chosen");

        match option.kind {
            EncounterType::Normal => self.begin_combat(EnemyKind::Normal),
            EncounterType::Elite => self.begin_combat(EnemyKind::Elite),
            EncounterType::Event => {
                let outcome = resolve_event(&mut self.party, &mut self.relics, &mut self.rng);
                let severity = match outcome {
                    EventOutcome::Healed { .. } => Severity::Info,
                    EventOutcome::RelicFound(_) => Severity::Success,
                    EventOutcome::Ambushed { .. } => Severity::Warning,
                };
                self.messages
                    .push(GameMessage::new(outcome.describe(&self.party), severity));
                let prompt = self.offer_options();
                self.messages.push(prompt);
            }
            EncounterType::Shop => {
                self.messages.push(GameMessage::info(SHOP_MESSAGE));
                let prompt = self.offer_options();
                self.messages.push(prompt);
            }
        }

        Ok(confirmation)
    }

    /// Resolve one combat turn
    ///
    /// Locks the bar at `manual_position` when given, otherwise at a fresh
    /// random position.
    pub fn try_resolve_turn(
        &mut self,
        manual_position: Option<f64>,
    ) -> Result<TurnReport, CommandError> {
        if self.phase != GamePhase::Combat {
            return Err(self.reject(CommandError::WrongPhase {
                expected: GamePhase::Combat,
                actual: self.phase,
            }));
        }
        if self.action_bar.is_none() || !self.encounter.is_active() {
            return Err(self.reject(CommandError::NoActiveCombat));
        }

        let position = match manual_position {
            Some(position) => position,
            None => self.rng.gen(),
        };
        let turn = self.turn + 1;

        let (Some(bar), Encounter::Enemy { enemy, kind }) = (&self.action_bar, &mut self.encounter)
        else {
            return Err(CommandError::NoActiveCombat);
        };
        let kind = *kind;

        let resolution = resolve_turn(
            &mut self.party,
            enemy,
            bar,
            position,
            self.level,
            &self.relics,
            turn,
            &mut self.rng,
        );

        self.turn = turn;
        self.last_lock_position = Some(resolution.position);
        let mut entries = resolution.messages;

        match resolution.outcome {
            TurnOutcome::Victory => self.finish_victory(kind, &mut entries),
            TurnOutcome::PartyDefeated => {
                self.phase = GamePhase::GameOver;
                self.encounter = Encounter::None;
                self.action_bar = None;
                tracing::info!(level = self.level, turn, "Party defeated");
            }
            TurnOutcome::EnemyStands => {
                self.action_bar = Some(ActionBar::build(&self.party, &self.relics, &mut self.rng));
            }
        }

        let combat_complete = resolution.outcome != TurnOutcome::EnemyStands;
        self.last_turn_log = entries.iter().map(|m| m.text.clone()).collect();
        for message in entries {
            self.messages.push(message);
        }

        Ok(TurnReport {
            entries: self.last_turn_log.clone(),
            combat_complete,
        })
    }

    /// One-line summary of the run
    pub fn status(&self) -> String {
        let relics = if self.relics.is_empty() {
            "none".to_string()
        } else {
            self.relics
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let party = self
            .party
            .iter()
            .map(|m| format!("{} {}/{}", m.name, m.current_hp(), m.max_hp()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut status = format!(
            "Phase: {} | Level {} | Relics: {} | Party: {}",
            self.phase, self.level, relics, party
        );
        if let Some(enemy) = self.encounter.enemy() {
            status.push_str(&format!(
                " | Enemy: {} {}/{}",
                enemy.name,
                enemy.current_hp(),
                enemy.max_hp()
            ));
        }
        status
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn party(&self) -> &[PartyMember] {
        &self.party
    }

    pub fn relics(&self) -> &[Relic] {
        &self.relics
    }

    pub fn options(&self) -> &[EncounterOption] {
        &self.options
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn action_bar(&self) -> Option<&ActionBar> {
        self.action_bar.as_ref()
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    /// Combat turns taken in the current fight
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn last_turn_log(&self) -> &[String] {
        &self.last_turn_log
    }

    pub fn last_lock_position(&self) -> Option<f64> {
        self.last_lock_position
    }

    fn begin_combat(&mut self, kind: EnemyKind) {
        let enemy = Enemy::spawn(kind, self.level);
        self.messages.push(GameMessage::warning(format!(
            "A {} appears! ({} HP, {} attack)",
            enemy.name,
            enemy.max_hp(),
            enemy.base_attack
        )));
        tracing::info!(%kind, level = self.level, hp = enemy.max_hp(), "Combat started");

        self.encounter = Encounter::fight(kind, enemy);
        self.phase = GamePhase::Combat;
        self.turn = 0;
        self.last_turn_log.clear();
        self.last_lock_position = None;
        self.action_bar = Some(ActionBar::build(&self.party, &self.relics, &mut self.rng));
    }

    fn finish_victory(&mut self, kind: EnemyKind, entries: &mut Vec<GameMessage>) {
        let rewards = roll_victory_rewards(kind, &mut self.rng);
        self.level += rewards.level_gain;
        entries.push(GameMessage::success(format!(
            "Level up! The party is now level {}.",
            self.level
        )));

        if let Some(relic) = rewards.relic {
            self.relics.push(relic);
            entries.push(GameMessage::success(format!(
                "Found relic: {} - {}",
                relic.name(),
                relic.description()
            )));
        }
        tracing::info!(%kind, level = self.level, relic = ?rewards.relic, "Enemy defeated");

        self.phase = GamePhase::SelectingEncounter;
        self.encounter = Encounter::None;
        self.action_bar = None;
        let prompt = self.offer_options();
        entries.push(prompt);
    }

    /// Generate a new set of options and describe them
    fn offer_options(&mut self) -> GameMessage {
        self.options = generate_options(self.level, &mut self.rng);
        let listing = self
            .options
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}) {}", i, o.label))
            .collect::<Vec<_>>()
            .join("  ");
        GameMessage::info(format!("Choose your next encounter: {listing}"))
    }

    fn reject(&self, error: CommandError) -> CommandError {
        tracing::warn!(phase = %self.phase, %error, "Command rejected");
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MemberConfig;

    fn game_in_combat(seed: u64) -> Game {
        let mut game = Game::new(Some(seed));
        game.start_new_run();
        let normal = game
            .options()
            .iter()
            .position(|o| o.kind == EncounterType::Normal)
            .expect("options always include a Normal fight");
        game.try_choose_option(normal).expect("choosing an offered option succeeds");
        game
    }

    #[test]
    fn test_new_game_awaits_command() {
        let game = Game::new(Some(1));
        assert_eq!(game.phase(), GamePhase::AwaitingCommand);
        assert_eq!(game.level(), 1);
        assert_eq!(game.party().len(), 3);
        assert!(game.options().is_empty());
        assert!(game.messages().is_empty());
        assert_eq!(game.seed(), 1);
    }

    #[test]
    fn test_start_new_run_offers_options() {
        let mut game = Game::new(Some(2));
        game.start_new_run();
        assert_eq!(game.phase(), GamePhase::SelectingEncounter);
        assert_eq!(game.options().len(), 3);
        assert!(!game.messages().is_empty());
    }

    #[test]
    fn test_choose_rejected_outside_selection() {
        let mut game = Game::new(Some(3));
        let err = game.try_choose_option(0).unwrap_err();
        assert_eq!(
            err,
            CommandError::WrongPhase {
                expected: GamePhase::SelectingEncounter,
                actual: GamePhase::AwaitingCommand,
            }
        );
        assert!(game.messages().is_empty());
    }

    #[test]
    fn test_choose_out_of_range_changes_nothing() {
        let mut game = Game::new(Some(4));
        game.start_new_run();
        let options = game.options().to_vec();
        let log_len = game.messages().len();

        let err = game.try_choose_option(3).unwrap_err();
        assert_eq!(
            err,
            CommandError::OptionOutOfRange {
                index: 3,
                available: 3
            }
        );
        assert_eq!(game.options(), options.as_slice());
        assert_eq!(game.messages().len(), log_len);
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn test_normal_choice_enters_combat() {
        let game = game_in_combat(5);
        assert_eq!(game.phase(), GamePhase::Combat);
        assert!(game.options().is_empty());
        assert_eq!(game.encounter().enemy().map(|e| e.max_hp()), Some(20));
        assert_eq!(game.action_bar().map(|b| b.tracks().len()), Some(3));
    }

    #[test]
    fn test_turn_rejected_outside_combat() {
        let mut game = Game::new(Some(6));
        game.start_new_run();
        assert!(matches!(
            game.try_resolve_turn(Some(0.5)),
            Err(CommandError::WrongPhase { .. })
        ));
        assert!(game.last_turn_log().is_empty());
    }

    #[test]
    fn test_turn_records_lock_position() {
        let mut game = game_in_combat(7);
        let report = game.try_resolve_turn(Some(0.25)).unwrap();
        assert_eq!(game.last_lock_position(), Some(0.25));
        assert_eq!(report.entries[0], "Turn 1: lock position 25%");
        assert_eq!(game.last_turn_log(), report.entries.as_slice());
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn test_status_mentions_enemy_in_combat() {
        let game = game_in_combat(8);
        let status = game.status();
        assert!(status.starts_with("Phase: Combat | Level 1 | Relics: none | Party: Vera 32/32"));
        assert!(status.ends_with("Enemy: Ravager 20/20"));
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let mut game = game_in_combat(9);
        game.try_resolve_turn(None).unwrap();
        game.reset();

        assert_eq!(game.phase(), GamePhase::AwaitingCommand);
        assert_eq!(game.level(), 1);
        assert!(game.relics().is_empty());
        assert!(game.messages().is_empty());
        assert!(game.action_bar().is_none());
        assert!(!game.encounter().is_active());
        assert!(game
            .party()
            .iter()
            .all(|m| m.current_hp() == m.max_hp()));
    }

    #[test]
    fn test_with_config_rejects_empty_roster() {
        let config = GameConfig {
            roster: Vec::new(),
            ..GameConfig::default()
        };
        assert!(matches!(
            Game::with_config(config, Some(9)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_with_config_rejects_empty_message_log() {
        let config = GameConfig {
            message_log_capacity: 0,
            ..GameConfig::default()
        };
        assert!(Game::with_config(config, Some(9)).is_err());
    }

    #[test]
    fn test_with_config_uses_custom_roster() {
        let config = GameConfig {
            roster: vec![MemberConfig::new("Solo", 12)],
            ..GameConfig::default()
        };
        let game = Game::with_config(config, Some(9)).expect("single-member roster is valid");
        assert_eq!(game.party().len(), 1);
        assert_eq!(game.party()[0].max_hp(), 12);
    }
}

//! Game module - the state the protocol decoders populate
//!
//! One `GameState` owns everything a strategy may consult: the static
//! settings, the current round header, and the per-player states. Players
//! are addressed by index into the roster, which is built exactly once
//! from the declared player names.

use std::collections::HashMap;

use crate::core::field::Field;
use crate::core::shape::Piece;

/// Static game configuration, filled by the settings decoder.
///
/// Effectively append-only: the server sends each setting once before the
/// first round, and nothing here is reset between rounds.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub time_bank: i32,
    pub time_per_move: i32,
    pub field_height: i32,
    pub field_width: i32,
    pub player_names: Vec<String>,
    pub my_name: String,
    pub pieces: HashMap<char, Piece>,
}

/// Header of the most recent round. Mutated in place on every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Round {
    pub id: i32,
    /// Spawn column of the current piece.
    pub piece_x: i32,
    /// Spawn row of the current piece.
    pub piece_y: i32,
    pub this_piece: Option<char>,
    pub next_piece: Option<char>,
}

/// Live state of one player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    name: String,
    pub row_points: i32,
    pub combo: i32,
    pub field: Field,
}

impl PlayerState {
    pub fn new(name: String) -> Self {
        Self {
            name,
            row_points: 0,
            combo: 0,
            field: Field::new(),
        }
    }

    /// Player name as declared in `player_names`
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Roster lifecycle. Players are created once and never again, even when
/// the name list was still empty at the time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterPhase {
    Pending,
    Built,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub round: Round,
    players: Vec<PlayerState>,
    my_player: Option<usize>,
    roster: RosterPhase,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            round: Round::default(),
            players: Vec::new(),
            my_player: None,
            roster: RosterPhase::Pending,
        }
    }

    /// Build the roster from the declared player names.
    ///
    /// Fires at most once per game; returns whether this call performed
    /// the transition. The local player index resolves against `your_bot`
    /// here, with the last matching name winning.
    pub fn init_roster(&mut self) -> bool {
        if self.roster == RosterPhase::Built {
            return false;
        }
        self.roster = RosterPhase::Built;

        for name in &self.settings.player_names {
            self.players.push(PlayerState::new(name.clone()));
            if *name == self.settings.my_name {
                self.my_player = Some(self.players.len() - 1);
            }
        }
        true
    }

    /// Whether the roster transition has happened
    pub fn roster_built(&self) -> bool {
        self.roster == RosterPhase::Built
    }

    /// All players in declaration order
    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player_mut(&mut self, index: usize) -> Option<&mut PlayerState> {
        self.players.get_mut(index)
    }

    /// Roster index of the local player, when `your_bot` matched a name
    pub fn my_index(&self) -> Option<usize> {
        self.my_player
    }

    /// The local player's state
    pub fn me(&self) -> Option<&PlayerState> {
        self.my_player.and_then(|index| self.players.get(index))
    }

    /// First player that is not the local player
    pub fn opponent(&self) -> Option<&PlayerState> {
        self.players
            .iter()
            .enumerate()
            .find(|(index, _)| Some(*index) != self.my_player)
            .map(|(_, player)| player)
    }

    /// Piece declared for the current round
    pub fn current_piece(&self) -> Option<&Piece> {
        self.round
            .this_piece
            .and_then(|id| self.settings.pieces.get(&id))
    }

    /// Piece announced for the next round
    pub fn next_piece(&self) -> Option<&Piece> {
        self.round
            .next_piece
            .and_then(|id| self.settings.pieces.get(&id))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::field::Field;
use crate::core::game::GameState;
use crate::core::shape::Shape;

#[derive(Debug, Clone, Serialize)]
pub struct PieceSnapshot {
    pub size: i32,
    /// Rotations as rendered cell rows, `#` occupied and `.` empty.
    pub rotations: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsSnapshot {
    pub time_bank: i32,
    pub time_per_move: i32,
    pub field_width: i32,
    pub field_height: i32,
    pub player_names: Vec<String>,
    pub my_name: String,
    pub pieces: BTreeMap<String, PieceSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub id: i32,
    pub piece_x: i32,
    pub piece_y: i32,
    pub this_piece: Option<char>,
    pub next_piece: Option<char>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub row_points: i32,
    pub combo: i32,
    pub field: Vec<String>,
}

/// Serializable view of the whole game state, for debug dumps.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub settings: SettingsSnapshot,
    pub round: RoundSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub my_player: Option<String>,
}

impl GameSnapshot {
    pub fn capture(game: &GameState) -> Self {
        let settings = &game.settings;
        let pieces: BTreeMap<String, PieceSnapshot> = settings
            .pieces
            .iter()
            .map(|(id, piece)| {
                (
                    id.to_string(),
                    PieceSnapshot {
                        size: piece.size,
                        rotations: piece.shapes.iter().map(render_shape).collect(),
                    },
                )
            })
            .collect();

        Self {
            settings: SettingsSnapshot {
                time_bank: settings.time_bank,
                time_per_move: settings.time_per_move,
                field_width: settings.field_width,
                field_height: settings.field_height,
                player_names: settings.player_names.clone(),
                my_name: settings.my_name.clone(),
                pieces,
            },
            round: RoundSnapshot {
                id: game.round.id,
                piece_x: game.round.piece_x,
                piece_y: game.round.piece_y,
                this_piece: game.round.this_piece,
                next_piece: game.round.next_piece,
            },
            players: game
                .players()
                .iter()
                .map(|player| PlayerSnapshot {
                    name: player.name().to_string(),
                    row_points: player.row_points,
                    combo: player.combo,
                    field: render_field(&player.field),
                })
                .collect(),
            my_player: game.me().map(|player| player.name().to_string()),
        }
    }
}

fn render_shape(shape: &Shape) -> Vec<String> {
    shape
        .rows()
        .iter()
        .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
        .collect()
}

fn render_field(field: &Field) -> Vec<String> {
    field
        .rows()
        .iter()
        .map(|row| row.iter().map(|&c| if c != 0 { '#' } else { '.' }).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Piece;

    #[test]
    fn test_capture_renders_pieces_and_fields() {
        let mut game = GameState::new();
        game.settings.my_name = "me".to_string();
        game.settings.player_names = vec!["me".to_string()];

        let mut piece = Piece::new('O', 2);
        piece
            .shapes
            .push(Shape::new(vec![vec![true, true], vec![true, true]]));
        game.settings.pieces.insert('O', piece);

        game.init_roster();
        game.player_mut(0)
            .unwrap()
            .field
            .replace_rows(vec![vec![1, 0], vec![0, 1]]);

        let snapshot = GameSnapshot::capture(&game);
        assert_eq!(snapshot.my_player.as_deref(), Some("me"));
        assert_eq!(snapshot.settings.pieces["O"].rotations[0], vec!["##", "##"]);
        assert_eq!(snapshot.players[0].field, vec!["#.", ".#"]);
    }

    #[test]
    fn test_capture_serializes() {
        let game = GameState::new();
        let snapshot = GameSnapshot::capture(&game);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"my_player\":null"));
    }
}

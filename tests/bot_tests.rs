//! Integration tests for the bot run loop, bootstrap, and snapshots

use blockbattle_bot::bot::Bot;
use blockbattle_bot::core::GameSnapshot;
use blockbattle_bot::strategy::RandomStrategy;

#[test]
fn test_standard_pieces_are_tetrominoes() {
    let mut bot = Bot::new(Vec::new());
    bot.load_standard_pieces().unwrap();

    let pieces = &bot.game().settings.pieces;
    assert_eq!(pieces.len(), 7);
    for piece in pieces.values() {
        assert!(!piece.shapes.is_empty(), "piece {} has no rotations", piece.id);
        for shape in &piece.shapes {
            // Every rotation of a standard piece occupies four cells.
            assert_eq!(shape.coords().len(), 4, "piece {}", piece.id);
            assert_eq!(shape.size(), piece.size);
        }
    }
}

#[test]
fn test_bootstrap_then_live_stream() {
    let mut bot = Bot::new(Vec::new());
    bot.load_standard_pieces().unwrap();
    bot.run(
        "update game round 2\n\
         update game this_piece_type I\n"
            .as_bytes(),
    )
    .unwrap();

    assert_eq!(bot.game().round.id, 2);
    let piece = bot.game().current_piece().unwrap();
    assert_eq!(piece.id, 'I');
    assert_eq!(piece.shapes.len(), 2);
}

#[test]
fn test_random_strategy_answers_action_requests() {
    let mut bot = Bot::new(Vec::new());
    bot.set_strategy(Box::new(RandomStrategy::new(20260824)));
    bot.load_standard_pieces().unwrap();
    bot.run(
        "settings field_width 10\n\
         settings field_height 20\n\
         update game this_piece_type T\n\
         update game this_piece_position 4,-1\n\
         action moves 10000\n"
            .as_bytes(),
    )
    .unwrap();

    let out = String::from_utf8(bot.into_output()).unwrap();
    assert!(out.ends_with("drop\n"), "got {out:?}");
    assert_eq!(out.lines().count(), 1);
    for token in out.trim_end().split(',') {
        assert!(
            matches!(
                token,
                "turnleft" | "turnright" | "left" | "right" | "down" | "drop"
            ),
            "unexpected token {token:?}"
        );
    }
}

#[test]
fn test_snapshot_serializes_game_state() {
    let mut bot = Bot::new(Vec::new());
    bot.run(
        "settings field_width 3\n\
         settings piece O 2 1,1,1,1\n\
         settings player_names player1,player2\n\
         settings your_bot player1\n\
         update game round 5\n\
         update player1 field 1,0,0;0,1,0\n"
            .as_bytes(),
    )
    .unwrap();

    let snapshot = GameSnapshot::capture(bot.game());
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["my_player"], "player1");
    assert_eq!(value["settings"]["field_width"], 3);
    assert_eq!(value["settings"]["pieces"]["O"]["rotations"][0][0], "##");
    assert_eq!(value["round"]["id"], 5);
    assert_eq!(value["players"][0]["field"][0], "#..");
    assert_eq!(value["players"][0]["field"][1], ".#.");
}

#[test]
fn test_quit_needs_the_debug_command_set() {
    let mut bot = Bot::new(Vec::new());
    bot.run("quit\nsettings field_width 8\n".as_bytes()).unwrap();
    assert_eq!(bot.game().settings.field_width, 8);

    let mut bot = Bot::new(Vec::new());
    bot.register_debug_commands();
    bot.run("quit\nsettings field_width 8\n".as_bytes()).unwrap();
    assert_eq!(bot.game().settings.field_width, 0);
}

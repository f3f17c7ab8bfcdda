//! Full game-flow tests against the public engine API.
//!
//! These drive the engine the way a frontend does: selection screen,
//! start, clicks, rematch, exit.

use emoji_ttt::{
    Action, CategoryId, CategoryRegistry, EngineError, Game, Phase, PlayerSlot,
};

fn small_registry() -> (CategoryRegistry, CategoryId, CategoryId) {
    let mut registry = CategoryRegistry::new();
    let animals = registry.register_auto("animals", ["dog", "cat", "mouse"]);
    let food = registry.register_auto("food", ["pizza", "burger"]);
    (registry, animals, food)
}

fn started_small_game() -> Game {
    let (registry, animals, food) = small_registry();
    let mut game = Game::new(registry, 42);
    game.select_category(PlayerSlot::One, animals).unwrap();
    game.select_category(PlayerSlot::Two, food).unwrap();
    game.start_game().unwrap();
    game
}

#[test]
fn test_selection_screen_flow() {
    let (registry, animals, food) = small_registry();
    let mut game = Game::new(registry, 1);

    assert_eq!(game.state().phase(), Phase::Selection);
    assert_eq!(game.start_game(), Err(EngineError::CategoriesNotSelected));

    game.select_category(PlayerSlot::One, animals).unwrap();

    // Second player taking the same category is rejected with no change.
    assert_eq!(
        game.select_category(PlayerSlot::Two, animals),
        Err(EngineError::CategoryTaken { category: animals })
    );
    assert!(game.state().categories[PlayerSlot::Two].is_none());
    assert_eq!(game.start_game(), Err(EngineError::CategoriesNotSelected));

    game.select_category(PlayerSlot::Two, food).unwrap();
    game.start_game().unwrap();

    assert_eq!(game.state().phase(), Phase::InProgress);
    assert_eq!(game.state().turn, PlayerSlot::One);
}

#[test]
fn test_player_one_wins_top_row() {
    let mut game = started_small_game();

    // One: 0, 1, 2 / Two: 3, 4 in between
    for click in [0, 3, 1, 4, 2] {
        game.select_cell(click).unwrap();
    }

    let state = game.state();
    assert_eq!(state.winner, Some(PlayerSlot::One));
    assert_eq!(state.winning_line, Some([0, 1, 2]));
    assert_eq!(state.phase(), Phase::Finished);

    // Every mark on the winning line came from the winner's category.
    let animals = game.registry().by_name("animals").unwrap();
    for index in [0, 1, 2] {
        assert!(animals.contains(state.board.cell(index).unwrap()));
    }
}

#[test]
fn test_opponent_cells_never_win_for_mover() {
    let mut game = started_small_game();

    // Two fills 3 and 5; One then fills 4. The middle row is full but
    // mixed, so nobody wins on it.
    for click in [0, 3, 1, 5, 4] {
        game.select_cell(click).unwrap();
    }

    assert!(game.state().winner.is_none());
    assert_eq!(game.state().phase(), Phase::InProgress);
}

#[test]
fn test_decided_game_freezes() {
    let mut game = started_small_game();
    for click in [0, 3, 1, 4, 2] {
        game.select_cell(click).unwrap();
    }
    let decided = game.state().clone();

    // Clicks change nothing once the game is decided.
    for click in 0..9 {
        game.select_cell(click).unwrap();
    }

    assert_eq!(game.state(), &decided);
}

#[test]
fn test_rematch_preserves_setup() {
    let mut game = started_small_game();
    for click in [0, 3, 1, 4, 2] {
        game.select_cell(click).unwrap();
    }

    game.reset_game();

    let state = game.state();
    assert_eq!(state.board.occupied(), 0);
    assert_eq!(state.turn, PlayerSlot::One);
    assert!(state.winner.is_none());
    assert!(state.winning_line.is_none());
    assert!(state.last_evicted.is_none());
    assert!(state.live_marks(PlayerSlot::One).is_empty());
    assert!(state.live_marks(PlayerSlot::Two).is_empty());
    assert_eq!(state.phase(), Phase::InProgress);
    assert!(state.categories[PlayerSlot::One].is_some());
    assert!(state.categories[PlayerSlot::Two].is_some());

    // The board is immediately playable again.
    game.select_cell(8).unwrap();
    assert_eq!(game.state().board.occupied(), 1);
}

#[test]
fn test_exit_to_start_discards_everything() {
    let mut game = started_small_game();
    game.select_cell(0).unwrap();

    game.exit_to_start();

    let state = game.state();
    assert_eq!(state.phase(), Phase::Selection);
    assert!(state.categories[PlayerSlot::One].is_none());
    assert!(state.categories[PlayerSlot::Two].is_none());
    assert_eq!(state.board.occupied(), 0);

    // Board clicks are dead until a new selection completes.
    game.select_cell(4).unwrap();
    assert_eq!(game.state().board.occupied(), 0);
}

#[test]
fn test_win_event_fires_once() {
    let mut game = started_small_game();
    assert!(game.take_win_event().is_none());

    for click in [0, 3, 1, 4, 2] {
        game.select_cell(click).unwrap();
    }

    let event = game.take_win_event().expect("win should raise the event");
    assert_eq!(event.player, PlayerSlot::One);
    assert_eq!(event.line, [0, 1, 2]);
    assert!(game.take_win_event().is_none(), "event is one-shot");
}

#[test]
fn test_intent_dispatch_matches_direct_calls() {
    let (registry, animals, food) = small_registry();
    let mut via_intents = Game::new(registry, 9);

    let intents = [
        Action::SelectCategory {
            player: PlayerSlot::One,
            category: animals,
        },
        Action::SelectCategory {
            player: PlayerSlot::Two,
            category: food,
        },
        Action::StartGame,
        Action::SelectCell { index: 0 },
        Action::SelectCell { index: 3 },
        Action::ResetGame,
    ];
    for intent in intents {
        via_intents.apply(intent).unwrap();
    }

    let (registry, animals, food) = small_registry();
    let mut direct = Game::new(registry, 9);
    direct.select_category(PlayerSlot::One, animals).unwrap();
    direct.select_category(PlayerSlot::Two, food).unwrap();
    direct.start_game().unwrap();
    direct.select_cell(0).unwrap();
    direct.select_cell(3).unwrap();
    direct.reset_game();

    assert_eq!(via_intents.state(), direct.state());
}

#[test]
fn test_state_snapshot_round_trip() {
    let mut game = started_small_game();
    for click in [0, 3, 1] {
        game.select_cell(click).unwrap();
    }

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: emoji_ttt::GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.state());
}

#[test]
fn test_same_seed_same_game() {
    let play = || {
        let (registry, animals, food) = small_registry();
        let mut game = Game::new(registry, 1234);
        game.select_category(PlayerSlot::One, animals).unwrap();
        game.select_category(PlayerSlot::Two, food).unwrap();
        game.start_game().unwrap();
        for click in [8, 3, 0, 5, 4] {
            game.select_cell(click).unwrap();
        }
        game.state().clone()
    };

    assert_eq!(play(), play());
}

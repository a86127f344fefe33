use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::GameConfig,
    error::{GameError, Result},
    game::{
        bag::{LetterBag, Rack},
        validator::MoveValidator,
    },
    models::{Coordinate, Game, Move, Orientation, Player, PlayerId},
};

/// A play as submitted by a client, before it is stamped and stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub player_id: PlayerId,
    pub start: Coordinate,
    pub orientation: Orientation,
    pub word: String,
}

impl MoveRequest {
    pub fn pass(player_id: PlayerId) -> Self {
        Self {
            player_id,
            start: Coordinate::new(0, 0),
            orientation: Orientation::Horizontal,
            word: String::new(),
        }
    }
}

/// What a submitted move changed for its player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player_letters: Vec<char>,
    pub is_finished: bool,
}

/// Start a game: a full bag, with the creator seated first holding a fresh rack
pub fn create_game(
    user_id: Uuid,
    config: &GameConfig,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Game {
    let game_id = Uuid::new_v4();
    let mut bag = LetterBag::full();
    let letters = bag.draw_up_to(config.rack_size, rng);

    tracing::info!("Created game {} for user {}", game_id, user_id);

    Game {
        id: game_id,
        free_letters: bag.into_letters(),
        current_player_index: 0,
        is_finished: false,
        players: vec![Player {
            id: Uuid::new_v4(),
            game_id,
            user_id,
            order_index: 0,
            letters,
        }],
        moves: Vec::new(),
        created_at: now,
    }
}

/// Seat a user at the next free index. Joining twice returns the existing seat.
pub fn join_game(
    game: &mut Game,
    user_id: Uuid,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Result<PlayerId> {
    if let Some(existing) = game.player_for_user(user_id) {
        tracing::debug!("User {} already plays in game {}", user_id, game.id);
        return Ok(existing.id);
    }
    if game.is_finished {
        return Err(GameError::GameFinished);
    }

    let mut bag = LetterBag(std::mem::take(&mut game.free_letters));
    let letters = bag.draw_up_to(config.rack_size, rng);
    game.free_letters = bag.into_letters();

    let player = Player {
        id: Uuid::new_v4(),
        game_id: game.id,
        user_id,
        order_index: game.players.len(),
        letters,
    };
    let player_id = player.id;

    tracing::info!(
        "User {} joined game {} at seat {}",
        user_id,
        game.id,
        player.order_index
    );
    game.players.push(player);

    Ok(player_id)
}

/// Record a move for the player whose turn it is, refill their rack, and
/// either finish the game or pass the turn on.
///
/// The game finishes when the mover empties their rack with the bag empty, or
/// when every player has passed for `pass_rounds_to_finish` full rounds.
pub fn submit_move(
    game: &mut Game,
    request: &MoveRequest,
    config: &GameConfig,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Result<MoveOutcome> {
    if game.is_finished {
        return Err(GameError::GameFinished);
    }

    let player_id = request.player_id;
    let seat = game
        .players
        .iter()
        .position(|p| p.id == player_id)
        .ok_or(GameError::PlayerNotFound(player_id))?;

    let order_index = game.players[seat].order_index;
    if order_index != game.current_player_index {
        return Err(GameError::NotYourTurn {
            expected: game.current_player_index,
            actual: order_index,
        });
    }

    let mv = Move {
        player_id,
        game_id: game.id,
        start: request.start,
        orientation: request.orientation,
        word: request.word.clone(),
        created_at: now,
    };
    MoveValidator::check_bounds(&mv)?;
    MoveValidator::check_letters(&mv)?;

    let mut bag = LetterBag(std::mem::take(&mut game.free_letters));
    let mut rack = Rack(std::mem::take(&mut game.players[seat].letters));
    rack.remove_played(&mv.word);
    rack.refill(&mut bag, config.rack_size, rng);

    let went_out = rack.is_empty() && bag.is_empty();
    let is_pass = mv.is_pass();
    game.moves.push(mv);

    let all_passed = is_pass && everyone_passed(game, config.pass_rounds_to_finish);

    game.free_letters = bag.into_letters();
    game.players[seat].letters = rack.into_letters();

    if went_out || all_passed {
        game.is_finished = true;
        tracing::info!(
            "Game {} finished ({})",
            game.id,
            if went_out { "rack emptied" } else { "all players passed" }
        );
    } else {
        game.current_player_index = next_player_index(order_index, game.players.len());
    }

    Ok(MoveOutcome {
        player_letters: game.players[seat].letters.clone(),
        is_finished: game.is_finished,
    })
}

/// True when the most recent `players * rounds` moves are all passes
fn everyone_passed(game: &Game, rounds: usize) -> bool {
    let window = game.players.len() * rounds;
    let moves = game.ordered_moves();
    if window == 0 || moves.len() < window {
        return false;
    }
    moves[moves.len() - window..].iter().all(Move::is_pass)
}

fn next_player_index(order_index: usize, players: usize) -> usize {
    let next = order_index + 1;
    if next >= players {
        0
    } else {
        next
    }
}

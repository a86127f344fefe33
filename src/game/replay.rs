use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    game::{
        grid::GridGenerator,
        reconstructor::Reconstructor,
        scorer::Scorer,
        words::Word,
    },
    models::{Board, Move, Player, PlayerId},
};

/// One replayed move with what it formed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub words: Vec<Word>,
    pub score: i32,
}

/// Board and score state rebuilt from a game's move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Replay {
    pub board: Board,
    pub scores: HashMap<PlayerId, i32>,
    pub moves: Vec<ScoredMove>,
}

/// A fresh board: bonuses assigned, no letters placed
pub fn empty_board() -> Board {
    GridGenerator::empty_board()
}

/// Rebuild the board and every player's score from a move history.
///
/// Moves are replayed in creation order; ties keep the order they were given in.
/// Every player starts on 0. When the game is finished the end-game rack
/// settlement is applied once, after all moves.
pub fn reconstruct_and_score(moves: &[Move], players: &[Player], is_finished: bool) -> Replay {
    let mut ordered: Vec<&Move> = moves.iter().collect();
    ordered.sort_by_key(|m| m.created_at);

    let mut board = empty_board();
    let mut scores: HashMap<PlayerId, i32> = players.iter().map(|p| (p.id, 0)).collect();
    let mut scored_moves = Vec::with_capacity(ordered.len());

    for mv in ordered {
        let placed = Reconstructor::apply(&mut board, mv);
        let result = Scorer::score_placement(&board, mv, &placed);

        tracing::debug!(
            "Move by {} formed {:?} for {} points",
            mv.player_id,
            result.words.iter().map(Word::text).collect::<Vec<_>>(),
            result.score
        );

        *scores.entry(mv.player_id).or_insert(0) += result.score;
        scored_moves.push(ScoredMove {
            mv: mv.clone(),
            words: result.words,
            score: result.score,
        });
    }

    if is_finished {
        scores = Scorer::apply_end_game_adjustment(players, scores);
    }

    Replay {
        board,
        scores,
        moves: scored_moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, Orientation};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::seconds(seconds)
    }

    fn player(letters: &[char], order_index: usize) -> Player {
        Player {
            id: Uuid::new_v4(),
            game_id: Uuid::nil(),
            user_id: Uuid::new_v4(),
            order_index,
            letters: letters.to_vec(),
        }
    }

    fn make_move(
        player: &Player,
        x: usize,
        y: usize,
        orientation: Orientation,
        word: &str,
        created_at: DateTime<Utc>,
    ) -> Move {
        Move {
            player_id: player.id,
            game_id: Uuid::nil(),
            start: Coordinate::new(x, y),
            orientation,
            word: word.to_string(),
            created_at,
        }
    }

    #[test]
    fn test_zero_moves_gives_empty_board() {
        let players = vec![player(&['A'], 0), player(&['B'], 1)];
        let replay = reconstruct_and_score(&[], &players, false);

        assert_eq!(replay.board, empty_board());
        assert!(replay.moves.is_empty());
        assert_eq!(replay.scores.len(), 2);
        assert!(replay.scores.values().all(|&s| s == 0));
    }

    #[test]
    fn test_scores_accumulate_per_player() {
        let p1 = player(&['E'], 0);
        let p2 = player(&['E'], 1);
        let moves = vec![
            make_move(&p1, 7, 7, Orientation::Horizontal, "CAT", at(0)),
            make_move(&p2, 9, 7, Orientation::Vertical, "_S", at(10)),
            make_move(&p1, 0, 0, Orientation::Horizontal, "", at(20)),
        ];

        let replay = reconstruct_and_score(&moves, &[p1.clone(), p2.clone()], false);
        assert_eq!(replay.scores[&p1.id], 10);
        assert_eq!(replay.scores[&p2.id], 2);
        assert_eq!(replay.moves.len(), 3);
        assert_eq!(replay.moves[2].score, 0);
        assert!(replay.moves[2].words.is_empty());
    }

    #[test]
    fn test_moves_replayed_in_creation_order() {
        let p1 = player(&[], 0);
        let p2 = player(&[], 1);
        let cat = make_move(&p1, 7, 7, Orientation::Horizontal, "CAT", at(0));
        let s = make_move(&p2, 9, 7, Orientation::Vertical, "_S", at(10));

        let given_out_of_order = reconstruct_and_score(&[s.clone(), cat.clone()], &[], false);
        let in_order = reconstruct_and_score(&[cat.clone(), s.clone()], &[], false);

        assert_eq!(given_out_of_order.moves[0].mv, cat);
        assert_eq!(given_out_of_order.scores, in_order.scores);
    }

    #[test]
    fn test_order_changes_results() {
        let p1 = player(&[], 0);
        let p2 = player(&[], 1);

        // CAT first: the S move only forms TS
        let cat_first = reconstruct_and_score(
            &[
                make_move(&p1, 7, 7, Orientation::Horizontal, "CAT", at(0)),
                make_move(&p2, 9, 7, Orientation::Vertical, "_S", at(10)),
            ],
            &[p1.clone(), p2.clone()],
            false,
        );
        // S first: it forms nothing, and CAT picks up TS as a cross word
        let s_first = reconstruct_and_score(
            &[
                make_move(&p2, 9, 7, Orientation::Vertical, "_S", at(0)),
                make_move(&p1, 7, 7, Orientation::Horizontal, "CAT", at(10)),
            ],
            &[p1.clone(), p2.clone()],
            false,
        );

        assert_eq!(cat_first.scores[&p1.id], 10);
        assert_eq!(cat_first.scores[&p2.id], 2);
        assert_eq!(s_first.scores[&p1.id], 12);
        assert_eq!(s_first.scores[&p2.id], 0);
        assert_ne!(cat_first.scores, s_first.scores);
    }

    #[test]
    fn test_end_game_applied_only_when_finished() {
        let p1 = player(&['X', 'A'], 0);
        let p2 = player(&[], 1);
        let moves = vec![make_move(&p2, 0, 0, Orientation::Horizontal, "CAT", at(0))];

        let running = reconstruct_and_score(&moves, &[p1.clone(), p2.clone()], false);
        assert_eq!(running.scores[&p1.id], 0);
        assert_eq!(running.scores[&p2.id], 15);

        let finished = reconstruct_and_score(&moves, &[p1.clone(), p2.clone()], true);
        assert_eq!(finished.scores[&p1.id], -9);
        assert_eq!(finished.scores[&p2.id], 24);
    }

    #[test]
    fn test_replay_is_repeatable() {
        let p1 = player(&['Q'], 0);
        let moves = vec![make_move(&p1, 3, 3, Orientation::Vertical, "ZOO", at(0))];

        let first = reconstruct_and_score(&moves, &[p1.clone()], true);
        let second = reconstruct_and_score(&moves, &[p1.clone()], true);
        assert_eq!(first.board, second.board);
        assert_eq!(first.scores, second.scores);
    }
}

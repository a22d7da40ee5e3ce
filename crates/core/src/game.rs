// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game rounds state machine.
use ahash::AHashSet;
use log::{debug, info};
use rand::Rng;
use std::fmt;

use lotto_cards::{Keg, KegsBag, Result};

use crate::{
    oracle::{Oracle, Presenter},
    player::{MoveOutcome, Player, PlayerId},
};

/// The game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// There are kegs to draw, players in the game and no winner yet.
    Running,
    /// The game has a winner, ran out of kegs or all players are out.
    Finished,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Running => write!(f, "Game in progress"),
            GameStatus::Finished => write!(f, "Game over"),
        }
    }
}

/// A lotto game.
///
/// Each round draws one keg from the bag and offers it to every player still in
/// the game in roster order. The first player to clear their card wins and ends
/// the round. Human players that make a wrong decision are eliminated, they stay
/// in the roster but don't play further rounds.
#[derive(Debug)]
pub struct Game {
    bag: KegsBag,
    players: Vec<Player>,
    losers: AHashSet<PlayerId>,
    winner: Option<usize>,
    round: usize,
}

impl Game {
    /// Creates a game with a freshly shuffled bag.
    pub fn new(players: Vec<Player>) -> Self {
        Self::with_rng(players, &mut rand::rng())
    }

    /// Creates a game with a bag shuffled by the given generator.
    pub fn with_rng<R: Rng>(players: Vec<Player>, rng: &mut R) -> Self {
        Self::with_bag(KegsBag::new_and_shuffled(rng), players)
    }

    /// Creates a game that draws from the given bag.
    pub fn with_bag(bag: KegsBag, players: Vec<Player>) -> Self {
        Self {
            bag,
            players,
            losers: AHashSet::default(),
            winner: None,
            round: 0,
        }
    }

    /// Sets players that are out of the game before it starts.
    pub fn with_losers(mut self, losers: impl IntoIterator<Item = PlayerId>) -> Self {
        self.losers.extend(losers);
        self
    }

    /// Checks if there is no winner, the bag is not empty, and at least one
    /// player is still in the game.
    pub fn is_running(&self) -> bool {
        self.winner.is_none() && !self.bag.is_empty() && self.active_players().next().is_some()
    }

    /// The game status.
    pub fn status(&self) -> GameStatus {
        if self.is_running() {
            GameStatus::Running
        } else {
            GameStatus::Finished
        }
    }

    /// The game winner if any.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|idx| self.players.get(idx))
    }

    /// Checks if a player has been eliminated.
    pub fn is_eliminated(&self, player_id: &PlayerId) -> bool {
        self.losers.contains(player_id)
    }

    /// Returns an iterator to all players in roster order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Returns an iterator to the players that have not been eliminated.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.players
            .iter()
            .filter(|p| !self.losers.contains(&p.id))
    }

    /// Returns an iterator to the eliminated players.
    pub fn losers(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| self.losers.contains(&p.id))
    }

    /// Number of kegs left in the bag.
    pub fn remaining(&self) -> usize {
        self.bag.len()
    }

    /// Number of rounds played.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Plays rounds until the game ends or `should_stop` returns true.
    ///
    /// `should_stop` is checked before each round.
    pub fn run<F>(
        &mut self,
        oracle: &mut dyn Oracle,
        presenter: &mut dyn Presenter,
        mut should_stop: F,
    ) -> Result<()>
    where
        F: FnMut() -> bool,
    {
        while self.is_running() && !should_stop() {
            self.play_round(oracle, presenter)?;
        }

        info!(
            "Stopped after {} rounds: {}, {} kegs left",
            self.round,
            self.status(),
            self.remaining()
        );

        Ok(())
    }

    /// Plays a round and returns the drawn keg.
    ///
    /// Returns `None` without drawing if the game is not running.
    pub fn play_round(
        &mut self,
        oracle: &mut dyn Oracle,
        presenter: &mut dyn Presenter,
    ) -> Result<Option<Keg>> {
        if !self.is_running() {
            return Ok(None);
        }

        let active = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| !self.losers.contains(&p.id))
            .map(|(idx, _)| idx)
            .collect::<Vec<_>>();

        let keg = self.bag.draw()?;
        self.round += 1;
        debug!(
            "Round {} drew keg {keg}, {} kegs left",
            self.round,
            self.bag.len()
        );

        for idx in active {
            let outcome = self.make_move(idx, keg, oracle, presenter)?;

            let player = &self.players[idx];
            if outcome.eliminated {
                self.losers.insert(player.id);
                info!("Player {player} eliminated on keg {keg}");
            }

            presenter.move_resolved(player, outcome);

            // The first player to clear the card wins, the others don't move.
            if player.card().is_empty() {
                info!("Player {player} wins in round {}", self.round);
                self.winner = Some(idx);
                break;
            }
        }

        Ok(Some(keg))
    }

    fn make_move(
        &mut self,
        idx: usize,
        keg: Keg,
        oracle: &mut dyn Oracle,
        presenter: &mut dyn Presenter,
    ) -> Result<MoveOutcome> {
        let remaining = self.bag.len();

        let (head, tail) = self.players.split_at_mut(idx);
        let Some((player, tail)) = tail.split_first_mut() else {
            return Ok(MoveOutcome::default());
        };

        let others = head
            .iter()
            .chain(tail.iter())
            .filter(|p| !self.losers.contains(&p.id))
            .collect::<Vec<_>>();

        presenter.keg_drawn(keg, remaining, player);
        player.resolve_move(keg, remaining, &others, oracle)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{Decision, DecisionRequest};
    use lotto_cards::Card;
    use rand::{SeedableRng, rngs::StdRng};

    fn kegs(values: &[u8]) -> Vec<Keg> {
        values.iter().copied().map(Keg::new).collect()
    }

    fn new_card(numbers: &[u8]) -> Card {
        Card::from_numbers(&kegs(numbers), &mut StdRng::seed_from_u64(13)).unwrap()
    }

    fn new_bag(values: &[u8]) -> KegsBag {
        KegsBag::from_kegs(&kegs(values)).unwrap()
    }

    fn oracle<F>(f: F) -> F
    where
        F: FnMut(&DecisionRequest<'_>) -> Decision,
    {
        f
    }

    fn no_oracle() -> impl Oracle {
        oracle(|_| panic!("Unexpected decision request"))
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Presenter for Recorder {
        fn keg_drawn(&mut self, keg: Keg, remaining: usize, player: &Player) {
            self.events.push(format!("{player} {keg} {remaining}"));
        }

        fn move_resolved(&mut self, player: &Player, outcome: MoveOutcome) {
            self.events.push(format!(
                "{player} struck={} eliminated={}",
                outcome.struck, outcome.eliminated
            ));
        }
    }

    #[test]
    fn computer_wins() {
        let player = Player::computer("Alice", new_card(&[2, 9]));
        let mut game = Game::with_bag(new_bag(&[7, 2, 9]), vec![player]);
        let mut oracle = no_oracle();
        assert!(game.is_running());
        assert_eq!(game.status(), GameStatus::Running);

        let sizes = |game: &Game| game.players().next().unwrap().card().len();

        let keg = game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(keg, Some(Keg::new(7)));
        assert_eq!(sizes(&game), 2);
        assert!(game.is_running());

        let keg = game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(keg, Some(Keg::new(2)));
        assert_eq!(sizes(&game), 1);
        assert!(game.is_running());

        let keg = game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(keg, Some(Keg::new(9)));
        assert_eq!(sizes(&game), 0);

        assert!(!game.is_running());
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner().unwrap().nickname, "Alice");
        assert_eq!(game.remaining(), 0);
        assert_eq!(game.round(), 3);

        // A finished game doesn't draw.
        assert_eq!(game.play_round(&mut oracle, &mut ()).unwrap(), None);
        assert_eq!(game.round(), 3);
    }

    #[test]
    fn human_skips_own_number() {
        let player = Player::human("Bob", new_card(&[5]));
        let bob = player.id;
        let mut game = Game::with_bag(new_bag(&[5, 6, 7]), vec![player]);

        let mut oracle = oracle(|_| Decision::Skip);
        game.play_round(&mut oracle, &mut ()).unwrap();

        assert!(game.is_eliminated(&bob));
        assert!(game.winner().is_none());
        assert_eq!(game.remaining(), 2);
        assert!(!game.is_running());
        assert_eq!(game.active_players().count(), 0);
        assert_eq!(game.losers().count(), 1);
    }

    #[test]
    fn same_card_different_players() {
        let card = new_card(&[5, 6]);
        let alice = Player::human("Alice", card.clone());
        let bob = Player::human("Bob", card);
        let (alice_id, bob_id) = (alice.id, bob.id);
        assert_ne!(alice_id, bob_id);

        let mut game = Game::with_bag(new_bag(&[5, 6, 7]), vec![alice, bob]);
        let mut oracle = oracle(|req| {
            if req.player.nickname == "Bob" {
                Decision::Strike
            } else {
                Decision::Skip
            }
        });

        game.play_round(&mut oracle, &mut ()).unwrap();
        assert!(game.is_eliminated(&alice_id));
        assert!(!game.is_eliminated(&bob_id));
        assert_eq!(game.active_players().count(), 1);

        game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(game.winner().unwrap().id, bob_id);
    }

    #[test]
    fn human_strikes_missing_number() {
        let alice = Player::human("Alice", new_card(&[1, 2]));
        let bob = Player::human("Bob", new_card(&[3, 4]));
        let (alice_id, bob_id) = (alice.id, bob.id);
        let mut game = Game::with_bag(new_bag(&[10, 3, 4]), vec![alice, bob]);

        let mut asked = Vec::new();
        let mut oracle = oracle(|req| {
            asked.push(req.player.nickname.clone());
            if req.player.nickname == "Alice" || req.player.card().contains(req.keg) {
                Decision::Strike
            } else {
                Decision::Skip
            }
        });

        game.play_round(&mut oracle, &mut ()).unwrap();
        assert!(game.is_eliminated(&alice_id));
        assert!(!game.is_eliminated(&bob_id));
        assert!(game.is_running());

        // Eliminated players don't play further rounds.
        game.play_round(&mut oracle, &mut ()).unwrap();
        game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(asked, vec!["Alice", "Bob", "Bob", "Bob"]);

        assert_eq!(game.winner().map(|p| p.id), Some(bob_id));
        assert!(!game.is_running());
    }

    #[test]
    fn first_winner_ends_round() {
        let p1 = Player::computer("Alice", new_card(&[4]));
        let p2 = Player::computer("Bob", new_card(&[4]));
        let mut game = Game::with_bag(new_bag(&[4, 5]), vec![p1, p2]);

        let mut recorder = Recorder::default();
        game.play_round(&mut no_oracle(), &mut recorder).unwrap();

        assert_eq!(
            recorder.events,
            vec!["Alice 4 1", "Alice struck=true eliminated=false"]
        );

        let players = game.players().collect::<Vec<_>>();
        assert_eq!(game.winner().map(|p| p.id), Some(players[0].id));
        assert_eq!(players[1].card().len(), 1);

        // Still kegs in the bag, but the game has a winner.
        assert_eq!(game.remaining(), 1);
        assert!(!game.is_running());
        assert_eq!(game.to_string(), "Game over");
    }

    #[test]
    fn exhausted_bag_without_winner() {
        let player = Player::computer("Alice", new_card(&[1, 2]));
        let mut game = Game::with_bag(new_bag(&[3]), vec![player]);

        game.run(&mut no_oracle(), &mut (), || false).unwrap();

        assert_eq!(game.round(), 1);
        assert!(game.winner().is_none());
        assert!(!game.is_running());
        assert_eq!(game.play_round(&mut no_oracle(), &mut ()).unwrap(), None);
    }

    #[test]
    fn initial_losers_are_skipped() {
        let p1 = Player::computer("Alice", new_card(&[1]));
        let p2 = Player::computer("Bob", new_card(&[1]));
        let (alice, bob) = (p1.id, p2.id);
        let mut game = Game::with_bag(new_bag(&[1]), vec![p1, p2]).with_losers([alice]);

        let mut recorder = Recorder::default();
        game.play_round(&mut no_oracle(), &mut recorder).unwrap();

        assert_eq!(game.winner().map(|p| p.id), Some(bob));
        assert!(recorder.events.iter().all(|e| e.starts_with("Bob")));
    }

    #[test]
    fn empty_roster_is_not_running() {
        let game = Game::with_bag(KegsBag::default(), Vec::new());
        assert!(!game.is_running());
    }

    #[test]
    fn others_are_active_players() {
        let alice = Player::human("Alice", new_card(&[1]));
        let bob = Player::computer("Bob", new_card(&[2, 3]));
        let carol = Player::computer("Carol", new_card(&[4, 5]));
        let carol_id = carol.id;
        let mut game =
            Game::with_bag(new_bag(&[9]), vec![alice, bob, carol]).with_losers([carol_id]);

        let mut others = Vec::new();
        let mut oracle = oracle(|req| {
            others = req.others.iter().map(|p| p.nickname.clone()).collect();
            Decision::Skip
        });

        game.play_round(&mut oracle, &mut ()).unwrap();
        assert_eq!(others, vec!["Bob"]);
    }

    #[test]
    fn computers_game() {
        let mut rng = StdRng::seed_from_u64(13);
        let players = (1..=4)
            .map(|n| Player::computer(format!("Computer {n}"), Card::new(&mut rng)))
            .collect();
        let mut game = Game::with_rng(players, &mut rng);

        game.run(&mut no_oracle(), &mut (), || false).unwrap();

        // Computers never make mistakes and all numbers are in the bag.
        let winner = game.winner().unwrap();
        assert!(winner.card().is_empty());
        assert_eq!(game.losers().count(), 0);
        assert_eq!(game.round(), KegsBag::SIZE - game.remaining());
        assert!(game.round() >= Card::SIZE);
    }

    #[test]
    fn stop_early() {
        let mut rng = StdRng::seed_from_u64(13);
        let players = vec![Player::computer("Alice", Card::new(&mut rng))];
        let mut game = Game::with_rng(players, &mut rng);

        let mut rounds = 0;
        game.run(&mut no_oracle(), &mut (), || {
            rounds += 1;
            rounds > 5
        })
        .unwrap();

        assert_eq!(game.round(), 5);
        assert!(game.is_running());
        assert_eq!(game.remaining(), KegsBag::SIZE - 5);
    }
}

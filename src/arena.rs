//! Agent-vs-agent matches

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    Result,
    agent::Agent,
    tictactoe::{Game, GameOutcome, Player},
};

/// Win/draw tally of a series of games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl MatchSummary {
    pub fn record(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.games > 0 {
            count as f64 / self.games as f64
        } else {
            0.0
        }
    }
}

/// Plays complete games between two agents
#[derive(Debug, Clone)]
pub struct Arena {
    size: usize,
    first_player: Player,
    alternate_first: bool,
}

impl Arena {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            first_player: Player::X,
            alternate_first: false,
        }
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Swap the opening player after every game
    pub fn with_alternating_first(mut self, alternate: bool) -> Self {
        self.alternate_first = alternate;
        self
    }

    /// Play one game from the empty board; `x` plays X and `o` plays O
    pub fn play_game(&self, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
        self.play_from(self.first_player, x, o)
    }

    fn play_from(&self, first: Player, x: &mut dyn Agent, o: &mut dyn Agent) -> Result<Game> {
        let mut game = Game::new(self.size, first)?;

        while !game.is_over() {
            let mover = game.to_move();
            let agent: &mut dyn Agent = match mover {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };
            let coord = agent.select_move(game.board(), mover)?;
            trace!(agent = agent.name(), player = %mover, %coord, "move");
            game.play(coord)?;
        }

        Ok(game)
    }

    /// Play `games` games and tally the results
    pub fn run(&self, x: &mut dyn Agent, o: &mut dyn Agent, games: usize) -> Result<MatchSummary> {
        self.run_with_progress(x, o, games, |_| {})
    }

    /// Like [`Arena::run`], calling `on_game` with the number of games done
    pub fn run_with_progress<F>(
        &self,
        x: &mut dyn Agent,
        o: &mut dyn Agent,
        games: usize,
        mut on_game: F,
    ) -> Result<MatchSummary>
    where
        F: FnMut(usize),
    {
        let mut summary = MatchSummary::default();
        let mut first = self.first_player;

        for game_num in 0..games {
            let game = self.play_from(first, x, o)?;
            if let Some(outcome) = game.outcome() {
                summary.record(outcome);
                debug!(game = game_num, ?outcome, moves = game.moves().len(), "game finished");
            }
            if self.alternate_first {
                first = first.opponent();
            }
            on_game(game_num + 1);
        }

        Ok(summary)
    }
}

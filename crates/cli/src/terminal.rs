// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{self, Stylize},
    terminal::{Clear, ClearType},
};
use log::{error, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::{
    io::{self, BufRead, Write},
    thread,
    time::{Duration, Instant},
};

use lotto_core::{
    Card, Cell, Decision, DecisionRequest, Game, Keg, MoveOutcome, Oracle, Player, Presenter,
    oracle::{NO_ANSWER, YES_ANSWER, parse_yes_no},
};

use crate::roster;

/// Terminal game configuration.
#[derive(Debug)]
pub struct Config {
    /// Number of computer players.
    pub computers: usize,
    /// Human players nicknames.
    pub humans: Vec<String>,
    /// Seed for cards and bag randomness.
    pub seed: Option<u64>,
    /// Stop the game after this time.
    pub time_limit: Option<Duration>,
    /// Pause after announcing an eliminated player.
    pub pause: Duration,
}

/// Runs a game in the terminal.
pub fn run(config: Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let players = roster::generate(&config.humans, config.computers, &mut rng)?;
    let mut game = Game::with_rng(players, &mut rng);
    info!("Starting game with {} players", game.players().count());

    let mut presenter = TerminalPresenter::new(io::stdout(), config.pause);
    let mut oracle = TerminalOracle::new(io::stdin().lock(), io::stdout());

    let start_time = Instant::now();
    let time_limit = config.time_limit;
    game.run(&mut oracle, &mut presenter, || {
        time_limit.is_some_and(|limit| start_time.elapsed() >= limit)
    })?;

    print_game_over(&mut io::stdout(), &game)?;

    Ok(())
}

/// Shows the game moves on the terminal.
pub struct TerminalPresenter<W: Write> {
    output: W,
    pause: Duration,
}

impl<W: Write> TerminalPresenter<W> {
    /// Creates a presenter that writes to the given output.
    pub fn new(output: W, pause: Duration) -> Self {
        Self { output, pause }
    }

    fn show_keg(&mut self, keg: Keg, remaining: usize, player: &Player) -> io::Result<()> {
        let w = &mut self.output;
        clear(w)?;
        print_keg(w, keg, remaining)?;
        writeln!(w, "Player {player} moves")?;
        w.flush()
    }

    fn show_move(&mut self, player: &Player, outcome: MoveOutcome) -> io::Result<()> {
        let w = &mut self.output;

        if outcome.eliminated {
            clear(w)?;
            let text = format!("Player {player} {}", "LOST!".bold().underlined());
            queue!(w, style::PrintStyledContent(text.slow_blink()))?;
            writeln!(w)?;
            w.flush()?;
            thread::sleep(self.pause);
        } else if player.is_computer() {
            writeln!(w, "Player card:")?;
            print_card(w, player.card())?;
            w.flush()?;
        }

        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn keg_drawn(&mut self, keg: Keg, remaining: usize, player: &Player) {
        if let Err(e) = self.show_keg(keg, remaining, player) {
            error!("Terminal output failed {e}");
        }
    }

    fn move_resolved(&mut self, player: &Player, outcome: MoveOutcome) {
        if let Err(e) = self.show_move(player, outcome) {
            error!("Terminal output failed {e}");
        }
    }
}

/// Asks human players for their decisions on the terminal.
pub struct TerminalOracle<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalOracle<R, W> {
    /// Creates an oracle that reads answers from input.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, req: &DecisionRequest<'_>) -> io::Result<Decision> {
        writeln!(self.output, "Your card:")?;
        print_card(&mut self.output, req.player.card())?;

        if !req.others.is_empty() {
            if self.ask_yes_no("\nLook at the other players cards?")? {
                self.show_others(req.others)?;

                clear(&mut self.output)?;
                print_keg(&mut self.output, req.keg, req.remaining)?;
                writeln!(self.output, "Your card:")?;
                print_card(&mut self.output, req.player.card())?;
            }
        }

        let question = format!(
            "Strike number {} out of the card?",
            req.keg.to_string().bold().slow_blink()
        );
        self.ask_yes_no(&question).map(Decision::from)
    }

    fn show_others(&mut self, others: &[&Player]) -> io::Result<()> {
        clear(&mut self.output)?;

        let (computers, humans): (Vec<&Player>, Vec<&Player>) =
            others.iter().copied().partition(|p| p.is_computer());

        for (title, group) in [("Computers:", computers), ("People:", humans)] {
            if group.is_empty() {
                continue;
            }

            writeln!(self.output, "{title}")?;
            for player in group {
                writeln!(self.output, "Card of \"{player}\":")?;
                print_card(&mut self.output, player.card())?;
            }

            self.wait()?;
        }

        Ok(())
    }

    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        writeln!(self.output, "{question}")?;
        writeln!(self.output, "{NO_ANSWER}. No")?;
        writeln!(self.output, "{YES_ANSWER}. Yes")?;
        self.output.flush()?;

        let answer = self.read_line()?;
        Ok(parse_yes_no(&answer))
    }

    fn wait(&mut self) -> io::Result<()> {
        writeln!(self.output, "Press Enter to continue")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("End of input");
        }

        Ok(line)
    }
}

impl<R: BufRead, W: Write> Oracle for TerminalOracle<R, W> {
    fn decide(&mut self, request: &DecisionRequest<'_>) -> Decision {
        match self.ask(request) {
            Ok(decision) => decision,
            Err(e) => {
                error!("Terminal input failed {e}");
                Decision::Skip
            }
        }
    }
}

/// Prints the winner and the game status.
pub fn print_game_over(w: &mut impl Write, game: &Game) -> io::Result<()> {
    clear(w)?;

    match game.winner() {
        Some(winner) => {
            let text = format!("Player {winner} WON!");
            queue!(w, style::PrintStyledContent(text.bold().underlined()))?;
            writeln!(w)?;
            print_card(w, winner.card())?;
        }
        None => writeln!(w, "No winner")?,
    }

    writeln!(
        w,
        "{} after {} rounds, {} kegs left",
        game.status(),
        game.round(),
        game.remaining()
    )?;
    w.flush()
}

/// Prints a card grid between separator lines, struck numbers are crossed out.
pub fn print_card(w: &mut impl Write, card: &Card) -> io::Result<()> {
    let separator = "-".repeat(Card::COLS * 3 - 1);

    writeln!(w, "{separator}")?;
    for row in card.rows() {
        for (col, cell) in row.iter().enumerate() {
            if col > 0 {
                write!(w, " ")?;
            }

            match cell {
                Cell::Blank => write!(w, "  ")?,
                Cell::Number(keg) => write!(w, "{keg:>2}")?,
                Cell::Struck(keg) => {
                    let text = format!("{keg:>2}");
                    queue!(w, style::PrintStyledContent(text.crossed_out()))?;
                }
            }
        }
        writeln!(w)?;
    }
    writeln!(w, "{separator}")
}

fn print_keg(w: &mut impl Write, keg: Keg, remaining: usize) -> io::Result<()> {
    let keg = keg.to_string().bold().slow_blink();
    writeln!(w, "New keg: {keg} ({remaining} left)")
}

fn clear(w: &mut impl Write) -> io::Result<()> {
    execute!(w, Clear(ClearType::All), cursor::MoveTo(0, 0))
}

//! Terminal front end. Owns no rules: it reads commands, forwards them to a
//! [`BattleshipsMatch`] and prints what the match reports.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;

use crate::config::{FLEET, GRID_SIZE};
use crate::game::{BattleshipsMatch, Difficulty, MatchState, Side};
use crate::grid::{EnemyView, Grid};
use crate::highscores::HighScores;
use crate::screen::{GameScreen, ScreenStack};
use crate::ship::Orientation;
use crate::tile::TileView;
use crate::AttackResult;

/// Options for an interactive session.
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible matches.
    pub seed: Option<u64>,
    pub scores: PathBuf,
}

pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `A5`-style input into (row, col). Rejects coordinates off the grid.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Parse a placement such as `A5 H` or `c2 v`. Orientation defaults to
/// horizontal.
pub fn parse_placement(input: &str) -> Option<(usize, usize, Orientation)> {
    let mut parts = input.split_whitespace();
    let (r, c) = parts.next().and_then(parse_coord)?;
    let orientation = match parts.next().map(|p| p.to_ascii_uppercase()) {
        None => Orientation::Horizontal,
        Some(p) if p.starts_with('H') => Orientation::Horizontal,
        Some(p) if p.starts_with('V') => Orientation::Vertical,
        Some(_) => return None,
    };
    Some((r, c, orientation))
}

fn tile_char(view: TileView) -> char {
    match view {
        TileView::Sea => '.',
        TileView::Ship => 'S',
        TileView::Hit => 'X',
        TileView::Miss => 'o',
    }
}

fn render(view: impl Fn(usize, usize) -> Option<TileView>) -> String {
    let mut out = String::from("   ");
    for c in 0..GRID_SIZE {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        out.push_str(&format!("{:2} ", r + 1));
        for c in 0..GRID_SIZE {
            out.push(' ');
            out.push(view(r, c).map_or(' ', tile_char));
        }
        out.push('\n');
    }
    out
}

/// A player's own grid with ships revealed.
pub fn render_own_grid(grid: &Grid) -> String {
    render(|r, c| grid.view(r, c))
}

/// The opponent's grid as seen through the fog of war.
pub fn render_enemy_view(view: &EnemyView<'_>) -> String {
    render(|r, c| view.view(r, c))
}

/// One line describing a shot from the point of view of the human.
pub fn describe_attack(side: Side, result: &AttackResult) -> String {
    match side {
        Side::Human => format!("You {}", result),
        Side::Computer => format!(
            "The AI {} ({})",
            result,
            coord_to_string(result.row(), result.column())
        ),
    }
}

struct Session<R, W> {
    input: R,
    out: W,
    options: PlayOptions,
    screens: ScreenStack,
    current: Option<BattleshipsMatch>,
    messages: Rc<RefCell<Vec<String>>>,
    games_played: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn flush_messages(&mut self) -> anyhow::Result<()> {
        let messages: Vec<String> = self.messages.borrow_mut().drain(..).collect();
        for m in messages {
            writeln!(self.out, "{}", m)?;
        }
        Ok(())
    }

    fn start_match(&mut self) -> anyhow::Result<()> {
        let difficulty = self.options.difficulty;
        let mut m = match self.options.seed {
            Some(seed) => {
                BattleshipsMatch::new(difficulty, seed.wrapping_add(self.games_played))
            }
            None => BattleshipsMatch::from_entropy(difficulty),
        }?;
        self.games_played += 1;
        let messages = Rc::clone(&self.messages);
        m.subscribe_on_attack_completed(move |side, result| {
            messages.borrow_mut().push(describe_attack(side, result));
        });
        self.current = Some(m);
        self.screens.push(GameScreen::Deploying);
        Ok(())
    }

    fn main_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "\n== BATTLESHIPS ==")?;
        writeln!(
            self.out,
            "1) Play  2) Difficulty ({:?})  3) High scores  4) Quit",
            self.options.difficulty
        )?;
        match self.prompt("> ")?.as_deref() {
            Some("1") | Some("p") => self.start_match()?,
            Some("2") | Some("d") => self.screens.push(GameScreen::AlteringSettings),
            Some("3") | Some("h") => self.screens.push(GameScreen::ViewingHighScores),
            Some("4") | Some("q") | None => {
                self.screens.pop();
            }
            Some(_) => writeln!(self.out, "Invalid choice")?,
        }
        Ok(())
    }

    fn settings(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "1) Easy  2) Medium  3) Hard")?;
        match self.prompt("> ")?.as_deref() {
            Some("1") => self.options.difficulty = Difficulty::Easy,
            Some("2") => self.options.difficulty = Difficulty::Medium,
            Some("3") => self.options.difficulty = Difficulty::Hard,
            _ => {}
        }
        self.screens.pop();
        Ok(())
    }

    fn high_scores(&mut self) -> anyhow::Result<()> {
        let table = HighScores::load(&self.options.scores)?;
        write!(self.out, "{}", table.render())?;
        self.prompt("Press enter to continue")?;
        self.screens.pop();
        Ok(())
    }

    fn deploying(&mut self) -> anyhow::Result<()> {
        let Some(m) = self.current.as_ref() else {
            self.screens.return_to_main_menu();
            return Ok(());
        };
        writeln!(self.out, "\nYour fleet:\n{}", render_own_grid(m.human().grid()))?;
        for (i, name) in FLEET.iter().enumerate() {
            writeln!(self.out, "{}) {} (length {})", i + 1, name, name.size())?;
        }
        let line =
            self.prompt("Move a ship with `<n> A5 H|V`, `r` to shuffle, enter to battle: ")?;
        let Some(m) = self.current.as_mut() else {
            return Ok(());
        };
        match line.as_deref() {
            None => {
                m.abandon();
                self.current = None;
                self.screens.return_to_main_menu();
            }
            Some("") => match m.begin_battle() {
                Ok(()) => self.screens.switch(GameScreen::Discovering),
                Err(e) => writeln!(self.out, "Error: {}", e)?,
            },
            Some("r") | Some("R") => m.randomize_deployment()?,
            Some(cmd) => {
                let (index, rest) = cmd.split_once(' ').unwrap_or((cmd, ""));
                let ship = index
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| FLEET.get(i).copied());
                match (ship, parse_placement(rest)) {
                    (Some(ship), Some((r, c, o))) => {
                        if let Err(e) = m.place_ship(ship, r, c, o) {
                            writeln!(self.out, "Error: {}", e)?;
                        }
                    }
                    _ => writeln!(self.out, "Invalid input")?,
                }
            }
        }
        Ok(())
    }

    fn discovering(&mut self) -> anyhow::Result<()> {
        let Some(m) = self.current.as_ref() else {
            self.screens.return_to_main_menu();
            return Ok(());
        };
        writeln!(self.out, "\nOpponent:\n{}", render_enemy_view(&m.enemy_view(Side::Human)))?;
        writeln!(self.out, "You:\n{}", render_own_grid(m.human().grid()))?;
        let line = self.prompt("Target (e.g. C4, `m` for menu): ")?;
        let Some(m) = self.current.as_mut() else {
            return Ok(());
        };
        match line.as_deref() {
            None => m.abandon(),
            Some("m") | Some("M") => {
                self.screens.push(GameScreen::ViewingGameMenu);
                return Ok(());
            }
            Some(text) => match parse_coord(text) {
                Some((r, c)) => {
                    if let Err(e) = m.human_shoot(r, c) {
                        writeln!(self.out, "Error: {}", e)?;
                    }
                }
                None => writeln!(self.out, "Invalid coordinate")?,
            },
        }
        self.flush_messages()?;
        if self.current.as_ref().map(|m| m.state()) == Some(MatchState::Ending) {
            self.screens.switch(GameScreen::EndingGame);
        }
        Ok(())
    }

    fn game_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "1) Return to battle  2) Surrender  3) Quit")?;
        match self.prompt("> ")?.as_deref() {
            Some("1") => {
                self.screens.pop();
            }
            Some("2") => {
                if let Some(m) = self.current.as_mut() {
                    m.abandon();
                }
                self.current = None;
                self.screens.return_to_main_menu();
            }
            Some("3") | None => {
                if let Some(m) = self.current.as_mut() {
                    m.abandon();
                }
                self.current = None;
                self.screens = ScreenStack::new();
                self.screens.pop();
            }
            Some(_) => writeln!(self.out, "Invalid choice")?,
        }
        Ok(())
    }

    fn ending(&mut self) -> anyhow::Result<()> {
        let Some(m) = self.current.take() else {
            self.screens.return_to_main_menu();
            return Ok(());
        };
        writeln!(self.out, "\nEnemy fleet:\n{}", render_own_grid(m.computer().grid()))?;
        let score = m.human().score();
        match m.winner() {
            Some(Side::Human) => writeln!(self.out, "-- You Win --")?,
            Some(Side::Computer) => writeln!(self.out, "You Lose!")?,
            None => {
                writeln!(self.out, "Match abandoned")?;
                self.screens.return_to_main_menu();
                return Ok(());
            }
        }
        writeln!(self.out, "Score: {}", score)?;

        let mut table = HighScores::load(&self.options.scores)?;
        self.screens.return_to_main_menu();
        if table.qualifies(score) {
            let name = self.prompt("New high score! Name: ")?.unwrap_or_default();
            table.insert(&name, score);
            table.save(&self.options.scores)?;
            self.screens.push(GameScreen::ViewingHighScores);
        }
        Ok(())
    }
}

/// Run an interactive session until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(input: R, out: W, options: PlayOptions) -> anyhow::Result<()> {
    let mut session = Session {
        input,
        out,
        options,
        screens: ScreenStack::new(),
        current: None,
        messages: Rc::new(RefCell::new(Vec::new())),
        games_played: 0,
    };
    loop {
        match session.screens.current() {
            GameScreen::ViewingMainMenu => session.main_menu()?,
            GameScreen::AlteringSettings => session.settings()?,
            GameScreen::ViewingHighScores => session.high_scores()?,
            GameScreen::Deploying => session.deploying()?,
            GameScreen::Discovering => session.discovering()?,
            GameScreen::ViewingGameMenu => session.game_menu()?,
            GameScreen::EndingGame => session.ending()?,
            GameScreen::Quitting => break,
        }
    }
    Ok(())
}

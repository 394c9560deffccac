//! Which screen the front end is showing, kept as an explicit stack so a
//! screen can return to whatever opened it.

/// Screens of the game's front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameScreen {
    ViewingMainMenu,
    ViewingGameMenu,
    AlteringSettings,
    Deploying,
    Discovering,
    EndingGame,
    ViewingHighScores,
    Quitting,
}

/// Navigation stack. The bottom entry is always `Quitting`, so leaving the
/// main menu quits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStack {
    stack: Vec<GameScreen>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self {
            stack: vec![GameScreen::Quitting, GameScreen::ViewingMainMenu],
        }
    }

    pub fn current(&self) -> GameScreen {
        self.stack.last().copied().unwrap_or(GameScreen::Quitting)
    }

    pub fn push(&mut self, screen: GameScreen) {
        self.stack.push(screen);
    }

    /// Return to the previous screen. Popping `Quitting` is a no-op.
    pub fn pop(&mut self) -> GameScreen {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }

    /// Replace the current screen.
    pub fn switch(&mut self, screen: GameScreen) {
        self.pop();
        self.push(screen);
    }

    /// Drop everything above the main menu, e.g. after a match ends.
    pub fn return_to_main_menu(&mut self) {
        self.stack.truncate(1);
        self.stack.push(GameScreen::ViewingMainMenu);
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for ScreenStack {
    fn default() -> Self {
        Self::new()
    }
}

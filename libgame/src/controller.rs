//! The run/stop state machine that every input and heartbeat event goes through.

use strum::Display;
use tracing::{debug, info, trace, warn};

use crate::{
    Game,
    board::{GameBoard, TileState},
    cursor::{Cursor, Direction},
    pos::Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SimulationState {
    /// No board yet: the size source has not reported.
    #[strum(serialize = "PREINIT")]
    PreInit,
    Stopped,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    ToggleAlive,
    ToggleDead,
    Run,
    Stop,
    Quit,
    /// One generation by hand, only while stopped.
    Step,
    Clear,
    Randomize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Resize { height: usize, width: usize },
    Tick,
    Command(Command),
}

impl From<Command> for GameEvent {
    fn from(command: Command) -> Self {
        GameEvent::Command(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: Option<&'a GameBoard>,
    pub cursor: Position,
    pub cursor_tile: Option<TileState>,
    pub state: SimulationState,
    pub generation: u64,
}

#[derive(Debug)]
pub struct Simulation {
    state: SimulationState,
    game: Option<Game>,
    cursor: Cursor,
    quit: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            state: SimulationState::PreInit,
            game: None,
            cursor: Cursor::default(),
            quit: false,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    pub fn generation(&self) -> u64 {
        self.game.as_ref().map_or(0, Game::generation)
    }

    pub fn has_quit(&self) -> bool {
        self.quit
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let board = self.game.as_ref().map(Game::board);
        let cursor = self.cursor.position();

        Snapshot {
            board,
            cursor,
            cursor_tile: board.and_then(|board| board.tile(cursor).copied()),
            state: self.state,
            generation: self.generation(),
        }
    }

    /// Applies one event. Once `Quit` has been handled every later event is dropped.
    pub fn handle(&mut self, event: GameEvent) -> Flow {
        if self.quit {
            trace!(?event, "ignoring event after quit");
            return Flow::Quit;
        }

        match event {
            GameEvent::Resize { height, width } => self.initialize(height, width),
            GameEvent::Tick => self.on_tick(),
            GameEvent::Command(command) => self.on_command(command),
        }

        if self.quit { Flow::Quit } else { Flow::Continue }
    }

    fn initialize(&mut self, height: usize, width: usize) {
        if self.game.is_some() {
            debug!(height, width, "board size is fixed for the run, ignoring resize");
            return;
        }

        match Game::new(height, width) {
            Ok(game) => {
                info!(height, width, "board created");
                self.game = Some(game);
                self.set_state(SimulationState::Stopped);
            }
            Err(e) => warn!("not creating board: {e}"),
        }
    }

    fn on_tick(&mut self) {
        if self.state != SimulationState::Running {
            return;
        }

        if let Some(game) = &mut self.game {
            game.tick();
            trace!(generation = game.generation(), "advanced");
        }
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!(generation = self.generation(), "quit");
                self.quit = true;
            }
            Command::Move(direction) => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                let boards = game.boards();
                self.cursor.step(direction, boards.height(), boards.width());
            }
            Command::ToggleAlive => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                self.cursor.toggle_alive(game.boards_mut());
                debug!(pos = ?self.cursor.position(), "cell set alive");
            }
            Command::ToggleDead => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                self.cursor.toggle_dead(game.boards_mut());
                debug!(pos = ?self.cursor.position(), "cell set dead");
            }
            Command::Run => {
                if loaded(&mut self.game, command).is_some() {
                    self.set_state(SimulationState::Running);
                }
            }
            Command::Stop => {
                if loaded(&mut self.game, command).is_some() {
                    self.set_state(SimulationState::Stopped);
                }
            }
            Command::Step => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                if self.state == SimulationState::Stopped {
                    game.tick();
                    debug!(generation = game.generation(), "stepped");
                }
            }
            Command::Clear => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                game.boards_mut().current_mut().clear();
                debug!("board cleared");
            }
            Command::Randomize => {
                let Some(game) = loaded(&mut self.game, command) else {
                    return;
                };
                let board = game.boards_mut().current_mut();
                let alive_cells = board.height * board.width / 3;
                board.randomize(&mut rand::rng(), alive_cells);
                debug!(alive_cells, "board randomized");
            }
        }
    }

    fn set_state(&mut self, state: SimulationState) {
        if self.state != state {
            debug!(from = %self.state, to = %state, "state change");
            self.state = state;
        }
    }
}

/// The board a command acts on, or `None` (logged) while the size is still unknown.
fn loaded(game: &mut Option<Game>, command: Command) -> Option<&mut Game> {
    if game.is_none() {
        debug!(?command, "no board yet, ignoring command");
    }

    game.as_mut()
}

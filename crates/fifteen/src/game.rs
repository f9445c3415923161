//! The game shell: a root view holding one puzzle grid, plus the keyboard
//! commands and window handling a host needs around it.

use std::rc::Rc;

use fifteen_core::logging::targets;
use fifteen_render::{Point, Rect, Size, Surface};
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::Result;
use crate::config::Config;
use crate::puzzle::{INITIAL_ORDERING, PuzzleGrid, SOLVED_ORDERING};
use crate::widget::{Gui, InputSnapshot, InputState, View, WidgetTree};

/// A keyboard command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Leave the game. Bound to Escape.
    Quit,
    /// Shuffle the tiles. Bound to Ctrl+Space.
    Shuffle,
}

impl Command {
    /// The command bound to a pressed key, if any.
    pub fn from_key(key: &Key, modifiers: ModifiersState) -> Option<Self> {
        match key {
            Key::Named(NamedKey::Escape) => Some(Self::Quit),
            Key::Named(NamedKey::Space) if modifiers.control_key() => Some(Self::Shuffle),
            Key::Character(text) if text.as_str() == " " && modifiers.control_key() => {
                Some(Self::Shuffle)
            }
            _ => None,
        }
    }
}

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// A running game.
///
/// The root view has the configured logical size. The host renders it to a
/// surface of that size and scales the result into the window; after every
/// window resize it calls [`resize`](Self::resize) so that pointer positions
/// map back correctly.
#[derive(Debug)]
pub struct Game<I> {
    gui: Gui<I>,
    grid: PuzzleGrid,
    rng: StdRng,
    modifiers: ModifiersState,
}

impl<I: InputSnapshot> Game<I> {
    /// Build a shuffled game seeded from the OS.
    pub fn new(config: &Config, input: I) -> Result<Self> {
        Self::with_rng(config, input, StdRng::from_entropy())
    }

    /// Build a game that shuffles with `rng`.
    pub fn with_rng(config: &Config, input: I, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let style = Rc::new(config.style()?);
        let rect = Rect::from_origin_size(Point::ZERO, config.root_size());

        let mut tree = WidgetTree::new();
        let root = tree.insert(rect, View::new());
        let grid = PuzzleGrid::create(&mut tree, root, rect, style)?;
        grid.set_border_width(&mut tree, config.grid.border_width)?;
        grid.set_tiles_ordering(&mut tree, &INITIAL_ORDERING)?;

        let gui = Gui::new(tree, root, rect, input)?;
        let mut game = Self {
            gui,
            grid,
            rng,
            modifiers: ModifiersState::empty(),
        };
        game.shuffle()?;
        Ok(game)
    }

    /// Run one frame of input dispatch.
    pub fn update(&mut self) -> Result<()> {
        self.gui.update()
    }

    /// Paint the root view and everything in it.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        self.gui.draw(surface)
    }

    /// Randomly reorder the tiles.
    pub fn shuffle(&mut self) -> Result<()> {
        self.grid.shuffle(self.gui.tree_mut(), &mut self.rng)?;
        tracing::debug!(
            target: targets::GAME,
            ordering = ?self.grid.ordering(self.gui.tree())?,
            "shuffled"
        );
        Ok(())
    }

    /// Whether the board is finished: tiles in label order with the empty
    /// slot last.
    pub fn is_solved(&self) -> Result<bool> {
        Ok(self.grid.ordering(self.gui.tree())? == SOLVED_ORDERING)
    }

    /// Fit the root into a window of `physical` size.
    ///
    /// The root keeps its aspect ratio and is centered, leaving bars on the
    /// two sides with spare room. Returns the new viewport.
    pub fn resize(&mut self, physical: Size) -> Result<Rect> {
        let root = self.gui.tree().rect(self.gui.root())?.size;
        let viewport = letterbox(root, physical);
        self.gui.set_viewport(viewport);
        tracing::debug!(
            target: targets::GAME,
            width = physical.width,
            height = physical.height,
            ?viewport,
            "resized"
        );
        Ok(viewport)
    }

    /// Apply a keyboard command.
    pub fn handle_command(&mut self, command: Command) -> Result<LoopControl> {
        tracing::debug!(target: targets::GAME, ?command, "command");
        match command {
            Command::Quit => Ok(LoopControl::Exit),
            Command::Shuffle => {
                self.shuffle()?;
                Ok(LoopControl::Continue)
            }
        }
    }

    /// The puzzle grid.
    pub fn grid(&self) -> PuzzleGrid {
        self.grid
    }

    /// The root controller.
    pub fn gui(&self) -> &Gui<I> {
        &self.gui
    }

    /// Mutable access to the root controller.
    pub fn gui_mut(&mut self) -> &mut Gui<I> {
        &mut self.gui
    }

    /// The modifiers last reported by the window.
    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }
}

impl Game<InputState> {
    /// Fold a window event into the game.
    ///
    /// Pointer events update the input snapshot for the next
    /// [`update`](Self::update); key presses are turned into commands.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<LoopControl> {
        match event {
            WindowEvent::CloseRequested => return Ok(LoopControl::Exit),
            WindowEvent::Resized(size) => {
                self.resize(Size::new(size.width as f32, size.height as f32))?;
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
            }
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                if let Some(command) = Command::from_key(&event.logical_key, self.modifiers) {
                    return self.handle_command(command);
                }
            }
            other => {
                self.gui.input_mut().handle_window_event(other);
            }
        }
        Ok(LoopControl::Continue)
    }
}

/// The largest rectangle of `content`'s aspect ratio centered in `outer`.
fn letterbox(content: Size, outer: Size) -> Rect {
    if content.is_empty() || outer.is_empty() {
        return Rect::ZERO;
    }

    let scale = (outer.width / content.width).min(outer.height / content.height);
    let width = content.width * scale;
    let height = content.height * scale;
    Rect::new(
        (outer.width - width) / 2.0,
        (outer.height - height) / 2.0,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use fifteen_render::RecordingSurface;
    use winit::dpi::PhysicalSize;

    use super::*;
    use crate::puzzle::TILE_COUNT;

    fn seeded(seed: u64) -> Game<InputState> {
        Game::with_rng(&Config::default(), InputState::new(), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn assert_permutation(ordering: &[u8]) {
        let mut sorted = ordering.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, INITIAL_ORDERING);
    }

    #[test]
    fn test_new_game_is_shuffled_permutation() {
        let game = seeded(7);
        let ordering = game.grid().ordering(game.gui().tree()).unwrap();

        assert_eq!(ordering.len(), TILE_COUNT);
        assert_permutation(&ordering);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = seeded(42);
        let b = seeded(42);
        assert_eq!(
            a.grid().ordering(a.gui().tree()).unwrap(),
            b.grid().ordering(b.gui().tree()).unwrap()
        );
    }

    #[test]
    fn test_config_geometry_is_applied() {
        let config = Config::from_toml_str("[root]\nwidth = 200\nheight = 200\n[grid]\nborder_width = 4\n").unwrap();
        let game = Game::with_rng(&config, InputState::new(), StdRng::seed_from_u64(1)).unwrap();
        let tree = game.gui().tree();

        assert_eq!(tree.rect(game.gui().root()).unwrap(), Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(game.grid().border_width(tree).unwrap(), 4.0);
        assert_eq!(game.gui().viewport(), Rect::new(0.0, 0.0, 200.0, 200.0));
    }

    #[test]
    fn test_solved_means_empty_slot_last() {
        let mut game = seeded(2);
        let grid = game.grid();

        grid.set_tiles_ordering(game.gui_mut().tree_mut(), &SOLVED_ORDERING).unwrap();
        assert!(game.is_solved().unwrap());

        grid.set_tiles_ordering(game.gui_mut().tree_mut(), &INITIAL_ORDERING).unwrap();
        assert!(!game.is_solved().unwrap());
    }

    #[test]
    fn test_resize_letterboxes() {
        let mut game = seeded(1);

        assert_eq!(
            game.resize(Size::new(800.0, 400.0)).unwrap(),
            Rect::new(200.0, 0.0, 400.0, 400.0)
        );
        assert_eq!(
            game.resize(Size::new(200.0, 600.0)).unwrap(),
            Rect::new(0.0, 200.0, 200.0, 200.0)
        );
        assert_eq!(game.gui().viewport(), Rect::new(0.0, 200.0, 200.0, 200.0));
        assert_eq!(game.resize(Size::ZERO).unwrap(), Rect::ZERO);
    }

    #[test]
    fn test_draws_fifteen_labels() {
        let mut game = seeded(3);
        let mut surface = RecordingSurface::new(Size::new(400.0, 400.0));

        game.update().unwrap();
        game.draw(&mut surface).unwrap();

        let mut labels: Vec<u8> = surface
            .texts()
            .into_iter()
            .map(|text| text.parse().unwrap())
            .collect();
        labels.sort_unstable();
        assert_eq!(labels, (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_command_bindings() {
        let ctrl = ModifiersState::CONTROL;
        let none = ModifiersState::empty();

        assert_eq!(Command::from_key(&Key::Named(NamedKey::Escape), none), Some(Command::Quit));
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Space), ctrl), Some(Command::Shuffle));
        assert_eq!(Command::from_key(&Key::Character(" ".into()), ctrl), Some(Command::Shuffle));
        assert_eq!(Command::from_key(&Key::Named(NamedKey::Space), none), None);
        assert_eq!(Command::from_key(&Key::Character("a".into()), ctrl), None);
    }

    #[test]
    fn test_handle_command() {
        let mut game = seeded(9);

        assert_eq!(game.handle_command(Command::Shuffle).unwrap(), LoopControl::Continue);
        assert_permutation(&game.grid().ordering(game.gui().tree()).unwrap());
        assert_eq!(game.handle_command(Command::Quit).unwrap(), LoopControl::Exit);
    }

    #[test]
    fn test_window_events() {
        let mut game = seeded(5);

        let resized = WindowEvent::Resized(PhysicalSize::new(800, 400));
        assert_eq!(game.handle_window_event(&resized).unwrap(), LoopControl::Continue);
        assert_eq!(game.gui().viewport(), Rect::new(200.0, 0.0, 400.0, 400.0));

        assert_eq!(
            game.handle_window_event(&WindowEvent::CloseRequested).unwrap(),
            LoopControl::Exit
        );
    }

    #[test]
    fn test_letterbox_degenerate_content() {
        assert_eq!(letterbox(Size::ZERO, Size::new(10.0, 10.0)), Rect::ZERO);
    }
}

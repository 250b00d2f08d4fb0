use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::config::{AppConfig, GridConfig};
use crate::grid::{Grid, Point};
use crate::path::{enumerate_paths, RandomWalker};

pub(super) const FORM_LABELS: [&str; 6] =
    ["Height", "Width", "Start x", "Start y", "End x", "End y"];

pub(super) const MENU_ITEMS: [&str; 3] = ["Random walk", "All valid paths", "Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Setup,
    Menu,
    Walk,
    Solutions,
}

/// Editable grid dimensions, one text field per number.
pub(super) struct SetupForm {
    pub values: [String; 6],
    pub focus: usize,
}

impl SetupForm {
    fn from_config(config: &GridConfig) -> Self {
        SetupForm {
            values: [
                config.height.to_string(),
                config.width.to_string(),
                config.start_x.to_string(),
                config.start_y.to_string(),
                config.end_x.to_string(),
                config.end_y.to_string(),
            ],
            focus: 0,
        }
    }

    fn next_field(&mut self) {
        self.focus = (self.focus + 1) % FORM_LABELS.len();
    }

    fn prev_field(&mut self) {
        self.focus = (self.focus + FORM_LABELS.len() - 1) % FORM_LABELS.len();
    }

    fn push_digit(&mut self, digit: char) {
        if self.values[self.focus].len() < 4 {
            self.values[self.focus].push(digit);
        }
    }

    fn backspace(&mut self) {
        self.values[self.focus].pop();
    }

    fn parse(&self) -> Result<(usize, usize, Point, Point), String> {
        let mut nums = [0usize; 6];
        for (i, value) in self.values.iter().enumerate() {
            nums[i] = value
                .parse()
                .map_err(|_| format!("{} must be a number", FORM_LABELS[i]))?;
        }
        Ok((
            nums[0],
            nums[1],
            Point::new(nums[2], nums[3]),
            Point::new(nums[4], nums[5]),
        ))
    }
}

pub struct App {
    screen: Screen,
    form: SetupForm,
    template: Option<Grid>,
    walked: Option<Grid>,
    solutions: Vec<Grid>,
    selected_solution: usize,
    menu_choice: usize,
    walker: RandomWalker,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let walker = match config.walk.seed {
            Some(seed) => RandomWalker::from_seed(seed),
            None => RandomWalker::new(),
        };
        App {
            screen: Screen::Setup,
            form: SetupForm::from_config(&config.grid),
            template: config.grid.build_grid().ok(),
            walked: None,
            solutions: Vec::new(),
            selected_solution: 0,
            menu_choice: 0,
            walker,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Menu => self.handle_menu_key(key),
            Screen::Walk => self.handle_walk_key(key),
            Screen::Solutions => self.handle_solutions_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.prev_field();
            }
            KeyCode::Backspace => {
                self.form.backspace();
            }
            KeyCode::Enter => {
                self.accept_form();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.form.push_digit(c);
            }
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.menu_choice = (self.menu_choice + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
            }
            KeyCode::Down => {
                self.menu_choice = (self.menu_choice + 1) % MENU_ITEMS.len();
            }
            KeyCode::Enter => match self.menu_choice {
                0 => self.run_walk(),
                1 => self.run_enumerate(),
                _ => self.should_quit = true,
            },
            KeyCode::Char('1') => {
                self.run_walk();
            }
            KeyCode::Char('2') => {
                self.run_enumerate();
            }
            KeyCode::Char('e') => {
                self.screen = Screen::Setup;
            }
            KeyCode::Char('3') | KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_walk_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => {
                self.run_walk();
            }
            KeyCode::Char('m') => {
                self.screen = Screen::Menu;
            }
            KeyCode::Char('n') => {
                self.screen = Screen::Setup;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_solutions_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => {
                if self.selected_solution > 0 {
                    self.selected_solution -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_solution + 1 < self.solutions.len() {
                    self.selected_solution += 1;
                }
            }
            KeyCode::Char('m') => {
                self.screen = Screen::Menu;
            }
            KeyCode::Char('n') => {
                self.screen = Screen::Setup;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Validate the form and move on to the menu
    fn accept_form(&mut self) {
        let (height, width, start, end) = match self.form.parse() {
            Ok(parts) => parts,
            Err(msg) => {
                self.message = Some(msg);
                return;
            }
        };
        match Grid::new(height, width, start, end) {
            Ok(grid) => {
                self.template = Some(grid);
                self.screen = Screen::Menu;
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    fn run_walk(&mut self) {
        if let Some(template) = &self.template {
            let mut grid = template.clone();
            self.walker.walk(&mut grid);
            self.walked = Some(grid);
            self.screen = Screen::Walk;
        } else {
            self.message = Some("No grid configured yet".to_string());
        }
    }

    fn run_enumerate(&mut self) {
        if let Some(template) = &self.template {
            self.solutions = enumerate_paths(template);
            self.selected_solution = 0;
            self.screen = Screen::Solutions;
            self.message = Some(format!("{} paths found", self.solutions.len()));
        } else {
            self.message = Some("No grid configured yet".to_string());
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::Setup => super::setup_view::render_setup(frame, &self.form, &self.message),
            Screen::Menu => super::setup_view::render_menu(
                frame,
                self.template.as_ref(),
                self.menu_choice,
                &self.message,
            ),
            Screen::Walk => {
                super::path_view::render_walk(frame, self.walked.as_ref(), &self.message)
            }
            Screen::Solutions => super::path_view::render_solutions(
                frame,
                &self.solutions,
                self.selected_solution,
                &self.message,
            ),
        }
    }
}

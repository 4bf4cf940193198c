//! Menu stack and the read-dispatch-print loop.
//!
//! A [`Session`] owns every open menu, keyed by id, plus the pointer to the
//! active one. Opening a menu is a blocking push: [`Session::open_menu`]
//! returns only after that menu (and everything it opened) has closed.
//! Closing cascades depth-first through children and hands control back to
//! the parent, or ends the session when the root goes away.

mod events;

pub use events::SessionEvent;

use crate::config::Config;
use crate::console::{Console, TerminalConsole};
use crate::error::SessionError;
use crate::menu::{CommandFailure, Menu, MenuFactory, MenuId, MenuState, MenuTheme};
use crate::tui::input::{self, ReadOutcome};
use crate::tui::printer;
use crossterm::event::KeyEvent;
use crossterm::style::Color;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use tracing::{debug, info, warn};

type EventListener = Box<dyn FnMut(&SessionEvent)>;

pub struct Session {
    console: Box<dyn Console>,
    menus: BTreeMap<MenuId, Menu>,
    closed: BTreeSet<MenuId>,
    active: Option<MenuId>,
    theme: MenuTheme,
    statistics: bool,
    running: bool,
    listener: Option<EventListener>,
}

impl Session {
    pub fn new(console: Box<dyn Console>, config: &Config) -> Self {
        Self {
            console,
            menus: BTreeMap::new(),
            closed: BTreeSet::new(),
            active: None,
            theme: config.display.theme(),
            statistics: config.session.statistics,
            running: false,
            listener: None,
        }
    }

    /// Session bound to the process terminal.
    pub fn terminal(config: &Config) -> Self {
        Self::new(Box::new(TerminalConsole::new(config.display.color)), config)
    }

    /// Register the lifecycle listener (replaces any previous one).
    pub fn on_event<F>(&mut self, listener: F)
    where
        F: FnMut(&SessionEvent) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn theme(&self) -> &MenuTheme {
        &self.theme
    }

    pub fn statistics_enabled(&self) -> bool {
        self.statistics
    }

    pub fn set_statistics_enabled(&mut self, enabled: bool) {
        self.statistics = enabled;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_menu_id(&self) -> Option<MenuId> {
        self.active
    }

    pub fn active_menu(&self) -> Option<&Menu> {
        self.active.and_then(|id| self.menus.get(&id))
    }

    pub fn menu(&self, id: MenuId) -> Option<&Menu> {
        self.menus.get(&id)
    }

    pub fn menu_mut(&mut self, id: MenuId) -> Option<&mut Menu> {
        self.menus.get_mut(&id)
    }

    pub fn menu_count(&self) -> usize {
        self.menus.len()
    }

    pub fn contains_menu(&self, id: MenuId) -> bool {
        self.menus.contains_key(&id)
    }

    pub fn console(&mut self) -> &mut dyn Console {
        &mut *self.console
    }

    // -----------------------------------------------------------------------
    // Stack operations
    // -----------------------------------------------------------------------

    /// Open the root menu and run until it closes.
    pub fn start(&mut self, factory: impl MenuFactory) -> Result<(), SessionError> {
        if self.active.is_some() {
            return Err(SessionError::AlreadyRunning);
        }
        self.emit(SessionEvent::Starting);

        let menu = factory.build(&self.theme);
        let id = self.insert(menu);
        self.running = true;
        self.switch_to_menu(id)?;
        info!(menu = %id, "session started");
        self.emit(SessionEvent::Started);

        let outcome = self.run_loop(id);
        match &outcome {
            Ok(()) => info!("session stopped"),
            Err(err) => {
                warn!(error = %err, "session stopped with error");
                self.discard_failed(id);
            }
        }
        self.running = false;
        self.emit(SessionEvent::Stopped);
        outcome
    }

    /// Open a menu on top of the active one and block until it closes.
    ///
    /// Returns the id the opened menu had. When a command in it fails, the
    /// menu is closed and the parent is active again before the error is
    /// returned.
    pub fn open_menu(&mut self, factory: impl MenuFactory) -> Result<MenuId, SessionError> {
        let menu = factory.build(&self.theme);
        let nested = self.active.is_some();
        let id = self.insert(menu);
        if nested {
            self.console.write("\n")?;
        }
        self.running = true;
        self.switch_to_menu(id)?;
        if let Err(err) = self.run_loop(id) {
            // Hand control back to the parent before the error reaches it.
            self.discard_failed(id);
            return Err(err);
        }
        Ok(id)
    }

    /// Register a menu under the active one without activating it.
    pub fn register_menu(&mut self, factory: impl MenuFactory) -> MenuId {
        let menu = factory.build(&self.theme);
        self.insert(menu)
    }

    /// Close the active menu.
    pub fn close_active_menu(&mut self) -> Result<Vec<MenuId>, SessionError> {
        let id = self.active.ok_or(SessionError::NoActiveMenu)?;
        self.close_menu(id)
    }

    /// Close `id` and its whole subtree, children first.
    ///
    /// Returns the closed ids in closing order. Closing a menu that was
    /// already closed returns an empty list; an id never registered here is
    /// an error.
    pub fn close_menu(&mut self, id: MenuId) -> Result<Vec<MenuId>, SessionError> {
        let Some(menu) = self.menus.get(&id) else {
            if self.closed.contains(&id) {
                return Ok(Vec::new());
            }
            return Err(SessionError::UnknownMenu(id));
        };
        let parent = menu.parent_id();

        let mut closed = Vec::new();
        self.dispose_subtree(id, &mut closed);
        if let Some(parent_menu) = parent.and_then(|p| self.menus.get_mut(&p)) {
            parent_menu.remove_child(id);
        }
        info!(menu = %id, closed = ?closed, "closed menu");

        let active_closed = self.active.is_some_and(|active| closed.contains(&active));
        if active_closed {
            match parent.filter(|p| self.menus.contains_key(p)) {
                // Resume the parent as-is; its header is not reprinted.
                Some(parent) => self.set_active(Some(parent)),
                None => self.set_active(None),
            }
        }
        if self.active.is_none() {
            self.running = false;
        }

        self.emit(SessionEvent::MenuClosed(closed.clone()));
        Ok(closed)
    }

    /// Make `id` the active menu and print its header.
    ///
    /// Returns `false` without printing when `id` is already active.
    pub fn switch_to_menu(&mut self, id: MenuId) -> Result<bool, SessionError> {
        if !self.menus.contains_key(&id) {
            return Err(SessionError::UnknownMenu(id));
        }
        if self.active == Some(id) {
            return Ok(false);
        }
        self.set_active(Some(id));
        self.print_menu_header(id)?;
        Ok(true)
    }

    pub fn print_menu_header(&mut self, id: MenuId) -> Result<(), SessionError> {
        let menu = self.menus.get(&id).ok_or(SessionError::UnknownMenu(id))?;
        printer::print_menu_header(&mut *self.console, menu)?;
        Ok(())
    }

    pub fn print_command_list(&mut self, id: MenuId) -> Result<(), SessionError> {
        let menu = self.menus.get(&id).ok_or(SessionError::UnknownMenu(id))?;
        printer::print_command_list(&mut *self.console, menu.commands())?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Console helpers for command actions
    // -----------------------------------------------------------------------

    pub fn read_line(&mut self, prompt: &str) -> io::Result<ReadOutcome> {
        input::read_line(&mut *self.console, prompt, None, None)
    }

    pub fn read_line_styled(
        &mut self,
        prompt: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> io::Result<ReadOutcome> {
        input::read_line(&mut *self.console, prompt, foreground, background)
    }

    pub fn read_key(&mut self) -> io::Result<KeyEvent> {
        input::read_key(&mut *self.console)
    }

    pub fn read_permission(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        input::read_permission(&mut *self.console, prompt, default)
    }

    pub fn write(&mut self, text: &str) -> io::Result<()> {
        self.console.write(text)
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.console.write_line(text)
    }

    pub fn write_coloured(&mut self, text: &str, colour: Color) -> io::Result<()> {
        self.console.write_coloured(text, colour)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Register `menu`, linking it under the active menu when there is one.
    fn insert(&mut self, mut menu: Menu) -> MenuId {
        let id = menu.id();
        if let Some(parent) = self.active {
            menu.set_parent(parent);
            if let Some(parent_menu) = self.menus.get_mut(&parent) {
                parent_menu.add_child(id);
            }
        }
        debug!(menu = %id, parent = ?menu.parent_id(), title = menu.title(), "registered menu");
        self.menus.insert(id, menu);
        self.emit(SessionEvent::MenuOpened(id));
        id
    }

    /// Close a menu whose loop ended with an error, if it is still open.
    fn discard_failed(&mut self, id: MenuId) {
        if !self.menus.contains_key(&id) {
            return;
        }
        if let Err(err) = self.close_menu(id) {
            warn!(menu = %id, error = %err, "failed to close menu after error");
        }
    }

    fn dispose_subtree(&mut self, id: MenuId, closed: &mut Vec<MenuId>) {
        let Some(mut menu) = self.menus.remove(&id) else {
            return;
        };
        for child in menu.dispose() {
            self.dispose_subtree(child, closed);
        }
        self.closed.insert(id);
        closed.push(id);
    }

    fn set_active(&mut self, to: Option<MenuId>) {
        let from = self.active;
        if from == to {
            return;
        }
        if let Some(previous) = from.and_then(|id| self.menus.get_mut(&id)) {
            previous.set_state(MenuState::Inactive);
        }
        if let Some(next) = to.and_then(|id| self.menus.get_mut(&id)) {
            next.set_state(MenuState::Active);
        }
        self.active = to;
        debug!(from = ?from, to = ?to, "active menu changed");
        self.emit(SessionEvent::ActiveMenuChanged { from, to });
    }

    /// Drive the active menu until `frame` is gone or the session stops.
    fn run_loop(&mut self, frame: MenuId) -> Result<(), SessionError> {
        while self.running && self.menus.contains_key(&frame) {
            self.take_command()?;
        }
        Ok(())
    }

    fn take_command(&mut self) -> Result<(), SessionError> {
        let Some(active) = self.active else {
            self.running = false;
            return Ok(());
        };
        let menu = self.menus.get(&active).ok_or(SessionError::UnknownMenu(active))?;
        let prompt = menu.prompt().to_string();
        let prompt_colour = menu.prompt_colour();

        self.console.write("\n")?;
        let line = match input::read_line(&mut *self.console, &prompt, Some(prompt_colour), None)? {
            ReadOutcome::Line(line) => line,
            ReadOutcome::Cancelled => {
                // Back onto the blank spacer row so the next prompt redraws in place.
                let (column, row) = self.console.cursor_position()?;
                self.console.set_cursor_position(column, row.saturating_sub(1))?;
                return Ok(());
            }
        };

        let command = self
            .menus
            .get(&active)
            .and_then(|menu| menu.command(&line))
            .cloned();
        let Some(command) = command else {
            debug!(menu = %active, input = %line, "unknown command");
            printer::print_unknown_command(&mut *self.console)?;
            return Ok(());
        };

        debug!(menu = %active, command = command.name(), "executing command");
        match command.execute(self) {
            Ok(result) => {
                info!(
                    command = command.name(),
                    status = ?result.status(),
                    elapsed_ms = result.duration().as_millis() as u64,
                    "command finished"
                );
                if self.statistics {
                    printer::print_command_result(&mut *self.console, &result)?;
                }
                Ok(())
            }
            Err(CommandFailure { result, error }) => {
                warn!(command = command.name(), error = %error, "command failed");
                if self.statistics {
                    printer::print_command_result(&mut *self.console, &result)?;
                }
                Err(SessionError::CommandFailed {
                    command: command.name().to_string(),
                    source: error,
                })
            }
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("menus", &self.menus.keys().collect::<Vec<_>>())
            .field("active", &self.active)
            .field("statistics", &self.statistics)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

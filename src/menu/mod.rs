//! Menus: interactive contexts with a title, a prompt, and a command table.
//!
//! A menu always carries the built-in `exit` and `help` commands. Command
//! names are unique per menu and listed in insertion order.

mod command;

pub use command::{Command, CommandFailure, CommandResult, CommandStatus};

use crate::error::{ActionError, SessionError};
use crate::session::Session;
use crate::tui::settings;
use crossterm::style::Color;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_MENU_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique menu identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(u64);

impl MenuId {
    fn next() -> Self {
        Self(NEXT_MENU_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu-{}", self.0)
    }
}

/// Lifecycle of a menu inside a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    /// Registered but not reading commands.
    Inactive,
    /// The one menu whose commands are being read.
    Active,
    /// Disposed; its command table is empty.
    Closed,
}

/// Defaults applied to menus built by a session (prompt, decoration, colours).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTheme {
    pub prompt: String,
    pub title_decoration: String,
    pub title_colour: Color,
    pub prompt_colour: Color,
    pub decoration_colour: Color,
}

impl Default for MenuTheme {
    fn default() -> Self {
        Self {
            prompt: settings::PROMPT_DEFAULT.to_string(),
            title_decoration: settings::TITLE_DECORATION_DEFAULT.to_string(),
            title_colour: settings::COLOR_TITLE,
            prompt_colour: settings::COLOR_PROMPT,
            decoration_colour: settings::COLOR_TITLE_DECORATION,
        }
    }
}

/// Builds the menu a session is about to open.
///
/// Implemented for ready-made [`Menu`] values and for closures taking the
/// session's [`MenuTheme`].
pub trait MenuFactory {
    fn build(self, theme: &MenuTheme) -> Menu;
}

impl MenuFactory for Menu {
    fn build(self, _theme: &MenuTheme) -> Menu {
        self
    }
}

impl<F> MenuFactory for F
where
    F: FnOnce(&MenuTheme) -> Menu,
{
    fn build(self, theme: &MenuTheme) -> Menu {
        self(theme)
    }
}

#[derive(Debug)]
pub struct Menu {
    id: MenuId,
    parent_id: Option<MenuId>,
    children_ids: Vec<MenuId>,
    title: String,
    prompt: String,
    title_decoration: String,
    title_colour: Color,
    prompt_colour: Color,
    decoration_colour: Color,
    commands: Vec<Rc<Command>>,
    state: MenuState,
}

impl Menu {
    pub fn new(title: impl Into<String>, theme: &MenuTheme) -> Self {
        let id = MenuId::next();
        let mut menu = Self {
            id,
            parent_id: None,
            children_ids: Vec::new(),
            title: title.into(),
            prompt: theme.prompt.clone(),
            title_decoration: theme.title_decoration.clone(),
            title_colour: theme.title_colour,
            prompt_colour: theme.prompt_colour,
            decoration_colour: theme.decoration_colour,
            commands: Vec::new(),
            state: MenuState::Inactive,
        };
        menu.push_command(Command::new(
            settings::COMMAND_EXIT,
            settings::COMMAND_EXIT_DESCRIPTION,
            move |session: &mut Session| {
                session.close_menu(id)?;
                Ok(())
            },
        ));
        menu.push_command(Command::new(
            settings::COMMAND_HELP,
            settings::COMMAND_HELP_DESCRIPTION,
            move |session: &mut Session| {
                session.print_command_list(id)?;
                Ok(())
            },
        ));
        menu
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_title_decoration(mut self, decoration: impl Into<String>) -> Self {
        self.title_decoration = decoration.into();
        self
    }

    pub fn with_title_colour(mut self, colour: Color) -> Self {
        self.title_colour = colour;
        self
    }

    pub fn with_prompt_colour(mut self, colour: Color) -> Self {
        self.prompt_colour = colour;
        self
    }

    pub fn with_decoration_colour(mut self, colour: Color) -> Self {
        self.decoration_colour = colour;
        self
    }

    /// Builder form of [`Menu::add_command`].
    pub fn with_command<F>(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        action: F,
    ) -> Result<Self, SessionError>
    where
        F: Fn(&mut Session) -> Result<(), ActionError> + 'static,
    {
        self.add_command(name, description, action)?;
        Ok(self)
    }

    /// Register a command; names must be unique within the menu.
    pub fn add_command<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        action: F,
    ) -> Result<(), SessionError>
    where
        F: Fn(&mut Session) -> Result<(), ActionError> + 'static,
    {
        let name = name.into();
        if self.command(&name).is_some() {
            return Err(SessionError::DuplicateCommand {
                menu: self.id,
                name,
            });
        }
        self.push_command(Command::new(name, description, action));
        Ok(())
    }

    fn push_command(&mut self, command: Command) {
        self.commands.push(Rc::new(command));
    }

    /// Exact-name lookup; no prefix matching.
    pub fn command(&self, name: &str) -> Option<&Rc<Command>> {
        self.commands.iter().find(|c| c.name() == name)
    }

    pub fn commands(&self) -> &[Rc<Command>] {
        &self.commands
    }

    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name())
    }

    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn parent_id(&self) -> Option<MenuId> {
        self.parent_id
    }

    pub fn children_ids(&self) -> &[MenuId] {
        &self.children_ids
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn title_decoration(&self) -> &str {
        &self.title_decoration
    }

    pub fn title_colour(&self) -> Color {
        self.title_colour
    }

    pub fn prompt_colour(&self) -> Color {
        self.prompt_colour
    }

    pub fn decoration_colour(&self) -> Color {
        self.decoration_colour
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.state == MenuState::Closed
    }

    pub(crate) fn set_state(&mut self, state: MenuState) {
        if self.state != MenuState::Closed {
            self.state = state;
        }
    }

    pub(crate) fn set_parent(&mut self, parent: MenuId) {
        self.parent_id = Some(parent);
    }

    pub(crate) fn add_child(&mut self, child: MenuId) {
        if !self.children_ids.contains(&child) {
            self.children_ids.push(child);
        }
    }

    pub(crate) fn remove_child(&mut self, child: MenuId) {
        self.children_ids.retain(|id| *id != child);
    }

    /// Clear the command table and mark the menu closed.
    ///
    /// Returns the children that still need closing; a second call is a
    /// no-op returning nothing.
    pub(crate) fn dispose(&mut self) -> Vec<MenuId> {
        if self.state == MenuState::Closed {
            return Vec::new();
        }
        self.state = MenuState::Closed;
        self.commands.clear();
        std::mem::take(&mut self.children_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_menu_has_exit_and_help_before_any_add() {
        let menu = Menu::new("Main", &MenuTheme::default());
        let names: Vec<&str> = menu.command_names().collect();
        assert_eq!(names, vec!["exit", "help"]);
        assert_eq!(menu.state(), MenuState::Inactive);
    }

    #[test]
    fn ids_are_unique() {
        let theme = MenuTheme::default();
        let a = Menu::new("a", &theme);
        let b = Menu::new("b", &theme);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn commands_keep_insertion_order() {
        let menu = Menu::new("Main", &MenuTheme::default())
            .with_command("zeta", "last letter", |_| Ok(()))
            .unwrap()
            .with_command("alpha", "first letter", |_| Ok(()))
            .unwrap();
        let names: Vec<&str> = menu.command_names().collect();
        assert_eq!(names, vec!["exit", "help", "zeta", "alpha"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut menu = Menu::new("Main", &MenuTheme::default());
        let err = menu.add_command("exit", "again", |_| Ok(())).unwrap_err();
        assert!(matches!(err, SessionError::DuplicateCommand { ref name, .. } if name == "exit"));
        assert_eq!(menu.commands().len(), 2);
    }

    #[test]
    fn lookup_is_exact() {
        let menu = Menu::new("Main", &MenuTheme::default());
        assert!(menu.command("help").is_some());
        assert!(menu.command("hel").is_none());
        assert!(menu.command("HELP").is_none());
        assert!(menu.command(" help").is_none());
    }

    #[test]
    fn theme_seeds_prompt_and_colours() {
        let theme = MenuTheme {
            prompt: "$ ".into(),
            title_decoration: "** ".into(),
            title_colour: Color::Cyan,
            prompt_colour: Color::Magenta,
            decoration_colour: Color::Blue,
        };
        let menu = Menu::new("Main", &theme).with_prompt_colour(Color::Red);
        assert_eq!(menu.prompt(), "$ ");
        assert_eq!(menu.title_decoration(), "** ");
        assert_eq!(menu.title_colour(), Color::Cyan);
        assert_eq!(menu.prompt_colour(), Color::Red);
        assert_eq!(menu.decoration_colour(), Color::Blue);
    }

    #[test]
    fn dispose_is_idempotent_and_clears_commands() {
        let mut menu = Menu::new("Main", &MenuTheme::default());
        let child = Menu::new("child", &MenuTheme::default()).id();
        menu.add_child(child);
        assert_eq!(menu.dispose(), vec![child]);
        assert!(menu.is_closed());
        assert!(menu.commands().is_empty());
        assert!(menu.dispose().is_empty());
        menu.set_state(MenuState::Active);
        assert!(menu.is_closed());
    }

    #[test]
    fn closure_factory_receives_theme() {
        let theme = MenuTheme {
            prompt: "? ".into(),
            ..MenuTheme::default()
        };
        let menu = (|t: &MenuTheme| Menu::new("built", t)).build(&theme);
        assert_eq!(menu.prompt(), "? ");
        assert_eq!(menu.title(), "built");
    }
}

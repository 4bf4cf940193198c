//! The demo menu tree shown by the `menukit` binary.

use menukit::build_info::startup_metadata_line;
use menukit::error::{ActionError, SessionError};
use menukit::menu::{Menu, MenuTheme};
use menukit::session::Session;

pub(crate) fn root_menu(theme: &MenuTheme) -> Result<Menu, SessionError> {
    Menu::new("menukit demo", theme)
        .with_command("greet", "Say hello", |s| {
            s.write_line("Hello!")?;
            Ok(())
        })?
        .with_command("ask", "Ask for your name (Esc cancels)", |s| {
            let name = s.read_line("What is your name? ")?.completed()?;
            let name = name.trim();
            if name.is_empty() {
                s.write_line("No name given.")?;
            } else {
                s.write_line(&format!("Nice to meet you, {name}."))?;
            }
            Ok(())
        })?
        .with_command("confirm", "Ask a yes/no question", |s| {
            let answer = s.read_permission("Proceed?", false)?;
            s.write_line(if answer { "Proceeding." } else { "Staying put." })?;
            Ok(())
        })?
        .with_command("settings", "Open the settings submenu", |s| {
            let menu = settings_menu(s.theme())?;
            s.open_menu(menu)?;
            Ok(())
        })?
        .with_command("version", "Show build information", |s| {
            s.write_line(&startup_metadata_line())?;
            Ok(())
        })?
        .with_command("fail", "Run a command that always fails", |_| {
            Err(ActionError::failed("this command always fails"))
        })
}

fn settings_menu(theme: &MenuTheme) -> Result<Menu, SessionError> {
    Menu::new("Settings", theme)
        .with_command("toggle-stats", "Turn the result banner on or off", |s| {
            let enabled = !s.statistics_enabled();
            s.set_statistics_enabled(enabled);
            s.write_line(&format!(
                "Statistics {}.",
                if enabled { "enabled" } else { "disabled" }
            ))?;
            Ok(())
        })?
        .with_command("deeper", "Open one more nested menu", |s| {
            let menu = deeper_menu(s.theme())?;
            s.open_menu(menu)?;
            Ok(())
        })
}

fn deeper_menu(theme: &MenuTheme) -> Result<Menu, SessionError> {
    Menu::new("Deeper", theme)
        .with_command("where", "Show how deep this menu is", |s| {
            let depth = menu_depth(s);
            s.write_line(&format!("{depth} menus open, this one is the innermost."))?;
            Ok(())
        })?
        .with_command("home", "Close everything above the root", |s| {
            let Some(root) = root_of_active(s) else {
                return Err(ActionError::failed("no active menu"));
            };
            let children: Vec<_> = s
                .menu(root)
                .map(|menu| menu.children_ids().to_vec())
                .unwrap_or_default();
            for child in children {
                s.close_menu(child)?;
            }
            Ok(())
        })
}

fn menu_depth(session: &Session) -> usize {
    let mut depth = 0;
    let mut cursor = session.active_menu_id();
    while let Some(id) = cursor {
        depth += 1;
        cursor = session.menu(id).and_then(|menu| menu.parent_id());
    }
    depth
}

fn root_of_active(session: &Session) -> Option<menukit::menu::MenuId> {
    let mut current = session.active_menu_id()?;
    while let Some(parent) = session.menu(current).and_then(|menu| menu.parent_id()) {
        current = parent;
    }
    Some(current)
}

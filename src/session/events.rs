//! Lifecycle notifications emitted by a [`Session`](super::Session).

use crate::menu::MenuId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// `start` was called; the root menu is about to open.
    Starting,
    /// The root menu is registered and active.
    Started,
    /// The root menu closed and no further input will be read.
    Stopped,
    MenuOpened(MenuId),
    /// One close request, listing every id it removed (children first).
    MenuClosed(Vec<MenuId>),
    ActiveMenuChanged {
        from: Option<MenuId>,
        to: Option<MenuId>,
    },
}

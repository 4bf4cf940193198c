//! Shared fixtures for unit tests: temp dirs and scripted sessions.

use crate::config::Config;
use crate::console::MemoryConsole;
use crate::menu::{Menu, MenuTheme};
use crate::session::Session;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "menukit-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Session over a scripted console, plus a handle to inspect what it printed.
pub fn scripted_session(input: &str) -> (Session, MemoryConsole) {
    let console = MemoryConsole::with_input(input);
    let session = Session::new(Box::new(console.clone()), &Config::default());
    (session, console)
}

/// Menu with only the built-ins, using the default theme.
pub fn plain_menu(title: &str) -> Menu {
    Menu::new(title, &MenuTheme::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_is_removed_on_drop() {
        let path = {
            let fixture = TestTempDir::new("fixture");
            fs::write(fixture.child("file.txt"), "hello").unwrap();
            assert!(fixture.path().is_dir());
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn scripted_session_shares_the_console() {
        let (mut session, console) = scripted_session("");
        session.write_line("ping").unwrap();
        assert_eq!(console.transcript(), "ping\n");
    }
}

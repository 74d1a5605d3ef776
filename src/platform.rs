//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifiers accepted for the submit shortcut
/// - macOS: CONTROL or SUPER (Cmd key, when the terminal reports it)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL.union(KeyModifiers::SUPER);

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIERS: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

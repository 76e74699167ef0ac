// ABOUTME: Terminal capability detection for image protocol support
// ABOUTME: Maps a capability signal to one protocol using a fixed priority order

use crate::protocol::Protocol;
use crate::signal::CapabilitySignal;
use once_cell::sync::Lazy;
use regex::Regex;

static SIXEL_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bsixel\b").expect("sixel TERM pattern is a valid regex")
});

/// Pick the protocol for this terminal. First matching rule wins.
pub fn detect(signal: &CapabilitySignal) -> Protocol {
    // User override is returned as-is, even when it names nothing we know
    if let Some(forced) = &signal.protocol_override {
        log::debug!("Protocol forced to '{}' by override", forced);
        return Protocol::from_override(forced);
    }

    let (protocol, reason) = if detect_kitty_support(signal) {
        (Protocol::Kitty, "kitty/wezterm environment")
    } else if detect_ghostty(signal) {
        // Kitty graphics has proven more reliable than Ghostty's other paths
        (Protocol::Kitty, "ghostty")
    } else if detect_iterm2_support(signal) {
        (Protocol::Iterm2, "iTerm2-compatible TERM_PROGRAM")
    } else if detect_sixel_support(signal) {
        (Protocol::Sixel, "sixel TERM or SIXEL=1")
    } else if detect_truecolor(signal) {
        (Protocol::Ansi, "truecolor tty")
    } else {
        (Protocol::None, "no matching capability")
    };

    log::debug!(
        "Detected protocol '{}' ({}; TERM_PROGRAM={:?}, TERM={:?})",
        protocol,
        reason,
        signal.term_program,
        signal.term
    );
    protocol
}

fn detect_kitty_support(signal: &CapabilitySignal) -> bool {
    signal.kitty_window_id.is_some()
        || signal.term.contains("xterm-kitty")
        || signal.wezterm_executable.is_some()
}

fn detect_ghostty(signal: &CapabilitySignal) -> bool {
    signal.term_program == "ghostty" && signal.term.contains("ghostty")
}

fn detect_iterm2_support(signal: &CapabilitySignal) -> bool {
    matches!(signal.term_program.as_str(), "iTerm.app" | "WezTerm")
}

fn detect_sixel_support(signal: &CapabilitySignal) -> bool {
    SIXEL_TERM.is_match(&signal.term) || signal.sixel_enabled
}

fn detect_truecolor(signal: &CapabilitySignal) -> bool {
    signal.is_tty && (signal.colorterm.contains("truecolor") || signal.colorterm == "24bit")
}

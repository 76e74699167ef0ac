// ABOUTME: Snapshot of terminal-identifying environment values used for protocol detection
// ABOUTME: Built once at the program boundary so detection stays a pure function

use crate::constants::env as keys;
use std::io::IsTerminal;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySignal {
    /// Explicit protocol override (`TERMIMG_PROTOCOL`)
    pub protocol_override: Option<String>,
    /// Running inside tmux
    pub multiplexer: bool,
    pub kitty_window_id: Option<String>,
    pub wezterm_executable: Option<String>,
    pub term_program: String,
    pub term: String,
    pub colorterm: String,
    /// `SIXEL=1`
    pub sixel_enabled: bool,
    /// stdout is attached to a terminal
    pub is_tty: bool,
}

impl CapabilitySignal {
    /// Read the signal from the process environment and stdout
    pub fn from_env() -> Self {
        Self::from_lookup(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        )
    }

    /// Build a signal from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, is_tty: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            protocol_override: get(keys::PROTOCOL_OVERRIDE),
            multiplexer: get(keys::TMUX).is_some(),
            kitty_window_id: get(keys::KITTY_WINDOW_ID),
            wezterm_executable: get(keys::WEZTERM_EXECUTABLE),
            term_program: get(keys::TERM_PROGRAM).unwrap_or_default(),
            term: get(keys::TERM).unwrap_or_default(),
            colorterm: get(keys::COLORTERM).unwrap_or_default(),
            sixel_enabled: get(keys::SIXEL).as_deref() == Some("1"),
            is_tty,
        }
    }

    /// Same signal with the override replaced, used for CLI flags and config
    pub fn with_override(mut self, protocol: Option<String>) -> Self {
        if let Some(protocol) = protocol.filter(|p| !p.is_empty()) {
            self.protocol_override = Some(protocol);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_reads_every_key() {
        let signal = CapabilitySignal::from_lookup(
            lookup_from(&[
                ("TERMIMG_PROTOCOL", "ansi"),
                ("TMUX", "/tmp/tmux-1000/default,123,0"),
                ("KITTY_WINDOW_ID", "3"),
                ("WEZTERM_EXECUTABLE", "/usr/bin/wezterm-gui"),
                ("TERM_PROGRAM", "WezTerm"),
                ("TERM", "xterm-256color"),
                ("COLORTERM", "truecolor"),
                ("SIXEL", "1"),
            ]),
            true,
        );

        assert_eq!(signal.protocol_override.as_deref(), Some("ansi"));
        assert!(signal.multiplexer);
        assert_eq!(signal.kitty_window_id.as_deref(), Some("3"));
        assert_eq!(
            signal.wezterm_executable.as_deref(),
            Some("/usr/bin/wezterm-gui")
        );
        assert_eq!(signal.term_program, "WezTerm");
        assert_eq!(signal.term, "xterm-256color");
        assert_eq!(signal.colorterm, "truecolor");
        assert!(signal.sixel_enabled);
        assert!(signal.is_tty);
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let signal = CapabilitySignal::from_lookup(
            lookup_from(&[("TERMIMG_PROTOCOL", ""), ("TMUX", ""), ("KITTY_WINDOW_ID", "")]),
            false,
        );

        assert_eq!(signal.protocol_override, None);
        assert!(!signal.multiplexer);
        assert_eq!(signal.kitty_window_id, None);
    }

    #[test]
    fn test_sixel_flag_requires_exactly_one() {
        let signal = CapabilitySignal::from_lookup(lookup_from(&[("SIXEL", "yes")]), false);
        assert!(!signal.sixel_enabled);
    }

    #[test]
    fn test_with_override() {
        let signal = CapabilitySignal::default().with_override(Some("kitty".to_string()));
        assert_eq!(signal.protocol_override.as_deref(), Some("kitty"));

        let signal = signal.with_override(None);
        assert_eq!(signal.protocol_override.as_deref(), Some("kitty"));

        let signal = signal.with_override(Some(String::new()));
        assert_eq!(signal.protocol_override.as_deref(), Some("kitty"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        let original = std::env::var("TERMIMG_PROTOCOL").ok();

        std::env::set_var("TERMIMG_PROTOCOL", "iterm2");
        let signal = CapabilitySignal::from_env();
        assert_eq!(signal.protocol_override.as_deref(), Some("iterm2"));

        if let Some(val) = original {
            std::env::set_var("TERMIMG_PROTOCOL", val);
        } else {
            std::env::remove_var("TERMIMG_PROTOCOL");
        }
    }
}

// ABOUTME: Terminal multiplexer passthrough wrapping for raw graphics escape sequences
// ABOUTME: Doubles ESC bytes and frames the payload in a tmux DCS passthrough block

use crate::constants::{escape::ESC, tmux};
use crate::signal::CapabilitySignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Passthrough {
    /// Sequences go straight to the terminal
    #[default]
    Direct,
    /// Sequences must be smuggled through tmux
    Tmux,
}

impl Passthrough {
    pub fn from_signal(signal: &CapabilitySignal) -> Self {
        if signal.multiplexer {
            Passthrough::Tmux
        } else {
            Passthrough::Direct
        }
    }

    /// Wrap a sequence for delivery. Identity outside a multiplexer.
    pub fn wrap(self, sequence: String) -> String {
        match self {
            Passthrough::Direct => sequence,
            Passthrough::Tmux => {
                let escapes = sequence.matches(ESC).count();
                let mut wrapped = String::with_capacity(
                    sequence.len()
                        + escapes
                        + tmux::PASSTHROUGH_START.len()
                        + tmux::PASSTHROUGH_END.len(),
                );
                wrapped.push_str(tmux::PASSTHROUGH_START);
                for ch in sequence.chars() {
                    if ch == ESC {
                        wrapped.push(ESC);
                    }
                    wrapped.push(ch);
                }
                wrapped.push_str(tmux::PASSTHROUGH_END);
                wrapped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(wrapped: &str) -> &str {
        wrapped
            .strip_prefix(tmux::PASSTHROUGH_START)
            .and_then(|s| s.strip_suffix(tmux::PASSTHROUGH_END))
            .expect("envelope markers present")
    }

    #[test]
    fn test_direct_is_identity() {
        for seq in ["", "plain text", "\x1b_Ga=T;AAAA\x1b\\", "\x1b\x1b\x1b"] {
            assert_eq!(Passthrough::Direct.wrap(seq.to_string()), seq);
        }
    }

    #[test]
    fn test_tmux_wraps_and_doubles_escapes() {
        let seq = "\x1b]1337;File=inline=1:AAAA\x07";
        let wrapped = Passthrough::Tmux.wrap(seq.to_string());

        assert_eq!(
            wrapped,
            "\x1bPtmux;\x1b\x1b\x1b]1337;File=inline=1:AAAA\x07\x1b\\"
        );
    }

    #[test]
    fn test_tmux_escape_count_doubles() {
        let seq = "\x1b_Gm=1;AB\x1b\\\x1b_Gm=0;CD\x1b\\";
        let original = seq.matches('\x1b').count();

        let wrapped = Passthrough::Tmux.wrap(seq.to_string());
        let doubled = inner(&wrapped);

        assert_eq!(doubled.matches('\x1b').count(), original * 2);
        assert_eq!(doubled.replace("\x1b\x1b", "\x1b"), seq);
    }

    #[test]
    fn test_tmux_wraps_empty_sequence() {
        let wrapped = Passthrough::Tmux.wrap(String::new());
        assert_eq!(inner(&wrapped), "");
    }

    #[test]
    fn test_from_signal() {
        let mut signal = CapabilitySignal::default();
        assert_eq!(Passthrough::from_signal(&signal), Passthrough::Direct);

        signal.multiplexer = true;
        assert_eq!(Passthrough::from_signal(&signal), Passthrough::Tmux);
    }
}

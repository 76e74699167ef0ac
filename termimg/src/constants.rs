// ABOUTME: Centralized constants for the termimg library
// ABOUTME: Contains escape sequence framing, chunk sizes, environment keys, and defaults

/// Raw escape sequence building blocks
pub mod escape {
    /// Escape byte
    pub const ESC: char = '\x1b';

    /// Bell, terminates iTerm2 OSC sequences
    pub const BEL: char = '\x07';

    /// String terminator (ESC \)
    pub const ST: &str = "\x1b\\";

    /// SGR reset
    pub const RESET: &str = "\x1b[0m";
}

/// tmux passthrough envelope
pub mod tmux {
    /// Opens a DCS passthrough block, the payload's first ESC follows directly
    pub const PASSTHROUGH_START: &str = "\x1bPtmux;\x1b";

    /// Closes the DCS passthrough block
    pub const PASSTHROUGH_END: &str = "\x1b\\";
}

/// Kitty graphics protocol parameters
pub mod kitty {
    /// Maximum base64 bytes carried by a single APC unit
    pub const CHUNK_SIZE: usize = 4096;

    /// `f=100`: payload is PNG
    pub const FORMAT_PNG: u32 = 100;

    /// `a=T`: transmit and display
    pub const ACTION_TRANSMIT_AND_DISPLAY: &str = "T";
}

/// iTerm2 inline image protocol framing
pub mod iterm2 {
    /// OSC 1337 file transfer prefix
    pub const FILE_PREFIX: &str = "\x1b]1337;File=";
}

/// ANSI half-block renderer
pub mod ansi {
    /// U+2584 LOWER HALF BLOCK
    pub const HALF_BLOCK: char = '\u{2584}';

    /// Columns used when the caller does not pick a width
    pub const DEFAULT_COLUMNS: u32 = 40;

    /// Terminal width assumed when it cannot be queried
    pub const FALLBACK_TERMINAL_COLUMNS: u16 = 80;

    /// Upper bound for auto-sized renders
    pub const MAX_AUTO_COLUMNS: u16 = 120;
}

/// External SIXEL encoder
pub mod sixel {
    /// Binary that turns an image file into a SIXEL stream on stdout
    pub const ENCODER_BINARY: &str = "img2sixel";

    /// Shell used to run the encoder command
    pub const SHELL: &str = "sh";
}

/// Environment variables that make up a capability signal
pub mod env {
    pub const PROTOCOL_OVERRIDE: &str = "TERMIMG_PROTOCOL";
    pub const TMUX: &str = "TMUX";
    pub const KITTY_WINDOW_ID: &str = "KITTY_WINDOW_ID";
    pub const WEZTERM_EXECUTABLE: &str = "WEZTERM_EXECUTABLE";
    pub const TERM_PROGRAM: &str = "TERM_PROGRAM";
    pub const TERM: &str = "TERM";
    pub const COLORTERM: &str = "COLORTERM";
    pub const SIXEL: &str = "SIXEL";
}

/// Prefix of the message returned when no protocol can render the image
pub const UNSUPPORTED_PREFIX: &str = "Image rendering not supported for this terminal: ";

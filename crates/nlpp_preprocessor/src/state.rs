//! The states of the directive state machine

use derive_more::Display;

/// Where the preprocessor currently is within the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum State {
    /// Outside any block. Lines pass through.
    #[default]
    #[display("NORMAL")]
    Normal,
    /// Inside a CONFIG block. Directives declare flags.
    #[display("CONFIG")]
    Config,
    /// Inside a block guarded by a false flag. Lines get commented out.
    #[display("COMMENT")]
    Comment,
    /// Inside a block guarded by a true flag. Lines get uncommented.
    #[display("UNCOMMENT")]
    Uncomment,
    /// After the sentinel. Terminal.
    #[display("END_OF_CODE")]
    EndOfCode,
}

impl State {
    /// Whether no further transition can leave this state
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::EndOfCode)
    }

    /// The block name if this state is an open block that `END` closes
    #[must_use]
    pub const fn open_block(self) -> Option<&'static str> {
        match self {
            Self::Config => Some("CONFIG"),
            Self::Comment => Some("COMMENT"),
            Self::Uncomment => Some("UNCOMMENT"),
            Self::Normal | Self::EndOfCode => None,
        }
    }
}

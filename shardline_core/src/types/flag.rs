use bitflags::bitflags;

bitflags! {
    /// Rendering policy handed down the statement tree during restoration.
    ///
    /// Nodes read the bits they care about and forward the whole set to
    /// their children untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct RestoreFlag: u32 {
        /// Wrap table and column identifiers in backquotes.
        const NAME_BACK_QUOTES = 0b0000_0001;
        /// Quote string literals with `'`.
        const STRING_SINGLE_QUOTES = 0b0000_0010;
        /// Quote string literals with `"`.
        const STRING_DOUBLE_QUOTES = 0b0000_0100;
        /// Escape embedded quotes with a backslash instead of doubling them.
        const STRING_ESCAPE_BACKSLASH = 0b0000_1000;
        /// Render literal values as `?` without recording a placeholder.
        const MASK_LITERALS = 0b0001_0000;
    }
}

impl RestoreFlag {
    /// Flags used when a statement is sent to a backend.
    pub const DEFAULT: RestoreFlag =
        RestoreFlag::NAME_BACK_QUOTES.union(RestoreFlag::STRING_SINGLE_QUOTES);

    /// Quote character for string literals. Single quotes win when both
    /// quote flags are present.
    pub fn string_quote(&self) -> char {
        if !self.contains(RestoreFlag::STRING_SINGLE_QUOTES)
            && self.contains(RestoreFlag::STRING_DOUBLE_QUOTES)
        {
            '"'
        } else {
            '\''
        }
    }
}

impl Default for RestoreFlag {
    fn default() -> Self {
        RestoreFlag::DEFAULT
    }
}

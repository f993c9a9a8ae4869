//! Setting keys owned by the ReactionPin module

/// Key of a process-wide setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettingKey(&'static str);

impl SettingKey {
    /// Role whose holders may not self-pin (identifier, default none)
    pub const MUTE_ROLE: Self = Self("mute_role");
    /// Whether the platform's pin announcement is kept (boolean, default true)
    pub const PIN_MESSAGE: Self = Self("reactionpin_pin_message");

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for SettingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

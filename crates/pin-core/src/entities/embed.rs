//! Embed - the rich message body used for replies and error notices

use serde::{Deserialize, Serialize};

/// Rich message body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// RGB colour as an integer (`0xRRGGBB`)
    #[serde(rename = "color")]
    pub colour: u32,
}

impl Embed {
    /// Colour of the ReactionPin module
    pub const COLOUR_REACTIONPIN: u32 = 0x00BC_D4;
    /// Colour for error notices and empty listings
    pub const COLOUR_ERROR: u32 = 0xED_4245;

    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            colour,
        }
    }

    /// Error notice without a title
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: None,
            description: Some(description.into()),
            colour: Self::COLOUR_ERROR,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_colour(mut self, colour: u32) -> Self {
        self.colour = colour;
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.colour == Self::COLOUR_ERROR
    }
}

use serde::{Deserialize, Serialize};

/// A category of feedback the user can file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedbackKind {
    /// Something is broken or behaving unexpectedly.
    Bug,
    /// A suggestion or feature request.
    Idea,
    /// Anything that fits neither of the above.
    Other,
}

impl FeedbackKind {
    /// Every kind, in the order the picker presents them.
    pub const ALL: [FeedbackKind; 3] = [Self::Bug, Self::Idea, Self::Other];

    /// Identifier sent to the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::Idea => "IDEA",
            Self::Other => "OTHER",
        }
    }

    /// Title shown in the picker and the form header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Bug => "Problem",
            Self::Idea => "Idea",
            Self::Other => "Other",
        }
    }

    /// Embedded banner image for this kind.
    pub fn image_bytes(self) -> &'static [u8] {
        match self {
            Self::Bug => include_bytes!("../../assets/bug.png"),
            Self::Idea => include_bytes!("../../assets/idea.png"),
            Self::Other => include_bytes!("../../assets/other.png"),
        }
    }

    /// Hint text shown in the empty comment box.
    pub fn comment_hint(self) -> &'static str {
        match self {
            Self::Bug => {
                "Something not working well? We want to fix it. Tell us in detail what is happening."
            }
            Self::Idea => "Have an idea to improve the app? Tell us about it.",
            Self::Other => "We want to hear you. What would you like to tell us?",
        }
    }
}

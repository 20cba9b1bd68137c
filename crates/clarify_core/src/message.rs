/// Who produced a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
    System,
    Error,
}

/// One entry in the append-only chat log. Immutable once appended; index
/// order is chronological and is the only ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Error,
            content: content.into(),
        }
    }
}

/// Bot prompt appended when a question needs a page reference.
pub const PAGE_PROMPT: &str =
    "Your question seems to refer to an image. Please tell me the page number (for example \"page 12\").";

/// Bot prompt repeated when a reply contains no usable page number.
pub const PAGE_REPROMPT: &str =
    "I could not find a page number in that reply. Answer with just the number, or \"page N\".";

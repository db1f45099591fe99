use serde::{Deserialize, Serialize};

use super::context::ConversationContext;

/// Fixed framing sent as the first message of every prompt.
const SYSTEM_FRAMING: &str = "You are a professional interviewer conducting a spoken mock \
interview. Ask exactly one question per turn. Keep every reply to one or two short \
sentences, because your words are read out loud over a voice-only interface.";

/// Final instruction appended when the session ends.
const SUMMARY_REQUEST: &str = "The interview is over. Write a strict assessment of the \
candidate, skill by skill, citing their answers. Finish with an overall score as a \
percentage and a clear pass or fail verdict.";

/// Role tag in the chat wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message sent to the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Render the conversation as the ordered message list the model expects.
///
/// Structure is fixed: system framing, then the interviewer instructions as a
/// user message, then one assistant/user pair per completed turn. A question
/// without a response at the same index is not part of the history yet.
/// Pure function of the context: the same state always yields the same list.
pub fn conversation_messages(context: &ConversationContext) -> Vec<ChatMessage> {
    let mut messages = vec![
        ChatMessage::system(SYSTEM_FRAMING),
        ChatMessage::user(context.instructions()),
    ];

    for (question, response) in context.completed_turns() {
        messages.push(ChatMessage::assistant(question.clone()));
        messages.push(ChatMessage::user(response.clone()));
    }

    messages
}

/// Conversation history plus the end-of-session summary request.
pub fn summary_messages(context: &ConversationContext) -> Vec<ChatMessage> {
    let mut messages = conversation_messages(context);
    messages.push(ChatMessage::user(SUMMARY_REQUEST));
    messages
}

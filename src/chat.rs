//! Chat simulation: a message log with a single deferred canned reply.
//!
//! The shell's assistant is a placeholder, not an inference backend. A
//! submission records the user message and arms one pending reply; while it
//! is pending, further submissions are rejected (a busy flag, not a queue).
//! Delivery is an explicit step rather than a timer so callers decide when
//! the "generation" finishes.

use crate::error::WorkbenchError;
use crate::types::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Session-scoped conversation state.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
    pending: Option<String>,
}

impl ChatLog {
    pub fn new() -> Self {
        ChatLog::default()
    }

    /// Transcript in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a reply is armed but not yet delivered.
    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a user message and arm the canned reply.
    ///
    /// Rejected when empty (after trimming) or while a reply is already
    /// pending; the transcript is untouched in both cases.
    pub fn submit(&mut self, text: &str) -> Result<(), WorkbenchError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(WorkbenchError::EmptyMessage);
        }
        if self.pending.is_some() {
            warn!("chat submission rejected: reply still pending");
            return Err(WorkbenchError::ReplyPending);
        }
        let reply = canned_reply(trimmed);
        self.push(Role::User, trimmed.to_string());
        self.pending = Some(reply);
        debug!(messages = self.messages.len(), "chat message submitted");
        Ok(())
    }

    /// Deliver the pending reply into the transcript, if one is armed.
    /// Returns the delivered message.
    pub fn deliver_pending(&mut self) -> Option<&ChatMessage> {
        let reply = self.pending.take()?;
        self.push(Role::Assistant, reply);
        debug!("assistant reply delivered");
        self.messages.last()
    }

    fn push(&mut self, role: Role, content: String) {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
    }
}

/// Placeholder assistant response, phrased after the request.
fn canned_reply(request: &str) -> String {
    let verb = if request.to_lowercase().contains("create") {
        "create"
    } else {
        "update"
    };
    format!(
        "I'll help you with that! Let me {} the code for you. \
         I'm generating the necessary files and implementing the \
         functionality you requested.",
        verb
    )
}

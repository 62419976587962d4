//! Outbound chat messages
//!
//! Commands and the dispatcher talk to chat through a `ChatSender`, a
//! fire-and-forget handle over an unbounded queue. The transport end of
//! the queue (the IRC client) is drained by the binary; in tests the
//! receiver doubles as a capture of everything the pipeline said.

use tokio::sync::mpsc;
use tracing::warn;

/// One chat line waiting to be delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel: String,
    pub text: String,
}

/// Sending half of the outbound chat queue
#[derive(Debug, Clone)]
pub struct ChatSender {
    tx: mpsc::UnboundedSender<OutboundMessage>,
}

impl ChatSender {
    /// Create a sender plus the receiver the transport drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<OutboundMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a chat line; never blocks and never fails into the caller
    pub fn say(&self, channel: &str, text: impl Into<String>) {
        let message = OutboundMessage {
            channel: channel.to_string(),
            text: text.into(),
        };
        if self.tx.send(message).is_err() {
            warn!("Chat transport is gone, dropping outbound message");
        }
    }

    /// Queue a reply addressed to a user
    pub fn reply(&self, channel: &str, login: &str, text: impl AsRef<str>) {
        self.say(channel, format!("@{}, {}", login, text.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_say_queues_message() {
        let (chat, mut rx) = ChatSender::channel();
        chat.say("streamer", "hello chat");

        let message = rx.recv().await.unwrap();
        assert_eq!(message.channel, "streamer");
        assert_eq!(message.text, "hello chat");
    }

    #[tokio::test]
    async fn test_reply_addresses_the_user() {
        let (chat, mut rx) = ChatSender::channel();
        chat.reply("streamer", "viewer", "you are on cooldown");

        let message = rx.recv().await.unwrap();
        assert_eq!(message.text, "@viewer, you are on cooldown");
    }

    #[test]
    fn test_say_with_closed_receiver_does_not_panic() {
        let (chat, rx) = ChatSender::channel();
        drop(rx);
        chat.say("streamer", "nobody is listening");
    }
}

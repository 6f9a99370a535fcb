/*!
 * User-facing notifications.
 *
 * The lookup service reports remote and extraction failures as short
 * messages. Delivery is fire-and-forget.
 */

use log::warn;
use tokio::sync::mpsc;

/// Receiver of user-facing status messages
pub trait NotificationSink: Send + Sync {
    /// Deliver one message
    fn notify(&self, message: &str);
}

/// Sink that writes messages to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Sink that forwards messages to a channel, e.g. for a UI task
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelSink {
    /// Create a sink and the receiver its messages arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, message: &str) {
        // Nobody listening is fine
        let _ = self.sender.send(message.to_string());
    }
}

use thiserror::Error;
use tokio::sync::mpsc;

use super::types::DashboardMessage;

/// Message queue buffer size
const QUEUE_SIZE: usize = 1000;

/// The consumer went away; the producer should stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message queue closed")]
pub struct QueueClosed;

/// Creates a new message queue channel pair
pub fn create_message_queue() -> (MessageSender, MessageReceiver) {
    let (tx, rx) = mpsc::channel(QUEUE_SIZE);
    (MessageSender(tx), MessageReceiver(rx))
}

/// Producer side, held by the file watcher thread or the demo task
#[derive(Clone)]
pub struct MessageSender(mpsc::Sender<DashboardMessage>);

impl MessageSender {
    /// Queue a message from async code, waiting while the queue is full
    pub async fn send(&self, message: DashboardMessage) -> Result<(), QueueClosed> {
        self.0.send(message).await.map_err(closed)
    }

    /// Queue a message from a plain thread
    pub fn blocking_send(&self, message: DashboardMessage) -> Result<(), QueueClosed> {
        self.0.blocking_send(message).map_err(closed)
    }
}

fn closed(err: mpsc::error::SendError<DashboardMessage>) -> QueueClosed {
    tracing::debug!(event = err.0.event_name(), "queue closed, message dropped");
    QueueClosed
}

/// Consumer side, drained by the app loop
pub struct MessageReceiver(mpsc::Receiver<DashboardMessage>);

impl MessageReceiver {
    pub async fn recv(&mut self) -> Option<DashboardMessage> {
        self.0.recv().await
    }

    /// Take up to `limit` queued messages without waiting, oldest first.
    ///
    /// Anything beyond `limit` stays queued for the next call so a large
    /// backlog cannot hold up a frame.
    pub fn drain(&mut self, limit: usize) -> Vec<DashboardMessage> {
        let mut messages = Vec::new();
        while messages.len() < limit {
            match self.0.try_recv() {
                Ok(message) => messages.push(message),
                Err(_) => break,
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_queue_preserves_order() {
        let (tx, mut rx) = create_message_queue();
        tx.send(DashboardMessage::WinProbability(0.4)).await.unwrap();
        tx.send(DashboardMessage::ChartReset).await.unwrap();

        assert_eq!(rx.recv().await, Some(DashboardMessage::WinProbability(0.4)));
        assert_eq!(rx.drain(10), vec![DashboardMessage::ChartReset]);
        assert!(rx.drain(10).is_empty());
    }

    #[tokio::test]
    async fn test_drain_respects_limit() {
        let (tx, mut rx) = create_message_queue();
        for i in 0..5 {
            tx.send(DashboardMessage::WinProbability(i as f64 / 10.0)).await.unwrap();
        }

        let first = rx.drain(3);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0], DashboardMessage::WinProbability(0.0));
        assert_eq!(
            rx.drain(3),
            vec![
                DashboardMessage::WinProbability(0.3),
                DashboardMessage::WinProbability(0.4)
            ]
        );
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        let (tx, rx) = create_message_queue();
        drop(rx);
        assert_eq!(tx.send(DashboardMessage::ChartReset).await, Err(QueueClosed));
    }
}

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::debug;

use crate::modules::portfolio::application::domain::entities::ContentTable;
use crate::modules::portfolio::application::ports::outgoing::{
    ChangeEvent, ChangeFeed, ChangeNotice, ChangeSubscription,
};

const DEFAULT_CAPACITY: usize = 256;

/// In-process change feed. Every subscriber gets its own receiver, so a slow
/// subscriber only ever loses its own notices.
#[derive(Clone)]
pub struct BroadcastChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl BroadcastChangeFeed {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFeed for BroadcastChangeFeed {
    fn publish(&self, event: ChangeEvent) {
        debug!(
            "change feed: {} {:?} {}",
            event.table, event.kind, event.record_id
        );

        // Err only means nobody is listening right now.
        let _ = self.sender.send(event);
    }

    fn subscribe(&self, table: Option<ContentTable>) -> Box<dyn ChangeSubscription> {
        Box::new(BroadcastSubscription {
            table,
            receiver: self.sender.subscribe(),
        })
    }
}

struct BroadcastSubscription {
    table: Option<ContentTable>,
    receiver: broadcast::Receiver<ChangeEvent>,
}

#[async_trait]
impl ChangeSubscription for BroadcastSubscription {
    async fn next(&mut self) -> Option<ChangeNotice> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => match self.table {
                    Some(table) if table != event.table => continue,
                    _ => return Some(ChangeNotice::Changed(event)),
                },
                Err(RecvError::Lagged(missed)) => return Some(ChangeNotice::Missed(missed)),
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

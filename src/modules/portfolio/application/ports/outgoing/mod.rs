pub mod change_feed;
pub mod content_store;

pub use change_feed::{ChangeEvent, ChangeFeed, ChangeKind, ChangeNotice, ChangeSubscription};
pub use content_store::{ContentStore, ContentStoreError, ContentStores, SharedStore, Visibility};

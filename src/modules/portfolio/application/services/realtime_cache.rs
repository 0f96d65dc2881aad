use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::portfolio_facade::PortfolioFacade;
use crate::modules::portfolio::application::domain::entities::{
    ContentTable, Experience, Project, SocialLink,
};
use crate::modules::portfolio::application::ports::outgoing::{ChangeFeed, ChangeNotice};
use crate::shared::read_outcome::ReadOutcome;

/// Tables whose collections the cache keeps in memory.
pub const CACHED_TABLES: [ContentTable; 3] = [
    ContentTable::Projects,
    ContentTable::Experiences,
    ContentTable::SocialLinks,
];

/// `None` marks a collection that has never loaded successfully.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RealtimeSnapshot {
    pub projects: Option<Vec<Project>>,
    pub experience: Option<Vec<Experience>>,
    pub social_links: Option<Vec<SocialLink>>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

/// Keeps projects, experience and social links in memory and replaces a
/// whole collection whenever the change feed reports a write to its table.
///
/// Only the subscription tasks and `refresh` write the snapshot. A refresh
/// that fails leaves the previous collection in place.
pub struct RealtimeCache {
    facade: Arc<PortfolioFacade>,
    feed: Arc<dyn ChangeFeed>,
    snapshot: Arc<RwLock<RealtimeSnapshot>>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
    started: AtomicBool,
}

impl RealtimeCache {
    pub fn new(facade: Arc<PortfolioFacade>, feed: Arc<dyn ChangeFeed>) -> Self {
        Self {
            facade,
            feed,
            snapshot: Arc::new(RwLock::new(RealtimeSnapshot::default())),
            tasks: Mutex::new(Vec::new()),
            started: AtomicBool::new(false),
        }
    }

    /// Loads every cached collection, then subscribes once per table.
    /// Calling it again is a no-op.
    pub async fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            debug!("realtime cache already started");
            return;
        }

        // Subscribe before the initial load so no write slips between them.
        let subscriptions: Vec<_> = CACHED_TABLES
            .iter()
            .map(|table| (*table, self.feed.subscribe(Some(*table))))
            .collect();
        let mut about_changes = self.feed.subscribe(Some(ContentTable::AboutSections));

        for table in CACHED_TABLES {
            refresh_table(&self.facade, &self.snapshot, table).await;
        }

        let mut handles = Vec::with_capacity(CACHED_TABLES.len() + 1);

        for (table, mut subscription) in subscriptions {
            let facade = self.facade.clone();
            let snapshot = self.snapshot.clone();

            handles.push(tokio::spawn(async move {
                while let Some(notice) = subscription.next().await {
                    match notice {
                        ChangeNotice::Changed(event) => {
                            debug!("{} {:?} {}", event.table, event.kind, event.record_id);
                        }
                        ChangeNotice::Missed(count) => {
                            warn!("realtime cache missed {} notices for {}", count, table);
                        }
                    }
                    refresh_table(&facade, &snapshot, table).await;
                }
                debug!("change feed closed for {}", table);
            }));
        }

        let facade = self.facade.clone();
        handles.push(tokio::spawn(async move {
            while about_changes.next().await.is_some() {
                facade.invalidate_about().await;
            }
        }));

        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.extend(handles);
        }

        info!(
            "realtime cache started with {} subscriptions",
            CACHED_TABLES.len() + 1
        );
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Re-fetches one collection. Tables outside the cache are ignored.
    pub async fn refresh(&self, table: ContentTable) {
        refresh_table(&self.facade, &self.snapshot, table).await;
    }

    pub async fn snapshot(&self) -> RealtimeSnapshot {
        self.snapshot.read().await.clone()
    }

    pub async fn projects(&self) -> Vec<Project> {
        self.snapshot.read().await.projects.clone().unwrap_or_default()
    }

    pub async fn experience(&self) -> Vec<Experience> {
        self.snapshot.read().await.experience.clone().unwrap_or_default()
    }

    pub async fn social_links(&self) -> Vec<SocialLink> {
        self.snapshot.read().await.social_links.clone().unwrap_or_default()
    }

    // Each reader falls through to the store until its own collection has loaded.

    pub async fn read_projects(&self) -> ReadOutcome<Vec<Project>> {
        let held = self.snapshot.read().await.projects.clone();
        match held {
            Some(items) => ReadOutcome::from_collection(items),
            None => self.facade.get_projects().await,
        }
    }

    pub async fn read_experience(&self) -> ReadOutcome<Vec<Experience>> {
        let held = self.snapshot.read().await.experience.clone();
        match held {
            Some(items) => ReadOutcome::from_collection(items),
            None => self.facade.get_experience().await,
        }
    }

    pub async fn read_social_links(&self) -> ReadOutcome<Vec<SocialLink>> {
        let held = self.snapshot.read().await.social_links.clone();
        match held {
            Some(items) => ReadOutcome::from_collection(items),
            None => self.facade.get_social_links().await,
        }
    }

    /// Aborts every subscription task. The snapshot stays readable.
    pub fn shutdown(&self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for handle in tasks.drain(..) {
                handle.abort();
            }
        }
        info!("realtime cache stopped");
    }
}

impl Drop for RealtimeCache {
    fn drop(&mut self) {
        if let Ok(mut tasks) = self.tasks.lock() {
            for handle in tasks.drain(..) {
                handle.abort();
            }
        }
    }
}

async fn refresh_table(
    facade: &PortfolioFacade,
    snapshot: &RwLock<RealtimeSnapshot>,
    table: ContentTable,
) {
    match table {
        ContentTable::Projects => {
            if let Some(items) = settle(facade.get_projects().await, table) {
                let mut state = snapshot.write().await;
                state.projects = Some(items);
                state.refreshed_at = Some(Utc::now());
            }
        }
        ContentTable::Experiences => {
            if let Some(items) = settle(facade.get_experience().await, table) {
                let mut state = snapshot.write().await;
                state.experience = Some(items);
                state.refreshed_at = Some(Utc::now());
            }
        }
        ContentTable::SocialLinks => {
            if let Some(items) = settle(facade.get_social_links().await, table) {
                let mut state = snapshot.write().await;
                state.social_links = Some(items);
                state.refreshed_at = Some(Utc::now());
            }
        }
        other => debug!("{} is not held by the realtime cache", other),
    }
}

/// `None` keeps the previous collection.
fn settle<T>(outcome: ReadOutcome<Vec<T>>, table: ContentTable) -> Option<Vec<T>> {
    match outcome {
        ReadOutcome::Loaded(items) => Some(items),
        ReadOutcome::Empty => Some(Vec::new()),
        ReadOutcome::Failed(e) => {
            warn!("keeping previous {} after failed refresh: {}", table, e);
            None
        }
    }
}

use std::sync::Arc;

use super::ports::outgoing::ChangeFeed;
use super::services::{PortfolioFacade, RealtimeCache, SitePages};

/// Everything the public read side needs, shared through `AppState`.
#[derive(Clone)]
pub struct PortfolioServices {
    pub facade: Arc<PortfolioFacade>,
    pub realtime: Arc<RealtimeCache>,
    pub pages: Arc<SitePages>,
    pub feed: Arc<dyn ChangeFeed>,
}

impl PortfolioServices {
    pub fn new(facade: Arc<PortfolioFacade>, feed: Arc<dyn ChangeFeed>) -> Self {
        let realtime = Arc::new(RealtimeCache::new(facade.clone(), feed.clone()));
        let pages = Arc::new(SitePages::new(facade.clone(), realtime.clone()));

        Self {
            facade,
            realtime,
            pages,
            feed,
        }
    }
}

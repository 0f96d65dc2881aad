pub mod portfolio_facade;
pub mod presentation;
pub mod realtime_cache;
pub mod site_pages;
pub mod ttl_cache;

pub use portfolio_facade::{PortfolioFacade, DEFAULT_ABOUT_CACHE_TTL};
pub use realtime_cache::{RealtimeCache, RealtimeSnapshot};
pub use site_pages::{PageBundle, SitePages};
pub use ttl_cache::TtlCache;

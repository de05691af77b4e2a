//! Cache Module
//!
//! Size-bounded in-memory cache with lazy TTL expiry and LRU eviction.

mod clock;
mod entry;
mod lru;
mod shared;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use shared::SharedCache;
pub use store::TtlLruCache;

use crate::models::WeatherRecord;

/// Cache of weather records keyed by city name.
pub type WeatherCache = SharedCache<WeatherRecord>;

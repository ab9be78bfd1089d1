mod cache_store;
mod clock;
mod observation_store;

pub use cache_store::ICacheStore;
pub use clock::{Clock, SystemClock};
pub use observation_store::IObservationStore;

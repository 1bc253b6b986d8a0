mod config;
mod criteria;
mod emitter;
mod error;
mod event;
mod projection;
mod store;
mod user;
pub mod validation;

#[cfg(feature = "http")]
pub mod http;

pub use config::{ConfigError, HttpConfig, ADDR_VAR, DEFAULT_ADDR};
pub use criteria::{Criteria, Filter, UnknownCriteria};
#[cfg(feature = "emitter")]
pub use emitter::LocalEmitterSink;
pub use emitter::{EventSink, NoopSink, QueueSink};
pub use error::{ErrorKind, StoreError, UniqueField};
pub use event::{DomainEvent, USER_ADD, USER_DELETE, USER_UPDATE};
pub use projection::FilterableProjection;
pub use store::UserStore;
pub use user::UserRecord;
pub use validation::ValidationError;

//! Client-side data access: typed requests, a session cache for reads and
//! the contact form mutation.

mod cache;
mod error;
mod http;
mod mutation;

pub use cache::{CachedValue, Query, QueryCache, QueryKey, QueryState};
pub use error::ClientError;
pub use http::{PortfolioClient, PortfolioData};
pub use mutation::MessageMutation;

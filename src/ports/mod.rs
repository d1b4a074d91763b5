//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Key-value persistence of game sessions
//! - `WordSource` - Random target words by length

mod session_store;
mod word_source;

pub use session_store::{SessionStore, StoreError};
pub use word_source::{WordSource, WordSourceError};

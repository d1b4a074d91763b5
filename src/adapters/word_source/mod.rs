//! Word Source Adapters
//!
//! Implementations of the WordSource port.
//!
//! - **HttpWordSource** - Remote random-word API via `reqwest`
//! - **FixedWordSource** - Random picks from a configured or built-in list

mod fixed;
mod http;

pub use fixed::FixedWordSource;
pub use http::HttpWordSource;

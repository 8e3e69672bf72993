//! The feed state store.
//!
//! ```text
//! Intent → FeedStore action (may await the API) → Mutation → reduce → FeedState
//!                                                               └→ Effects (tab writes)
//! ```
//!
//! - [`state`] - `FeedState` and the preview overlay types
//! - [`intent`] - Actions callers dispatch
//! - [`mutation`] - Pure transitions and the effects they request
//! - [`reducer`] - The pure `reduce` function
//! - [`feed_store`] - `FeedStore`, which owns state and runs effects

mod feed_store;
mod intent;
mod mutation;
mod reducer;
mod state;

pub use feed_store::{FeedStore, ListOutcome, ListTicket};
pub use intent::Intent;
pub use mutation::{Effect, Mutation, TabSet, Transition};
pub use reducer::reduce;
pub use state::{FeedState, PreviewImage, PreviewPatch, PreviewState};

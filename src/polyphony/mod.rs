//! Polyphony-based clip curation.
//!
//! Soundscape generators declare the maximum number of simultaneously
//! audible events per clip. This module discards clips whose declared
//! polyphony reaches a caller-specified budget, removing every file that
//! belongs to the clip, and can record a manifest of the source material
//! behind the surviving clips.

mod filter;
mod store;

pub use filter::{FilterOptions, FilterReport, filter_polyphony};
pub use store::{ClipStore, FsClipStore};

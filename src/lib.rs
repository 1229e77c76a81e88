#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions
)]

//! # Notewrite
//!
//! Writes one bundled knowledge-base note to its place in an Obsidian vault.
//!
//! The note text and its destination are compiled in. Running the binary
//! creates (or overwrites) that single file and prints where it went.
//!
//! ## Modules
//!
//! - [`note`]: The compiled-in note and its destination
//! - [`writer`]: Create/truncate the destination and write the note

pub mod note;
pub mod writer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::note::{NOTE_CONTENT, NOTE_PATH, Note};
    pub use crate::writer::{WriteError, Written, write_note};
}

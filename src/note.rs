//! The bundled note and where it goes.

use std::path::Path;

/// Note body, embedded verbatim at compile time.
pub const NOTE_CONTENT: &str = include_str!("../assets/note.md");

/// Vault location of the bundled note.
pub const NOTE_PATH: &str = "C:/dev/obsidian-alexdonega/Atlas/Conteúdos/Video Youtube/O Bizarro Plugin da Anthropic Que Todo Dev Esta Perdendo - Better Stack.md";

/// A payload paired with the file it should be written to.
///
/// The content is opaque text; nothing here parses or validates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note<'a> {
    content: &'a str,
    destination: &'a Path,
}

impl Note<'static> {
    /// The note compiled into this binary.
    pub fn bundled() -> Self {
        Self {
            content: NOTE_CONTENT,
            destination: Path::new(NOTE_PATH),
        }
    }
}

impl<'a> Note<'a> {
    /// Pair arbitrary content with a destination.
    pub const fn new(content: &'a str, destination: &'a Path) -> Self {
        Self {
            content,
            destination,
        }
    }

    /// Text written to the destination, byte for byte.
    pub const fn content(&self) -> &'a str {
        self.content
    }

    /// File the content is written to.
    pub const fn destination(&self) -> &'a Path {
        self.destination
    }
}

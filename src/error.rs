use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures while loading a level or glyph configuration. All of them are
/// fatal: the game never starts without both resources.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    EmptyLevel,
    MissingPlayer,
    DuplicatePlayer { first: (usize, usize), second: (usize, usize) },
    Config { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::EmptyLevel => write!(f, "level has no rows"),
            Self::MissingPlayer => write!(f, "level has no player spawn 'U'"),
            Self::DuplicatePlayer { first, second } => write!(
                f,
                "level has more than one player spawn: {first:?} and {second:?}"
            ),
            Self::Config { path, source } => {
                write!(f, "malformed glyph config {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}

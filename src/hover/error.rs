use thiserror::Error;

/// Errors a host can report while looking up hover targets
///
/// None of these reach the player; the resolver treats every one of them
/// as "nothing hovered".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The surface for the requested context is not on screen
    #[error("no active {0} surface")]
    MissingSurface(&'static str),

    /// The surface exists but its hover slot could not be read
    #[error("hover target unavailable: {0}")]
    Unavailable(String),
}

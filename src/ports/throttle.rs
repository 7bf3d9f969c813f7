//! Rate-limiter port for the server's move delay.

/// Port for the pause the server demands between moves.
///
/// The game server rate-limits move submissions, so the learning loop pauses
/// after every move attempt, successful or not. Injecting the pause as a
/// collaborator lets tests substitute a no-op instead of sleeping in real
/// time.
pub trait MoveThrottle: Send {
    /// Block until the next move may be submitted.
    fn pause(&self);
}

use std::borrow::Cow;

/// Provider identifier - mostly static constants
pub type ProviderId = Cow<'static, str>;

/// Canonical team id (1..=30, the Ball Don't Lie numbering)
pub type TeamId = i64;

/// Player id as issued by whichever provider returned the player
pub type PlayerId = i64;

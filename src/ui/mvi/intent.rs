/// Marker trait for intents: user actions (ADD, REMOVE, RESTART) and
/// system events (a fetch outcome).
pub trait Intent: Send + 'static {}

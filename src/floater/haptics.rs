//! Haptic feedback hook

/// Host hook for the buzz that confirms a long-press commit
pub trait Haptics {
    fn long_press(&mut self);
}

/// Desktop hosts have no vibration motor; the commit is only logged
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn long_press(&mut self) {
        tracing::debug!("haptic feedback: long press");
    }
}

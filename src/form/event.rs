/// Notifications fired synchronously after a field transition completes.
///
/// Fields queue events as operations run; callers drain the queue with
/// `FieldState::take_events` after driving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    TextChanged,
    FocusGained,
    FocusLost,
}

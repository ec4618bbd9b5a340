use crate::entities::ActivityEvent;

/// Downstream delivery of freshly recorded activities (feed push, digest,
/// webhook). Implementations must not fail the recording: delivery is
/// strictly after the fact.
pub trait NotificationGateway {
    fn activity_recorded(&self, event: &ActivityEvent, message: &str);
}

use tasktrail_core::{entities::ActivityEvent, gateways::notify::NotificationGateway};

/// Forwards recorded activities to the log. Stands in for a real delivery
/// channel (feed push, digest mails) that is not part of this binary.
#[derive(Debug, Default)]
pub struct LogNotifyGw;

impl NotificationGateway for LogNotifyGw {
    fn activity_recorded(&self, event: &ActivityEvent, message: &str) {
        log::info!("[{}] {message}", event.board_id);
    }
}

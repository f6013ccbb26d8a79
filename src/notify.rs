//! Transient messages for the user (the "toasts" of a user interface)

/// A sink for user-facing messages.
///
/// Notifications are fire-and-forget: implementors must not fail, and nothing is returned to the caller
pub trait Notifier {
    fn notify_success(&mut self, message: &str);
    fn notify_error(&mut self, message: &str);
}


/// Forwards notifications to the `log` facade
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&mut self, message: &str) {
        log::info!("{}", message);
    }

    fn notify_error(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}


/// Drops every notification
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify_success(&mut self, _message: &str) {}
    fn notify_error(&mut self, _message: &str) {}
}


#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(msg) => msg.as_str(),
            Notification::Error(msg) => msg.as_str(),
        }
    }

    pub fn is_error(&self) -> bool {
        match self {
            Notification::Error(_) => true,
            _ => false,
        }
    }
}

/// Keeps notifications in a queue, so that a user interface can display (and [`drain`](Recorder::drain)) them later
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    received: Vec<Notification>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first
    pub fn received(&self) -> &[Notification] {
        &self.received
    }

    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.received)
    }
}

impl Notifier for Recorder {
    fn notify_success(&mut self, message: &str) {
        self.received.push(Notification::Success(message.to_string()));
    }

    fn notify_error(&mut self, message: &str) {
        self.received.push(Notification::Error(message.to_string()));
    }
}

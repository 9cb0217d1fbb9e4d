use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Warnings and errors interrupt the user with an alert.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub timestamp: String,
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    /// Whether the history panel is open.
    pub visible: bool,
    /// The notice waiting to be acknowledged, if any.
    pub alert: Option<Notice>,
}

impl Notifications {
    pub fn push(&mut self, level: Level, message: &str) {
        let notice = Notice {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        };
        if level.is_blocking() {
            self.alert = Some(notice.clone());
        }
        self.entries.push(notice);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == Level::Error)
            .count()
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Record a notice, log it, and raise an alert for warnings and errors.
pub fn notify(notifications: &mut Signal<Notifications>, level: Level, message: &str) {
    match level {
        Level::Error => tracing::error!("{message}"),
        Level::Warning => tracing::warn!("{message}"),
        Level::Info | Level::Success => tracing::info!("{message}"),
    }
    notifications.write().push(level, message);
}

/// Provides the notification signal to its children.
#[component]
pub fn NotificationsProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let (h, m, s) = ((secs / 3600) % 24, (secs / 60) % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

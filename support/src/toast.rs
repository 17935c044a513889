//! Toast notification dispatch
//!
//! UI controllers display outcomes through a toast sink. The sink itself
//! is an external collaborator behind [`ToastBackend`]; [`Toaster`] applies
//! the fixed per-severity parameters before forwarding.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use svrdash_core::Result;
use tracing::{error, info, warn};

/// Display duration for alert and info toasts
pub const ALERT_DURATION_MS: u32 = 5_000;
/// Display duration for error toasts
pub const ERROR_DURATION_MS: u32 = 10_000;

const TOAST_CLASS: &str = "cb-toast";
const TOAST_CLASS_WITHOUT_TITLE: &str = "cb-toast-without-title";

/// Severity tag understood by the toast sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastStatus {
    Warning,
    Info,
    Danger,
}

/// Options forwarded to the sink with every toast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastOptions {
    pub status: ToastStatus,
    pub duration_ms: u32,
    pub icon: String,
    pub destroy_by_click: bool,
    pub toast_class: String,
    pub prevent_duplicates: bool,
    pub render_as_html: bool,
}

/// Toast sink trait
#[async_trait]
pub trait ToastBackend: Send + Sync {
    /// Show a toast
    async fn show(&self, message: &str, title: Option<&str>, options: &ToastOptions)
        -> Result<()>;

    /// Backend name
    fn name(&self) -> &str;
}

/// Headless sink rendering toasts to the log
#[derive(Debug, Clone, Default)]
pub struct LogToast;

#[async_trait]
impl ToastBackend for LogToast {
    async fn show(
        &self,
        message: &str,
        title: Option<&str>,
        options: &ToastOptions,
    ) -> Result<()> {
        let title = title.unwrap_or("");
        match options.status {
            ToastStatus::Warning => {
                warn!(title = %title, duration_ms = options.duration_ms, "{}", message)
            }
            ToastStatus::Info => {
                info!(title = %title, duration_ms = options.duration_ms, "{}", message)
            }
            ToastStatus::Danger => {
                error!(title = %title, duration_ms = options.duration_ms, "{}", message)
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Front-end applying the fixed per-severity toast parameters
#[derive(Clone)]
pub struct Toaster {
    backend: Arc<dyn ToastBackend>,
}

impl Toaster {
    /// Create a toaster over the given sink
    pub fn new(backend: Arc<dyn ToastBackend>) -> Self {
        Self { backend }
    }

    /// Show a warning toast (5 s)
    pub async fn display_alert(&self, message: &str, title: Option<&str>) -> Result<()> {
        let options = Self::options(ToastStatus::Warning, ALERT_DURATION_MS, title, false);
        self.backend.show(message, title, &options).await
    }

    /// Show an info toast (5 s)
    pub async fn display_info(&self, message: &str, title: Option<&str>) -> Result<()> {
        let options = Self::options(ToastStatus::Info, ALERT_DURATION_MS, title, false);
        self.backend.show(message, title, &options).await
    }

    /// Show an error toast (10 s), optionally rendered as HTML
    pub async fn display_error(
        &self,
        message: &str,
        title: Option<&str>,
        as_html: bool,
    ) -> Result<()> {
        let options = Self::options(ToastStatus::Danger, ERROR_DURATION_MS, title, as_html);
        self.backend.show(message, title, &options).await
    }

    /// Fixed toast parameters; only severity, duration, the HTML flag and
    /// the title-dependent class vary per call site.
    fn options(
        status: ToastStatus,
        duration_ms: u32,
        title: Option<&str>,
        render_as_html: bool,
    ) -> ToastOptions {
        ToastOptions {
            status,
            duration_ms,
            icon: String::new(),
            destroy_by_click: true,
            toast_class: if title.is_some() {
                TOAST_CLASS
            } else {
                TOAST_CLASS_WITHOUT_TITLE
            }
            .to_string(),
            prevent_duplicates: true,
            render_as_html,
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(Arc::new(LogToast))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingToast {
        shown: Mutex<Vec<(String, Option<String>, ToastOptions)>>,
    }

    #[async_trait]
    impl ToastBackend for RecordingToast {
        async fn show(
            &self,
            message: &str,
            title: Option<&str>,
            options: &ToastOptions,
        ) -> Result<()> {
            self.shown.lock().unwrap().push((
                message.to_string(),
                title.map(|t| t.to_string()),
                options.clone(),
            ));
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_display_alert_parameters() {
        let backend = Arc::new(RecordingToast::default());
        let toaster = Toaster::new(backend.clone());

        toaster.display_alert("disk filling up", None).await.unwrap();

        let shown = backend.shown.lock().unwrap();
        let (message, title, options) = &shown[0];
        assert_eq!(message, "disk filling up");
        assert!(title.is_none());
        assert_eq!(options.status, ToastStatus::Warning);
        assert_eq!(options.duration_ms, 5_000);
        assert_eq!(options.toast_class, "cb-toast-without-title");
        assert!(options.prevent_duplicates);
        assert!(options.destroy_by_click);
        assert!(!options.render_as_html);
    }

    #[tokio::test]
    async fn test_display_info_with_title_class() {
        let backend = Arc::new(RecordingToast::default());
        let toaster = Toaster::new(backend.clone());

        toaster
            .display_info("saved", Some("Servers"))
            .await
            .unwrap();

        let shown = backend.shown.lock().unwrap();
        let (_, title, options) = &shown[0];
        assert_eq!(title.as_deref(), Some("Servers"));
        assert_eq!(options.status, ToastStatus::Info);
        assert_eq!(options.duration_ms, 5_000);
        assert_eq!(options.toast_class, "cb-toast");
    }

    #[tokio::test]
    async fn test_display_error_parameters() {
        let backend = Arc::new(RecordingToast::default());
        let toaster = Toaster::new(backend.clone());

        toaster
            .display_error("An error occured - Error code: 500", None, true)
            .await
            .unwrap();

        let shown = backend.shown.lock().unwrap();
        let (_, _, options) = &shown[0];
        assert_eq!(options.status, ToastStatus::Danger);
        assert_eq!(options.duration_ms, 10_000);
        assert!(options.render_as_html);
    }

    #[tokio::test]
    async fn test_log_backend_never_fails() {
        let toaster = Toaster::default();
        assert!(toaster.display_info("hello", None).await.is_ok());
    }
}

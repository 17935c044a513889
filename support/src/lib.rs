//! Support utilities for SvrDash
//!
//! Stateless helpers consumed by UI controllers independently of the
//! gateway: date and decimal parsing/formatting, toast dispatch, route
//! redirection, base64 file export, and form-state touch marking.

pub mod datetime;
pub mod decimal;
pub mod download;
pub mod forms;
pub mod nav;
pub mod toast;

// Re-exports
pub use datetime::{format_date, parse_date, DateValue, DEFAULT_DATE_FORMAT};
pub use decimal::{format_decimal, parse_decimal, DigitsInfo, DEFAULT_DIGITS};
pub use download::{download_file, FileDownload, DEFAULT_MIME_TYPE};
pub use forms::{mark_form_controls_as_touched, FormControl, FormGroup};
pub use nav::{redirect_to, LogNavigator, Navigator};
pub use toast::{LogToast, ToastBackend, ToastOptions, ToastStatus, Toaster};

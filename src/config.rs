//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Name of the application embedding this library.
/// This is used to build the default storage folder (`~/.config/<APP_NAME>`). Feel free to override it when initing this library.
pub static APP_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("daybook".to_string())));

/// Whether long dates are displayed with an ordinal day number ("January 10th, 2024") or a plain one ("January 10, 2024").
pub static ORDINAL_DAYS: Lazy<Arc<Mutex<bool>>> = Lazy::new(|| Arc::new(Mutex::new(true)));


/// Returns the current value of [`APP_NAME`]
pub fn app_name() -> String {
    match APP_NAME.lock() {
        Ok(name) => name.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the current value of [`ORDINAL_DAYS`]
pub fn ordinal_days() -> bool {
    match ORDINAL_DAYS.lock() {
        Ok(flag) => *flag,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

mod dashboard;
mod error;
pub mod format;
mod icon;
pub mod nav;
mod user;

pub use dashboard::{
    ActionStyle, Activity, ActivityAction, ActivityKind, DashboardSummary, QuickAction, Stat, Trend,
};
pub use error::{Error, Result};
pub use icon::{Icon, Palette};
pub use user::{CurrentUser, FALLBACK_GREETING_NAME, UserType, greeting_name};

#[doc(hidden)]
pub use eyre::eyre as internal_eyre_dont_use;

/// Build an [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::internal_eyre_dont_use!($($arg)*))
    };
}

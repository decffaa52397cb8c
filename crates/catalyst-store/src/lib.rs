pub mod applications;
pub mod finance;
pub mod planner;
pub mod store;
pub mod toolbox;
pub mod wellness;

pub use applications::ApplicationTracker;
pub use finance::Finance;
pub use planner::Planner;
pub use store::JsonStore;
pub use toolbox::Toolbox;
pub use wellness::Wellness;

use catalyst_core::stats::round2;
use catalyst_core::{CatalystError, CatalystResult};

/// Trimmed `s`, or `Invalid(msg)` when nothing is left.
pub(crate) fn required_text<'s>(s: &'s str, msg: &str) -> CatalystResult<&'s str> {
    match s.trim() {
        "" => Err(CatalystError::Invalid(msg.to_string())),
        t => Ok(t),
    }
}

pub(crate) fn optional_text(s: &str) -> String {
    s.trim().to_string()
}

/// Record ids are positive and fit in `u32`.
pub(crate) fn id_arg(id: i64, msg: &str) -> CatalystResult<u32> {
    u32::try_from(id)
        .ok()
        .filter(|id| *id >= 1)
        .ok_or_else(|| CatalystError::Invalid(msg.to_string()))
}

/// Amount rounded to cents. The rounded value must be finite and at least
/// one cent.
pub(crate) fn amount_arg(amount: f64, msg: &str) -> CatalystResult<f64> {
    let cents = round2(amount);
    if cents.is_finite() && cents > 0.0 {
        Ok(cents)
    } else {
        Err(CatalystError::Invalid(msg.to_string()))
    }
}

//! Exit status classification
//!
//! `npm audit --audit-level=high` exits non-zero as soon as one finding at or
//! above "high" exists.
//!
//! `yarn audit` (v1) ORs one bit per severity present into its exit code:
//! 1 info, 2 low, 4 moderate, 8 high, 16 critical. Anything above 7 therefore
//! has the high or critical bit set. This relies on yarn classic's convention
//! and must be revisited if a newer yarn changes its exit codes.

use crate::core::models::{PackageManager, Verdict};

/// Highest yarn exit code made up of info, low and moderate bits only
pub const YARN_MAX_TOLERATED_EXIT: i32 = 7;

/// Map an audit exit status to a verdict
///
/// Total over every `i32`; never returns [`Verdict::Unknown`].
#[must_use]
pub const fn classify(package_manager: PackageManager, exit_code: i32) -> Verdict {
    match package_manager {
        PackageManager::Npm if exit_code > 0 => Verdict::NotPracticing,
        _ if exit_code > YARN_MAX_TOLERATED_EXIT => Verdict::NotPracticing,
        _ => Verdict::Practicing,
    }
}

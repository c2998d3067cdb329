//! Oracle observations

use serde::{Deserialize, Serialize};

use core_kernel::Timestamp;

/// Latest published reading of a feed
///
/// A feed holds exactly one observation. Publishing replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleObservation {
    pub value: i64,
    pub last_updated: Timestamp,
}

use thiserror::Error;

use crate::server::model::engagement::TargetKind;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A counter update matched a row that could not be read back afterwards.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned to client.
    #[error("{kind} {id} vanished after its counters were updated")]
    SnapshotMissing {
        /// Kind of the updated target
        kind: TargetKind,
        /// Primary key of the updated target
        id: i32,
    },
}

//! Errors raised while building or querying person records.

use crate::models::PersonId;

#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    /// The birth date was supplied but is not a valid `YYYY-MM-DD` date.
    ///
    /// `source` is `None` when the text was rejected before reaching the date
    /// parser.
    #[error("invalid birth date {input:?}, expected YYYY-MM-DD")]
    InvalidBirth {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    /// Age was requested for a person without a birth date.
    #[error("person {id} has no birth date")]
    MissingBirth { id: PersonId },
}

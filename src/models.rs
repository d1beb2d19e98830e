use chrono::{Local, NaiveDate};

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::error::PersonError;

const BIRTH_FORMAT: &str = "%Y-%m-%d";

// chrono tolerates padding, signs and short years that `YYYY-MM-DD` does not
fn has_birth_shape(input: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = input.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

fn parse_birth(input: &str) -> Result<NaiveDate, PersonError> {
    let invalid = |source| PersonError::InvalidBirth {
        input: input.to_string(),
        source,
    };

    if !has_birth_shape(input) {
        return Err(invalid(None));
    }
    NaiveDate::parse_from_str(input, BIRTH_FORMAT).map_err(|e| invalid(Some(e)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(u64);

impl PersonId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out sequential person ids starting at 0.
///
/// Whoever creates persons owns the generator; ids are only unique within
/// one generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_id: AtomicU64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> PersonId {
        PersonId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    birth: Option<NaiveDate>,
}

impl Person {
    /// Creates a person, drawing its id from `ids`.
    ///
    /// A missing birth date is fine; a malformed one is an error. The id is
    /// consumed even when parsing fails.
    pub fn new(ids: &IdGenerator, name: &str, birth: Option<&str>) -> Result<Self, PersonError> {
        let id = ids.next_id();

        let birth = birth.map(parse_birth).transpose()?;

        tracing::debug!(%id, ?birth, "Person {} created", name);

        Ok(Self {
            id,
            name: name.to_string(),
            birth,
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birth(&self) -> Option<NaiveDate> {
        self.birth
    }

    /// Age in whole days as of today's local date.
    pub fn age(&self) -> Result<i64, PersonError> {
        self.age_on(Local::now().date_naive())
    }

    /// Age in whole days as of `today`. Negative if born after `today`.
    pub fn age_on(&self, today: NaiveDate) -> Result<i64, PersonError> {
        let birth = self
            .birth
            .ok_or(PersonError::MissingBirth { id: self.id })?;
        Ok((today - birth).num_days())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.birth {
            Some(birth) => write!(f, "{} - {} ({})", self.id, self.name, birth),
            None => write!(f, "{} - {} (None)", self.id, self.name),
        }
    }
}

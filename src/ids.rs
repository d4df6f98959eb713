use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Strongly typed report identifier backed by ULID.
///
/// Doubles as the persisted file stem: ULIDs are timestamp-major, so sorting
/// stored file names sorts reports by acceptance time.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ReportId(pub ulid::Ulid);

impl ReportId {
    pub fn new() -> Self {
        Self(ulid::Ulid::new())
    }

    pub fn from_ulid(id: ulid::Ulid) -> Self {
        Self(id)
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ReportId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = ulid::Ulid::from_string(s)?;
        Ok(ReportId(id))
    }
}

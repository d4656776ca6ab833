/// A row from the `url_mapping` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub short_code: String,
    pub original_url: String,
}

/// Result of trying to insert a mapping under a candidate code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    /// The code is already taken by another mapping.
    Conflict,
}

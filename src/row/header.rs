use std::collections::HashMap;

/// Mapping from column name to field position, fixed when the header is read.
///
/// When a header repeats a name, the name maps to its last position.
///
/// # Example
///
/// ```
/// use csv_record::NameIndex;
///
/// let index = NameIndex::from_names(["id", "name", "id"]);
/// assert_eq!(index.position("name"), Some(1));
/// assert_eq!(index.position("id"), Some(2));
/// assert_eq!(index.position("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    positions: HashMap<String, usize>,
}

impl NameIndex {
    /// Creates an index with no names; every lookup misses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from header names in column order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut positions = HashMap::new();
        for (i, name) in names.into_iter().enumerate() {
            positions.insert(name.into(), i);
        }
        Self { positions }
    }

    /// Returns the position recorded for `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Returns `true` if `name` appears in the header.
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the header had no columns.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Generates `_1`, `_2`, ... `_n` for sources read without a usable header.
pub fn positional_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("_{i}")).collect()
}

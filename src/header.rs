//! Header line indexing and column name resolution.
//!
//! The header line is split once into column names and kept as a
//! name-to-index map. Field names are resolved against it with a fixed
//! precedence: explicit tag, declared name, lower-camel declared name.

use std::borrow::Cow;
use std::collections::HashMap;

/// Column index built from a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderIndex {
    /// Column name to zero-based position
    pub name_to_index: HashMap<String, usize>,

    /// Column names in header order
    pub columns: Vec<String>,
}

impl HeaderIndex {
    /// Split a header line into columns and index them by name
    ///
    /// Duplicate names keep the position of their last occurrence.
    pub fn parse(head_line: &str, delimiter: &str) -> Self {
        let columns: Vec<String> = head_line.split(delimiter).map(str::to_string).collect();

        let mut name_to_index = HashMap::with_capacity(columns.len());
        for (index, column) in columns.iter().enumerate() {
            name_to_index.insert(column.clone(), index);
        }

        Self {
            name_to_index,
            columns,
        }
    }

    /// Number of columns every decoded line must have
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the header
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Resolve a field to a column index
    ///
    /// Tries the tag, then the field name as declared, then the field name
    /// with its first letter lower-cased. The first hit wins.
    pub fn resolve(&self, tag: Option<&str>, field_name: &str) -> Option<usize> {
        tag.and_then(|tag| self.get_index(tag))
            .or_else(|| self.get_index(field_name))
            .or_else(|| self.get_index(&lower_camel(field_name)))
    }
}

/// Lower-case the first character of a name when it is an ASCII capital
pub fn lower_camel(name: &str) -> Cow<'_, str> {
    match name.as_bytes().first() {
        Some(first) if first.is_ascii_uppercase() => {
            let mut lowered = String::with_capacity(name.len());
            lowered.push(first.to_ascii_lowercase() as char);
            lowered.push_str(&name[1..]);
            Cow::Owned(lowered)
        }
        _ => Cow::Borrowed(name),
    }
}

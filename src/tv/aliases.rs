use serde::Serialize;
use std::collections::BTreeMap;

/// Alternative wire names for buttons that differ between TV firmwares.
/// The first entry of each list is tried first.
const BUILTIN_ALIASES: &[(&str, &[&str])] = &[
    ("Confirm", &["Confirm", "Ok", "Select", "Enter"]),
    ("Home", &["Home", "SmartTV"]),
    ("Netflix", &["Netflix", "Launch_Netflix"]),
    ("YouTube", &["YouTube", "Launch_YouTube"]),
];

/// One logical command and the wire commands tried for it, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub name: String,
    pub candidates: Vec<String>,
}

/// Ordered mapping from logical command to fallback candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ALIASES
                .iter()
                .map(|(name, candidates)| AliasEntry {
                    name: name.to_string(),
                    candidates: candidates.iter().map(|c| c.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Built-in table with user entries applied on top.
    ///
    /// An override replaces the candidate list of an existing entry in place,
    /// or is appended when the name is new. An empty list removes the entry.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::builtin();
        for (name, candidates) in overrides {
            let existing = table.entries.iter().position(|e| &e.name == name);
            match (existing, candidates.is_empty()) {
                (Some(index), true) => {
                    table.entries.remove(index);
                }
                (Some(index), false) => {
                    table.entries[index].candidates = candidates.clone();
                }
                (None, true) => {}
                (None, false) => table.entries.push(AliasEntry {
                    name: name.clone(),
                    candidates: candidates.clone(),
                }),
            }
        }
        table
    }

    /// Wire commands to try for `logical`; the command itself when unmapped.
    pub fn candidates<'a>(&'a self, logical: &'a str) -> Vec<&'a str> {
        match self.entries.iter().find(|e| e.name == logical) {
            Some(entry) => entry.candidates.iter().map(String::as_str).collect(),
            None => vec![logical],
        }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

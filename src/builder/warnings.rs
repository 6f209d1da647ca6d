use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal findings raised while building a custom dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssemblyWarning {
    /// Several fields share `name`; only the last one's values were kept.
    /// `positions` are 0-based field positions in input order.
    DuplicateFieldName { name: String, positions: Vec<usize> },

    /// `count` cells of `field` were left blank.
    BlankCells { field: String, count: usize },
}

impl fmt::Display for AssemblyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFieldName { name, positions } => {
                let fields: Vec<String> = positions.iter().map(|p| (p + 1).to_string()).collect();
                write!(
                    f,
                    "Fields {} are all named '{name}'; only the values of the last one are kept",
                    fields.join(", ")
                )
            }
            Self::BlankCells { field, count } => {
                let noun = if *count == 1 { "value" } else { "values" };
                write!(f, "Field '{field}' has {count} empty {noun}")
            }
        }
    }
}

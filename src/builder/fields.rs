use super::warnings::AssemblyWarning;
use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound on the number of fields in a custom dataset.
pub const MAX_FIELDS: usize = 10;

/// Placeholder name for the field at `index` (0-based), e.g. `Field Name 1`.
pub fn default_field_name(index: usize) -> String {
    format!("Field Name {}", index + 1)
}

/// Ordered field names of a custom dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    names: Vec<String>,
}

impl FieldSpec {
    /// `count` fields, all carrying their placeholder names.
    ///
    /// # Errors
    ///
    /// `FieldCountOutOfRange` unless `1 <= count <= MAX_FIELDS`.
    pub fn with_defaults(count: usize) -> Result<Self> {
        check_field_count(count)?;
        Ok(Self {
            names: (0..count).map(default_field_name).collect(),
        })
    }

    /// Take the names exactly as given.
    ///
    /// # Errors
    ///
    /// `FieldCountOutOfRange` for a bad count, `InvalidFieldName` for the first blank name.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        check_field_count(names.len())?;
        let spec = Self { names };
        spec.validate()?;
        Ok(spec)
    }

    /// Replace the name at `index`.
    ///
    /// # Errors
    ///
    /// `FieldIndexOutOfRange` for a position past the end, `InvalidFieldName`
    /// when the new name is blank. Names are unchanged on error.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let count = self.names.len();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidFieldName(index).into());
        }
        let slot = self
            .names
            .get_mut(index)
            .ok_or(ValidationError::FieldIndexOutOfRange { index, count })?;
        *slot = name;
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Every name must have visible text.
    ///
    /// # Errors
    ///
    /// `InvalidFieldName(index)` for the first blank name.
    pub fn validate(&self) -> Result<()> {
        validate_names(&self.names)
    }

    /// Names used by more than one field, with every position they occupy.
    pub fn duplicate_warnings(&self) -> Vec<AssemblyWarning> {
        duplicate_warnings(&self.names)
    }
}

/// Build a [`FieldSpec`] of `count` placeholder names, then apply user overrides
/// given as `(position, name)` pairs.
///
/// # Errors
///
/// `FieldCountOutOfRange`, `FieldIndexOutOfRange` or `InvalidFieldName`.
pub fn collect_field_names<I, S>(count: usize, overrides: I) -> Result<FieldSpec>
where
    I: IntoIterator<Item = (usize, S)>,
    S: Into<String>,
{
    let mut spec = FieldSpec::with_defaults(count)?;
    for (index, name) in overrides {
        spec.rename(index, name)?;
    }
    Ok(spec)
}

pub(crate) fn check_field_count(count: usize) -> Result<()> {
    if (1..=MAX_FIELDS).contains(&count) {
        Ok(())
    } else {
        Err(ValidationError::FieldCountOutOfRange {
            requested: count,
            max: MAX_FIELDS,
        }
        .into())
    }
}

pub(crate) fn validate_names<S: AsRef<str>>(names: &[S]) -> Result<()> {
    match names.iter().position(|n| n.as_ref().trim().is_empty()) {
        Some(index) => Err(ValidationError::InvalidFieldName(index).into()),
        None => Ok(()),
    }
}

pub(crate) fn duplicate_warnings<S: AsRef<str>>(names: &[S]) -> Vec<AssemblyWarning> {
    let mut positions: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (idx, name) in names.iter().enumerate() {
        positions.entry(name.as_ref()).or_default().push(idx);
    }

    let mut warnings: Vec<AssemblyWarning> = positions
        .into_iter()
        .filter(|(_, pos)| pos.len() > 1)
        .map(|(name, positions)| AssemblyWarning::DuplicateFieldName {
            name: name.to_owned(),
            positions,
        })
        .collect();

    // Report in the order the user first typed the names
    warnings.sort_by_key(|w| match w {
        AssemblyWarning::DuplicateFieldName { positions, .. } => {
            positions.first().copied().unwrap_or_default()
        }
        AssemblyWarning::BlankCells { .. } => usize::MAX,
    });
    warnings
}

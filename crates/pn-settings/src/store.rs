//! Typed option store.

use std::fmt;

use pn_core::{FromValue, Value, ValueType};
use tracing::{debug, trace};

use crate::error::{SettingsError, SettingsResult};
use crate::format::render_table;
use crate::indexing::OptionIndex;

/// One named option with its established type.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionEntry {
    pub name: String,
    pub value: Value,
    /// `Any` (or a list with an `Any` element) until the first value fixes it.
    pub ty: ValueType,
}

/// Ordered collection of typed options.
///
/// Every write is checked against the option's type. Types come from an
/// explicit [`declare`](Self::declare) or, for undeclared names, from the
/// first value passed to [`set`](Self::set). A rejected write leaves the
/// stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsStore {
    entries: Vec<OptionEntry>,
    index: OptionIndex,
    doc: String,
}

impl SettingsStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store carrying a static description.
    pub fn with_doc(doc: impl Into<String>) -> Self {
        Self {
            doc: doc.into(),
            ..Self::default()
        }
    }

    /// Build a store from name/value pairs, inferring each option's type.
    pub fn from_mapping<I, K, V>(pairs: I) -> SettingsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut store = Self::new();
        for (name, value) in pairs {
            store.set(name.as_ref(), value)?;
        }
        Ok(store)
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn set_doc(&mut self, doc: impl Into<String>) {
        self.doc = doc.into();
    }

    /// Register an option with an explicit type and default.
    ///
    /// A `Null` default leaves the option unset but keeps the declared type.
    pub fn declare(
        &mut self,
        name: &str,
        ty: ValueType,
        default: impl Into<Value>,
    ) -> SettingsResult<()> {
        validate_name(name)?;
        if self.contains(name) {
            return Err(SettingsError::DuplicateOption {
                name: name.to_string(),
            });
        }
        let value = default.into();
        let ty = if value.is_null() {
            ty
        } else {
            ty.unify(&value).map_err(|e| SettingsError::mismatch(name, e))?
        };
        debug!(option = name, ty = %ty, "declared option");
        self.insert(name, value, ty);
        Ok(())
    }

    /// Current value of an option.
    pub fn get(&self, name: &str) -> SettingsResult<&Value> {
        self.entry(name).map(|e| &e.value)
    }

    /// Current value converted to a concrete Rust type.
    pub fn get_as<T: FromValue>(&self, name: &str) -> SettingsResult<T> {
        let value = self.get(name)?.clone();
        T::from_value(value).map_err(|source| SettingsError::Conversion {
            name: name.to_string(),
            source,
        })
    }

    /// Assign a value, declaring the option on first write.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> SettingsResult<()> {
        let value = value.into();
        match self.index.slot(name) {
            Some(slot) => {
                let entry = &mut self.entries[slot];
                let ty = entry
                    .ty
                    .unify(&value)
                    .map_err(|e| SettingsError::mismatch(name, e))?;
                if ty != entry.ty {
                    debug!(option = name, from = %entry.ty, to = %ty, "option type established");
                }
                trace!(option = name, value = %value, "set option");
                entry.ty = ty;
                entry.value = value;
                Ok(())
            }
            None => {
                validate_name(name)?;
                let ty = ValueType::infer(&value).map_err(|e| SettingsError::mismatch(name, e))?;
                debug!(option = name, ty = %ty, "inferred option type");
                self.insert(name, value, ty);
                Ok(())
            }
        }
    }

    /// Append one element to a sequence option.
    ///
    /// The element must conform to the sequence's element type. An unset
    /// (`Null`) sequence option starts a new sequence.
    pub fn push(&mut self, name: &str, item: impl Into<Value>) -> SettingsResult<()> {
        let item = item.into();
        let slot = self.slot(name)?;
        let entry = &mut self.entries[slot];
        let ty = entry
            .ty
            .unify_element(&item)
            .map_err(|e| SettingsError::mismatch(name, e))?;
        match entry.value {
            Value::List(ref mut items) => items.push(item),
            Value::Null => entry.value = Value::List(vec![item]),
            ref other => {
                return Err(SettingsError::TypeMismatch {
                    name: name.to_string(),
                    expected: entry.ty.to_string(),
                    found: other.describe(),
                });
            }
        }
        if ty != entry.ty {
            debug!(option = name, from = %entry.ty, to = %ty, "option type established");
        }
        entry.ty = ty;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.slot(name).is_some()
    }

    /// Established type of an option.
    pub fn type_of(&self, name: &str) -> SettingsResult<&ValueType> {
        self.entry(name).map(|e| &e.ty)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    /// All option names in declaration order, reserved ones included.
    pub fn names(&self) -> &[String] {
        self.index.names()
    }

    /// Ordered name/value pairs.
    pub fn to_map(&self) -> Vec<(String, Value)> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }

    /// Two-column table of every option.
    pub fn format(&self) -> String {
        render_table(self.entries.iter().map(|e| (e.name.as_str(), &e.value)))
    }

    fn slot(&self, name: &str) -> SettingsResult<usize> {
        self.index
            .slot(name)
            .ok_or_else(|| SettingsError::UnknownOption {
                name: name.to_string(),
            })
    }

    fn entry(&self, name: &str) -> SettingsResult<&OptionEntry> {
        self.slot(name).map(|slot| &self.entries[slot])
    }

    fn insert(&mut self, name: &str, value: Value, ty: ValueType) {
        if self.index.insert(name).is_some() {
            self.entries.push(OptionEntry {
                name: name.to_string(),
                value,
                ty,
            });
        }
    }
}

impl fmt::Display for SettingsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn validate_name(name: &str) -> SettingsResult<()> {
    if name.trim().is_empty() {
        return Err(SettingsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

//! Class-like settings schemas.

use crate::error::SettingsResult;
use crate::store::SettingsStore;

/// A fixed set of options with declared types, defaults, and a description.
///
/// Schemas extend one another by declaring the base first and then adding
/// options or replacing defaults with [`SettingsStore::set`]. Descriptions
/// compose the same way through [`doc`](Self::doc).
///
/// ```
/// use pn_settings::{SettingsSchema, SettingsStore, SettingsResult, SettingsView, ValueType};
///
/// struct Base;
/// impl SettingsSchema for Base {
///     const NAME: &'static str = "base";
///     const DOC: &'static str = "prefix : str\n    Name prefix";
///     fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
///         store.declare("prefix", ValueType::Str, "alg")
///     }
/// }
///
/// struct Child;
/// impl SettingsSchema for Child {
///     const NAME: &'static str = "child";
///     const DOC: &'static str = "rate : float\n    Reaction rate";
///     fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
///         Base::declare(store)?;
///         store.set("prefix", "rxn")?;
///         store.declare("rate", ValueType::Float, 0.5)
///     }
///     fn doc() -> String {
///         format!("{}\n{}", Base::doc(), Self::DOC)
///     }
/// }
///
/// let view = SettingsView::from_schema::<Child>().unwrap();
/// assert_eq!(view.get_as::<String>("prefix").unwrap(), "rxn");
/// assert!(view.doc().contains("Name prefix"));
/// ```
pub trait SettingsSchema {
    /// Short identifier for diagnostics.
    const NAME: &'static str;

    /// Description of this schema's own options.
    const DOC: &'static str;

    /// Declare every option of the schema on `store`.
    fn declare(store: &mut SettingsStore) -> SettingsResult<()>;

    /// Full description, including any inherited from a base schema.
    fn doc() -> String {
        Self::DOC.to_string()
    }

    /// A fresh store holding the schema's defaults.
    fn store() -> SettingsResult<SettingsStore> {
        let mut store = SettingsStore::with_doc(Self::doc());
        Self::declare(&mut store)?;
        tracing::debug!(schema = Self::NAME, options = store.len(), "built settings store");
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SettingsError;
    use pn_core::{Value, ValueType};

    struct Lists;

    impl SettingsSchema for Lists {
        const NAME: &'static str = "lists";
        const DOC: &'static str = "d : list[str]";

        fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
            store.declare("d", ValueType::list_of(ValueType::Str), Vec::<String>::new())
        }
    }

    struct Twice;

    impl SettingsSchema for Twice {
        const NAME: &'static str = "twice";
        const DOC: &'static str = "";

        fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
            Lists::declare(store)?;
            Lists::declare(store)
        }
    }

    #[test]
    fn schema_store_has_defaults_and_doc() {
        let store = Lists::store().unwrap();
        assert_eq!(store.doc(), "d : list[str]");
        assert_eq!(store.get("d").unwrap(), &Value::List(vec![]));
        assert_eq!(
            store.type_of("d").unwrap(),
            &ValueType::list_of(ValueType::Str)
        );
    }

    #[test]
    fn redeclaring_through_schema_fails() {
        assert!(matches!(
            Twice::store(),
            Err(SettingsError::DuplicateOption { .. })
        ));
    }
}

//! By-name view over a shared settings store.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pn_core::{FromValue, Value};
use serde::Serialize;
use tracing::debug;

use crate::error::SettingsResult;
use crate::format::render_table;
use crate::io;
use crate::schema::SettingsSchema;
use crate::store::SettingsStore;

/// Names starting with this marker are bookkeeping and never enumerated.
pub const RESERVED_PREFIX: char = '_';

/// Settings as seen by the object that owns them.
///
/// The view shares its store (`Rc<RefCell<_>>`); cloning a view yields a
/// second handle on the same options. Shared handles are single-threaded:
/// the view is neither `Send` nor `Sync`.
///
/// Reads and writes go straight to the store, so the typing rules of
/// [`SettingsStore::set`] apply unchanged. Enumeration only ever lists
/// options whose names do not start with [`RESERVED_PREFIX`].
#[derive(Debug, Clone)]
pub struct SettingsView {
    store: Rc<RefCell<SettingsStore>>,
    doc: String,
}

impl SettingsView {
    /// Wrap an owned store.
    pub fn from_store(store: SettingsStore) -> Self {
        Self::from_shared(Rc::new(RefCell::new(store)))
    }

    /// Wrap a store that is already shared.
    ///
    /// The store's description is copied now; later edits to it are not
    /// seen by this view.
    pub fn from_shared(store: Rc<RefCell<SettingsStore>>) -> Self {
        let doc = store.borrow().doc().to_string();
        Self { store, doc }
    }

    /// Build a fresh store from name/value pairs, inferring types.
    pub fn from_mapping<I, K, V>(pairs: I) -> SettingsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        SettingsStore::from_mapping(pairs).map(Self::from_store)
    }

    /// Build from a schema's declarations, defaults, and description.
    pub fn from_schema<S: SettingsSchema>() -> SettingsResult<Self> {
        S::store().map(Self::from_store)
    }

    /// Build from a plain struct: each serialized field becomes an option
    /// typed by its initial value.
    pub fn from_serialize<T: Serialize>(object: &T) -> SettingsResult<Self> {
        let pairs = io::to_mapping(object)?;
        Self::from_mapping(pairs)
    }

    /// Apply construction-time overrides.
    pub fn with_overrides<I, K, V>(self, overrides: I) -> SettingsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.merge(overrides)?;
        Ok(self)
    }

    /// Current value of an option.
    pub fn get(&self, name: &str) -> SettingsResult<Value> {
        self.store.borrow().get(name).cloned()
    }

    pub fn get_as<T: FromValue>(&self, name: &str) -> SettingsResult<T> {
        self.store.borrow().get_as(name)
    }

    /// Assign a value; see [`SettingsStore::set`].
    pub fn set(&self, name: &str, value: impl Into<Value>) -> SettingsResult<()> {
        self.store.borrow_mut().set(name, value)
    }

    /// Append to a sequence option; see [`SettingsStore::push`].
    pub fn push(&self, name: &str, item: impl Into<Value>) -> SettingsResult<()> {
        self.store.borrow_mut().push(name, item)
    }

    /// Assign every pair in order.
    ///
    /// Not atomic: on the first failing pair the error is returned and the
    /// pairs before it stay applied.
    pub fn merge<I, K, V>(&self, overrides: I) -> SettingsResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut applied = 0_usize;
        for (name, value) in overrides {
            let name = name.as_ref();
            // The iterator may read this store through another handle.
            let result = self.store.borrow_mut().set(name, value);
            if let Err(err) = result {
                debug!(option = name, applied, "merge stopped on rejected option");
                return Err(err);
            }
            applied += 1;
        }
        debug!(applied, "merged settings");
        Ok(())
    }

    /// Visible option names in declaration order.
    pub fn names(&self) -> Vec<String> {
        self.store
            .borrow()
            .names()
            .iter()
            .filter(|name| !is_reserved(name))
            .cloned()
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.borrow().contains(name)
    }

    /// Description copied from the store when the view was built.
    pub fn doc(&self) -> &str {
        &self.doc
    }

    /// Visible options as ordered name/value pairs.
    pub fn to_map(&self) -> Vec<(String, Value)> {
        self.store
            .borrow()
            .iter()
            .filter(|e| !is_reserved(&e.name))
            .map(|e| (e.name.clone(), e.value.clone()))
            .collect()
    }

    /// Independent copy: same options, types, and description, new store.
    pub fn deep_copy(&self) -> Self {
        let store = self.store.borrow().clone();
        Self {
            store: Rc::new(RefCell::new(store)),
            doc: self.doc.clone(),
        }
    }

    /// True if both views wrap the same store.
    pub fn shares_store_with(&self, other: &SettingsView) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Shared handle on the underlying store.
    pub fn store(&self) -> Rc<RefCell<SettingsStore>> {
        Rc::clone(&self.store)
    }

    /// Read access to the store, reserved options included.
    pub fn with_store<R>(&self, f: impl FnOnce(&SettingsStore) -> R) -> R {
        f(&self.store.borrow())
    }
}

impl From<SettingsStore> for SettingsView {
    fn from(store: SettingsStore) -> Self {
        Self::from_store(store)
    }
}

impl fmt::Display for SettingsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let store = self.store.borrow();
        let rows = store
            .iter()
            .filter(|e| !is_reserved(&e.name))
            .map(|e| (e.name.as_str(), &e.value));
        f.write_str(&render_table(rows))
    }
}

fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::ValueType;

    #[test]
    fn prefix_scenario() {
        let mut store = SettingsStore::new();
        store.declare("prefix", ValueType::Str, "alg").unwrap();
        let view = SettingsView::from_store(store);

        view.set("prefix", "rxn").unwrap();
        assert_eq!(view.get("prefix").unwrap(), Value::from("rxn"));

        assert!(view.set("prefix", 1).unwrap_err().is_type_mismatch());
        assert_eq!(view.get("prefix").unwrap(), Value::from("rxn"));
    }

    #[test]
    fn mapping_scenario() {
        let view = SettingsView::from_mapping([("a", 5), ("e", 6)]).unwrap();
        assert!(view.set("e", 5.5).unwrap_err().is_type_mismatch());
        view.set("a", 2).unwrap();
        assert_eq!(view.get_as::<i64>("a").unwrap(), 2);
        assert_eq!(view.get_as::<i64>("e").unwrap(), 6);
    }

    #[test]
    fn names_hide_reserved_options() {
        let view = SettingsView::from_mapping([("prefix", "alg"), ("_uuid", "1234")]).unwrap();
        view.set("name", "alg_01").unwrap();
        assert_eq!(view.names(), ["prefix", "name"]);
        assert!(view.contains("_uuid"));
        assert_eq!(view.get("_uuid").unwrap(), Value::from("1234"));

        let shown = view.to_string();
        assert!(!shown.contains("_uuid"));
        let map = view.to_map();
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn clones_share_the_store() {
        let view = SettingsView::from_mapping([("a", 1)]).unwrap();
        let other = view.clone();
        other.set("a", 2).unwrap();
        assert_eq!(view.get("a").unwrap(), Value::Int(2));
        assert!(view.shares_store_with(&other));
    }

    #[test]
    fn deep_copy_is_independent() {
        let view = SettingsView::from_mapping([("a", 1)]).unwrap();
        let copy = view.deep_copy();
        copy.set("a", 3).unwrap();
        assert_eq!(view.get("a").unwrap(), Value::Int(1));
        assert!(!view.shares_store_with(&copy));
        assert!(copy.set("a", "x").is_err());
    }

    #[test]
    fn merge_is_not_atomic() {
        let view = SettingsView::from_mapping([("a", 1), ("b", 2)]).unwrap();
        let overrides: Vec<(&str, Value)> = vec![
            ("a", Value::from(10)),
            ("b", Value::from("oops")),
            ("c", Value::from(3)),
        ];
        let err = view.merge(overrides).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(view.get("a").unwrap(), Value::Int(10));
        assert_eq!(view.get("b").unwrap(), Value::Int(2));
        assert!(!view.contains("c"));
    }

    #[test]
    fn merge_source_may_read_a_shared_handle() {
        let view = SettingsView::from_mapping([("a", 1), ("b", 2)]).unwrap();
        let other = view.clone();
        view.merge(["b"].into_iter().map(|name| (name, other.get("a").unwrap())))
            .unwrap();
        assert_eq!(view.get("b").unwrap(), Value::Int(1));
    }

    #[test]
    fn doc_is_a_static_copy() {
        let store = Rc::new(RefCell::new(SettingsStore::with_doc("Original")));
        let view = SettingsView::from_shared(Rc::clone(&store));
        store.borrow_mut().set_doc("Changed");
        assert_eq!(view.doc(), "Original");
    }

    #[derive(Serialize)]
    struct Plain {
        prefix: String,
        maxiter: i64,
        tol: f64,
        sources: Vec<String>,
    }

    #[test]
    fn from_serialize_infers_member_types() {
        let plain = Plain {
            prefix: "alg".into(),
            maxiter: 10,
            tol: 1e-6,
            sources: vec!["pore.rxn".into()],
        };
        let view = SettingsView::from_serialize(&plain).unwrap();
        assert_eq!(view.names(), ["prefix", "maxiter", "tol", "sources"]);
        view.with_store(|s| {
            assert_eq!(s.type_of("tol").unwrap(), &ValueType::Float);
            assert_eq!(
                s.type_of("sources").unwrap(),
                &ValueType::list_of(ValueType::Str)
            );
        });
        assert!(view.set("maxiter", 1.5).is_err());
    }

    #[test]
    fn with_overrides_applies_in_order() {
        let view = SettingsView::from_mapping([("a", 1)])
            .unwrap()
            .with_overrides([("a", 4), ("b", 5)])
            .unwrap();
        assert_eq!(view.names(), ["a", "b"]);
        assert_eq!(view.get("a").unwrap(), Value::Int(4));
    }
}

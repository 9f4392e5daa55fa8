//! Algorithm objects that own their settings.

use std::marker::PhantomData;

use pn_settings::{SettingsSchema, SettingsView, Value};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AlgorithmError, AlgorithmResult};
use crate::schemas::{ReactiveTransportSettings, TransportSchema};

const UUID_KEY: &str = "_uuid";

/// A simulation algorithm and its settings.
///
/// The settings are built from schema `S`. Each instance also records a
/// random identifier under the reserved `_uuid` option, which is readable
/// but never enumerated.
#[derive(Debug)]
pub struct Algorithm<S: SettingsSchema> {
    settings: SettingsView,
    _schema: PhantomData<S>,
}

impl<S: SettingsSchema> Algorithm<S> {
    /// Create an algorithm with the schema's default settings.
    pub fn new() -> AlgorithmResult<Self> {
        let settings = SettingsView::from_schema::<S>()?;
        let uuid = Uuid::new_v4().to_string();
        settings.set(UUID_KEY, uuid.as_str())?;
        debug!(schema = S::NAME, uuid = %uuid, "created algorithm");
        Ok(Self {
            settings,
            _schema: PhantomData,
        })
    }

    /// Create an algorithm and apply setting overrides.
    ///
    /// Overrides are applied in order; see [`SettingsView::merge`].
    pub fn with_overrides<I, K, V>(overrides: I) -> AlgorithmResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let alg = Self::new()?;
        alg.settings.merge(overrides)?;
        Ok(alg)
    }

    pub fn settings(&self) -> &SettingsView {
        &self.settings
    }

    pub fn uuid(&self) -> AlgorithmResult<String> {
        Ok(self.settings.get_as(UUID_KEY)?)
    }

    pub fn name(&self) -> AlgorithmResult<String> {
        Ok(self.settings.get_as("name")?)
    }

    /// Set the object name, or generate one from the prefix when empty.
    pub fn set_name(&self, name: &str) -> AlgorithmResult<()> {
        let name = if name.is_empty() {
            let prefix: String = self.settings.get_as("prefix")?;
            let short: String = self.uuid()?.chars().take(8).collect();
            format!("{}_{}", prefix, short)
        } else {
            name.to_string()
        };
        self.settings.set("name", name)?;
        Ok(())
    }
}

impl<S: TransportSchema> Algorithm<S> {
    /// Name of the phase the algorithm is defined on.
    pub fn set_phase(&self, phase: &str) -> AlgorithmResult<()> {
        self.settings.set("phase", phase)?;
        Ok(())
    }

    pub fn quantity(&self) -> AlgorithmResult<String> {
        Ok(self.settings.get_as("quantity")?)
    }

    pub fn conductance(&self) -> AlgorithmResult<String> {
        Ok(self.settings.get_as("conductance")?)
    }

    /// Register a property that depends on the solved quantity.
    ///
    /// Registering the same property twice is a no-op.
    pub fn set_variable_prop(&self, propname: &str) -> AlgorithmResult<()> {
        let props: Vec<String> = self.settings.get_as("variable_props")?;
        if props.iter().any(|p| p == propname) {
            return Ok(());
        }
        self.settings.push("variable_props", propname)?;
        Ok(())
    }
}

impl Algorithm<ReactiveTransportSettings> {
    /// Register a source term by property name.
    pub fn set_source(&self, propname: &str) -> AlgorithmResult<()> {
        if self.sources()?.iter().any(|p| p == propname) {
            return Err(AlgorithmError::DuplicateSource {
                propname: propname.to_string(),
            });
        }
        self.settings.push("sources", propname)?;
        debug!(propname, "registered source term");
        Ok(())
    }

    pub fn sources(&self) -> AlgorithmResult<Vec<String>> {
        Ok(self.settings.get_as("sources")?)
    }
}

//! Settings schemas for transport algorithms.
//!
//! Each schema extends its parent: the parent's options are declared first,
//! then defaults are replaced and new options added. Descriptions are
//! concatenated parent-first.

use pn_settings::{SettingsResult, SettingsSchema, SettingsStore, Value, ValueType};

/// Options shared by every algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorithmSettings;

impl SettingsSchema for AlgorithmSettings {
    const NAME: &'static str = "algorithm";
    const DOC: &'static str = "\
prefix : str
    The default prefix to use when generating a name
name : str
    The name of the object, which is generated if not given";

    fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
        store.declare("prefix", ValueType::Str, "alg")?;
        store.declare("name", ValueType::Str, "")
    }
}

/// Schemas whose algorithms solve for a transported quantity.
pub trait TransportSchema: SettingsSchema {}

/// Options shared by linear transport algorithms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportSettings;

impl SettingsSchema for TransportSettings {
    const NAME: &'static str = "transport";
    const DOC: &'static str = "\
phase : str
    The name of the phase on which the algorithm is defined
quantity : str
    The name of the physical quantity to be solved for
conductance : str
    The name of the pore-scale transport conductance values
cache : bool
    If true, the conductance matrix is reused between solves
variable_props : list[str]
    Pore-scale properties that depend on the quantity being solved for";

    fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
        AlgorithmSettings::declare(store)?;
        store.declare("phase", ValueType::Str, "")?;
        store.declare("quantity", ValueType::Str, "")?;
        store.declare("conductance", ValueType::Str, "")?;
        store.declare("cache", ValueType::Bool, true)?;
        store.declare(
            "variable_props",
            ValueType::list_of(ValueType::Str),
            Value::List(Vec::new()),
        )
    }

    fn doc() -> String {
        format!("{}\n{}", AlgorithmSettings::doc(), Self::DOC)
    }
}

impl TransportSchema for TransportSettings {}

/// Pressure-driven viscous flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct StokesFlowSettings;

impl SettingsSchema for StokesFlowSettings {
    const NAME: &'static str = "stokes_flow";
    const DOC: &'static str = "\
Solves for pore pressure from throat hydraulic conductance";

    fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
        TransportSettings::declare(store)?;
        store.set("quantity", "pore.pressure")?;
        store.set("conductance", "throat.hydraulic_conductance")
    }

    fn doc() -> String {
        format!("{}\n{}", TransportSettings::doc(), Self::DOC)
    }
}

impl TransportSchema for StokesFlowSettings {}

/// Concentration-driven diffusion.
#[derive(Debug, Clone, Copy, Default)]
pub struct FickianDiffusionSettings;

impl SettingsSchema for FickianDiffusionSettings {
    const NAME: &'static str = "fickian_diffusion";
    const DOC: &'static str = "\
Solves for pore concentration from throat diffusive conductance";

    fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
        TransportSettings::declare(store)?;
        store.set("quantity", "pore.concentration")?;
        store.set("conductance", "throat.diffusive_conductance")
    }

    fn doc() -> String {
        format!("{}\n{}", TransportSettings::doc(), Self::DOC)
    }
}

impl TransportSchema for FickianDiffusionSettings {}

/// Transport with non-linear source terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactiveTransportSettings;

impl SettingsSchema for ReactiveTransportSettings {
    const NAME: &'static str = "reactive_transport";
    const DOC: &'static str = "\
sources : list[str]
    Names of the pore-scale source terms
relaxation_factor : float
    Under-relaxation applied to the quantity between iterations
newton_maxiter : int
    Maximum number of Newton iterations
f_rtol : float
    Relative tolerance on the residual
x_rtol : float
    Relative tolerance on the solution";

    fn declare(store: &mut SettingsStore) -> SettingsResult<()> {
        TransportSettings::declare(store)?;
        store.declare(
            "sources",
            ValueType::list_of(ValueType::Str),
            Value::List(Vec::new()),
        )?;
        store.declare("relaxation_factor", ValueType::Float, 1.0)?;
        store.declare("newton_maxiter", ValueType::Int, 5000)?;
        store.declare("f_rtol", ValueType::Float, 1e-6)?;
        store.declare("x_rtol", ValueType::Float, 1e-6)
    }

    fn doc() -> String {
        format!("{}\n{}", TransportSettings::doc(), Self::DOC)
    }
}

impl TransportSchema for ReactiveTransportSettings {}

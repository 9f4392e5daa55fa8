//! Settings workflows as used when setting up a permeability calculation.

use pn_algorithms::{
    Algorithm, AlgorithmError, AlgorithmKind, ReactiveTransportSettings, StokesFlowSettings,
};
use pn_settings::{SettingsError, SettingsView, Value};

#[test]
fn stokes_flow_configured_from_file() {
    let path = std::env::temp_dir().join("pn_algorithms_stokes.yaml");
    std::fs::write(&path, "phase: water\ncache: false\n").unwrap();

    let overrides = pn_settings::load_yaml(&path).unwrap();
    let sf = Algorithm::<StokesFlowSettings>::with_overrides(overrides).unwrap();

    assert_eq!(sf.settings().get("phase").unwrap(), Value::from("water"));
    assert_eq!(sf.settings().get("cache").unwrap(), Value::Bool(false));
    assert_eq!(sf.quantity().unwrap(), "pore.pressure");
    assert_eq!(sf.conductance().unwrap(), "throat.hydraulic_conductance");
}

#[test]
fn rejected_override_reports_option_name() {
    let err = Algorithm::<ReactiveTransportSettings>::with_overrides([(
        "newton_maxiter",
        Value::from(1e3),
    )])
    .unwrap_err();

    match err {
        AlgorithmError::Settings(SettingsError::TypeMismatch {
            name,
            expected,
            found,
        }) => {
            assert_eq!(name, "newton_maxiter");
            assert_eq!(expected, "int");
            assert!(found.starts_with("float"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reactive_transport_sources() {
    let rt = Algorithm::<ReactiveTransportSettings>::new().unwrap();
    rt.set_phase("air").unwrap();
    rt.set_source("pore.reaction_A").unwrap();
    rt.set_source("pore.reaction_B").unwrap();
    assert_eq!(rt.sources().unwrap(), ["pore.reaction_A", "pore.reaction_B"]);

    assert!(rt.settings().push("sources", 100).is_err());
    assert_eq!(rt.sources().unwrap().len(), 2);
}

#[test]
fn copied_settings_do_not_affect_the_algorithm() {
    let sf = Algorithm::<StokesFlowSettings>::new().unwrap();
    let copy: SettingsView = sf.settings().deep_copy();
    copy.set("phase", "oil").unwrap();

    assert_eq!(sf.settings().get_as::<String>("phase").unwrap(), "");
    assert_eq!(copy.get("_uuid").unwrap(), Value::from(sf.uuid().unwrap()));
}

#[test]
fn every_kind_prints_a_table() {
    for kind in AlgorithmKind::ALL {
        let settings = kind.settings().unwrap();
        let table = settings.to_string();
        for name in settings.names() {
            assert!(table.contains(&name), "{kind}: {name} missing from table");
        }
    }
}

//! Lookup of built-in algorithm schemas by name.

use std::fmt;
use std::str::FromStr;

use pn_settings::{SettingsResult, SettingsSchema, SettingsView};

use crate::error::AlgorithmError;
use crate::schemas::{
    AlgorithmSettings, FickianDiffusionSettings, ReactiveTransportSettings, StokesFlowSettings,
    TransportSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Generic,
    Transport,
    StokesFlow,
    FickianDiffusion,
    ReactiveTransport,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Generic,
        AlgorithmKind::Transport,
        AlgorithmKind::StokesFlow,
        AlgorithmKind::FickianDiffusion,
        AlgorithmKind::ReactiveTransport,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Generic => AlgorithmSettings::NAME,
            AlgorithmKind::Transport => TransportSettings::NAME,
            AlgorithmKind::StokesFlow => StokesFlowSettings::NAME,
            AlgorithmKind::FickianDiffusion => FickianDiffusionSettings::NAME,
            AlgorithmKind::ReactiveTransport => ReactiveTransportSettings::NAME,
        }
    }

    /// Fresh settings with the schema's defaults.
    pub fn settings(self) -> SettingsResult<SettingsView> {
        match self {
            AlgorithmKind::Generic => SettingsView::from_schema::<AlgorithmSettings>(),
            AlgorithmKind::Transport => SettingsView::from_schema::<TransportSettings>(),
            AlgorithmKind::StokesFlow => SettingsView::from_schema::<StokesFlowSettings>(),
            AlgorithmKind::FickianDiffusion => {
                SettingsView::from_schema::<FickianDiffusionSettings>()
            }
            AlgorithmKind::ReactiveTransport => {
                SettingsView::from_schema::<ReactiveTransportSettings>()
            }
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| AlgorithmError::UnknownKind {
                name: s.to_string(),
            })
    }
}

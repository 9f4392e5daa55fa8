//! pn-algorithms: settings carried by pore-network transport algorithms.
//!
//! The algorithms here hold configuration only; solving is done elsewhere.
//!
//! # Example
//!
//! ```
//! use pn_algorithms::{Algorithm, StokesFlowSettings};
//!
//! let alg = Algorithm::<StokesFlowSettings>::new().unwrap();
//! alg.set_phase("water").unwrap();
//! assert_eq!(alg.quantity().unwrap(), "pore.pressure");
//! assert!(!alg.settings().names().iter().any(|n| n == "_uuid"));
//! ```

pub mod algorithm;
pub mod error;
pub mod kind;
pub mod schemas;

pub use algorithm::Algorithm;
pub use error::{AlgorithmError, AlgorithmResult};
pub use kind::AlgorithmKind;
pub use schemas::{
    AlgorithmSettings, FickianDiffusionSettings, ReactiveTransportSettings, StokesFlowSettings,
    TransportSchema, TransportSettings,
};

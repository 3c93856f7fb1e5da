//! Atmospheric composition as a gas → concentration mapping

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Atmospheric composition of a planet
///
/// Maps a gas species name (e.g. `"CO2"`) to a unitless concentration.
/// Keys are unique by construction and iteration is ordered by gas name.
/// Concentrations must be finite; no normalization is applied.
///
/// # Examples
/// ```
/// use celestial::Atmosphere;
///
/// let air = Atmosphere::new([("N2", 0.78), ("O2", 0.21)]).unwrap();
/// assert_eq!(air.len(), 2);
/// assert_eq!(air.concentration("O2"), Some(0.21));
/// assert!(Atmosphere::new([("CO2", f64::NAN)]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct Atmosphere(BTreeMap<String, f64>);

impl Atmosphere {
    /// An atmosphere with no gases (airless body)
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Build an atmosphere from `(gas, concentration)` pairs
    ///
    /// A repeated gas keeps the last concentration given.
    pub fn new<I, K>(gases: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (gas, concentration) in gases {
            let gas = gas.into();
            if !concentration.is_finite() {
                return Err(ValidationError::InvalidAtmosphere {
                    gas,
                    value: concentration,
                });
            }
            map.insert(gas, concentration);
        }
        Ok(Self(map))
    }

    /// Earth's dominant constituents by volume fraction
    pub fn earth_like() -> Self {
        Self(BTreeMap::from([
            ("N2".to_string(), 0.78),
            ("O2".to_string(), 0.21),
            ("CO2".to_string(), 0.0004),
        ]))
    }

    /// Concentration of a gas, if present
    pub fn concentration(&self, gas: &str) -> Option<f64> {
        self.0.get(gas).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(gas, concentration)` pairs in gas-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(gas, c)| (gas.as_str(), *c))
    }
}

impl TryFrom<BTreeMap<String, f64>> for Atmosphere {
    type Error = ValidationError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::new(map)
    }
}

impl From<Atmosphere> for BTreeMap<String, f64> {
    fn from(atmosphere: Atmosphere) -> Self {
        atmosphere.0
    }
}

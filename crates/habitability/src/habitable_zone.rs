//! Habitable zone boundaries for a star
//!
//! Five empirical flux limits from Kopparapu et al. (2013) plus the classical
//! 1.1 / 0.53 S☉ pair. Every boundary is scaled by a single age and activity
//! correction after all base distances are known.
//!
//! # References
//! - Kopparapu et al. (2013) - "Habitable Zones around Main-sequence Stars:
//!   New Estimates", ApJ 765, 131

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use celestial::{CelestialObject, Star};
use units::constants::SOLAR_TEMPERATURE_K;

use crate::error::{ensure_finite, NumericError, PhysicsError};

/// Reference temperature of the flux polynomials (K)
pub const REFERENCE_TEMPERATURE: f64 = SOLAR_TEMPERATURE_K;
/// Age at which no age correction applies (Gyr)
pub const REFERENCE_AGE: f64 = 4.6;

const CLASSIC_INNER_FLUX: f64 = 1.1;
const CLASSIC_OUTER_FLUX: f64 = 0.53;
const AGE_CORRECTION_PER_GYR: f64 = 0.1;
const ACTIVITY_CORRECTION: f64 = 0.2;

/// Habitable zone model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HzModel {
    RecentVenus,
    RunawayGreenhouse,
    MoistGreenhouse,
    MaximumGreenhouse,
    EarlyMars,
    Classic,
}

impl HzModel {
    /// Every model, in reporting order
    pub const ALL: [HzModel; 6] = [
        Self::RecentVenus,
        Self::RunawayGreenhouse,
        Self::MoistGreenhouse,
        Self::MaximumGreenhouse,
        Self::EarlyMars,
        Self::Classic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::RecentVenus => "recent_venus",
            Self::RunawayGreenhouse => "runaway_greenhouse",
            Self::MoistGreenhouse => "moist_greenhouse",
            Self::MaximumGreenhouse => "maximum_greenhouse",
            Self::EarlyMars => "early_mars",
            Self::Classic => "classic",
        }
    }

    /// Flux polynomial for the empirical models; `None` for the classical pair
    pub fn coefficients(&self) -> Option<&'static FluxCoefficients> {
        FLUX_COEFFICIENTS
            .iter()
            .find(|(model, _)| model == self)
            .map(|(_, coefficients)| coefficients)
    }
}

impl fmt::Display for HzModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Effective-flux polynomial coefficients of one boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluxCoefficients {
    /// Effective flux at the reference temperature (S/S☉)
    pub s_eff: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl FluxCoefficients {
    /// S_eff(T) = S_eff☉ + a·t + b·t² + c·t³ + d·t⁴ + e·t⁵, with t = T - 5780
    pub fn effective_flux(&self, temperature: f64) -> f64 {
        let t = temperature - REFERENCE_TEMPERATURE;
        self.s_eff
            + self.a * t
            + self.b * t.powi(2)
            + self.c * t.powi(3)
            + self.d * t.powi(4)
            + self.e * t.powi(5)
    }
}

/// Kopparapu et al. (2013) Table 3 coefficients
pub static FLUX_COEFFICIENTS: [(HzModel, FluxCoefficients); 5] = [
    (
        HzModel::RecentVenus,
        FluxCoefficients {
            s_eff: 1.776,
            a: 1.776e-4,
            b: 2.136e-4,
            c: 2.533e-8,
            d: -1.332e-11,
            e: -3.097e-15,
        },
    ),
    (
        HzModel::RunawayGreenhouse,
        FluxCoefficients {
            s_eff: 1.107,
            a: 1.107e-4,
            b: 1.332e-4,
            c: 1.580e-8,
            d: -8.308e-12,
            e: -1.931e-15,
        },
    ),
    (
        HzModel::MoistGreenhouse,
        FluxCoefficients {
            s_eff: 1.380,
            a: 1.380e-4,
            b: 1.685e-4,
            c: 3.731e-9,
            d: -2.787e-12,
            e: -1.673e-15,
        },
    ),
    (
        HzModel::MaximumGreenhouse,
        FluxCoefficients {
            s_eff: 0.356,
            a: 6.171e-5,
            b: 1.698e-5,
            c: 3.198e-9,
            d: -5.575e-12,
            e: -3.008e-15,
        },
    ),
    (
        HzModel::EarlyMars,
        FluxCoefficients {
            s_eff: 0.320,
            a: 5.547e-5,
            b: 1.526e-5,
            c: 2.874e-9,
            d: -5.011e-12,
            e: -2.695e-15,
        },
    ),
];

/// A single boundary distance or an inner/outer pair, in AU
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Boundary {
    Distance(f64),
    Range { inner: f64, outer: f64 },
}

/// Age and activity scaling applied to every boundary
///
/// `(1 + (age - 4.6) × 0.1) × (1 - activity × 0.2)`
pub fn correction_factor(age: f64, activity: f64) -> f64 {
    let age_factor = 1.0 + (age - REFERENCE_AGE) * AGE_CORRECTION_PER_GYR;
    let activity_factor = 1.0 - activity * ACTIVITY_CORRECTION;
    age_factor * activity_factor
}

/// Computed habitable zone boundaries of one star
///
/// Boundaries are available per model through [`HabitableZone::get`] or as
/// the paired views used for classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitableZone {
    /// Empirical boundaries in `FLUX_COEFFICIENTS` order
    empirical: [f64; 5],
    classic_inner: f64,
    classic_outer: f64,
    correction_factor: f64,
}

impl HabitableZone {
    pub fn get(&self, model: HzModel) -> Boundary {
        match model {
            HzModel::Classic => Boundary::Range {
                inner: self.classic_inner,
                outer: self.classic_outer,
            },
            HzModel::RecentVenus => Boundary::Distance(self.empirical[0]),
            HzModel::RunawayGreenhouse => Boundary::Distance(self.empirical[1]),
            HzModel::MoistGreenhouse => Boundary::Distance(self.empirical[2]),
            HzModel::MaximumGreenhouse => Boundary::Distance(self.empirical[3]),
            HzModel::EarlyMars => Boundary::Distance(self.empirical[4]),
        }
    }

    /// `(model, boundary)` pairs in [`HzModel::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (HzModel, Boundary)> + '_ {
        HzModel::ALL.into_iter().map(move |model| (model, self.get(model)))
    }

    /// Classical `(inner, outer)` in AU
    pub fn classic(&self) -> (f64, f64) {
        (self.classic_inner, self.classic_outer)
    }

    /// Runaway greenhouse to maximum greenhouse, in AU
    pub fn conservative(&self) -> (f64, f64) {
        (self.empirical[1], self.empirical[3])
    }

    /// Recent Venus to early Mars, in AU
    pub fn optimistic(&self) -> (f64, f64) {
        (self.empirical[0], self.empirical[4])
    }

    /// Scaling that was applied to every base boundary
    pub fn correction_factor(&self) -> f64 {
        self.correction_factor
    }
}

impl Serialize for HabitableZone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(HzModel::ALL.len() + 1))?;
        for (model, boundary) in self.iter() {
            map.serialize_entry(model.name(), &boundary)?;
        }
        map.serialize_entry("correction_factor", &self.correction_factor)?;
        map.end()
    }
}

/// Distance where the received flux equals `flux` (S☉), in AU
fn flux_distance(luminosity: f64, flux: f64, model: HzModel) -> Result<f64, NumericError> {
    if flux <= 0.0 || flux.is_nan() {
        return Err(NumericError::NonPositiveFlux {
            model: model.name(),
            flux,
        });
    }
    ensure_finite(model.name(), (luminosity / flux).sqrt())
}

fn corrected(quantity: &'static str, distance: f64, factor: f64) -> Result<f64, NumericError> {
    ensure_finite(quantity, distance * factor)
}

fn compute(luminosity: f64, temperature: f64, factor: f64) -> Result<HabitableZone, NumericError> {
    let mut empirical = [0.0; 5];
    for (slot, (model, coefficients)) in empirical.iter_mut().zip(FLUX_COEFFICIENTS.iter()) {
        *slot = flux_distance(luminosity, coefficients.effective_flux(temperature), *model)?;
    }
    let classic_inner = flux_distance(luminosity, CLASSIC_INNER_FLUX, HzModel::Classic)?;
    let classic_outer = flux_distance(luminosity, CLASSIC_OUTER_FLUX, HzModel::Classic)?;

    // Correction runs only once every base value is known
    for (slot, (model, _)) in empirical.iter_mut().zip(FLUX_COEFFICIENTS.iter()) {
        *slot = corrected(model.name(), *slot, factor)?;
    }

    Ok(HabitableZone {
        empirical,
        classic_inner: corrected("classic", classic_inner, factor)?,
        classic_outer: corrected("classic", classic_outer, factor)?,
        correction_factor: factor,
    })
}

/// Calculate every habitable zone boundary for `star`
///
/// # Errors
/// Fails with [`PhysicsError::HabitableZone`] when a flux polynomial is not
/// positive at the star's temperature or a boundary is not finite. No
/// partial result is returned.
///
/// # Examples
/// ```
/// use celestial::StarParams;
/// use habitability::habitable_zone::calculate_habitable_zone;
///
/// let sun = StarParams::solar("Sun").build().unwrap();
/// let zone = calculate_habitable_zone(&sun).unwrap();
///
/// let (inner, outer) = zone.classic();
/// assert!((inner - 0.953).abs() < 0.001);
/// assert!((outer - 1.374).abs() < 0.001);
/// ```
pub fn calculate_habitable_zone(star: &Star) -> Result<HabitableZone, PhysicsError> {
    let factor = correction_factor(star.age(), star.activity());
    let zone = compute(star.luminosity(), star.temperature(), factor)
        .map_err(|source| PhysicsError::HabitableZone { source })?;

    tracing::debug!(
        star = %star.name(),
        factor,
        conservative_inner = zone.conservative().0,
        conservative_outer = zone.conservative().1,
        "computed habitable zone"
    );
    Ok(zone)
}

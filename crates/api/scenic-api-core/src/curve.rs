//! The closed catalog of easing curves.
//!
//! Curves are named, pure functions from normalized progress to eased output.
//! They cross the simulation/viewer boundary by name only, so the catalog is
//! closed and the formulas are normative: a viewer implemented in another
//! language must reproduce them, including the special-cased endpoints of
//! `elastic`, to replay identical frames.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SceneError;

/// Period constant of the damped sinusoid behind [`Curve::Elastic`].
const ELASTIC_PERIOD: f64 = 0.3;

/// A named easing function `f: [0,1] -> R`.
///
/// `f(0) = 0` and `f(1) = 1` for every curve except [`Curve::Bell`], which is
/// zero at both ends and peaks at `f(0.5) = 1`. Inputs outside `[0,1]` are
/// extrapolated by the same formulas, never rejected.
///
/// Absence of a curve is not part of this enum: `Option<Curve>::None` is the
/// wire sentinel for an instantaneous change, distinct from [`Curve::Linear`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Identity easing, `t`.
    Linear,
    /// Piecewise quadratic accelerate/decelerate, split at `t = 0.5`.
    Ease,
    /// Damped sinusoid overshoot that settles at 1.
    Elastic,
    /// Parabola through zero at both ends, peak 1 at `t = 0.5`.
    Bell,
}

impl Curve {
    pub const ALL: [Curve; 4] = [Curve::Linear, Curve::Ease, Curve::Elastic, Curve::Bell];

    /// Wire name of this curve.
    pub fn as_str(self) -> &'static str {
        match self {
            Curve::Linear => "linear",
            Curve::Ease => "ease",
            Curve::Elastic => "elastic",
            Curve::Bell => "bell",
        }
    }

    /// Evaluate the curve at normalized progress `t`.
    pub fn eval(self, t: f64) -> f64 {
        match self {
            Curve::Linear => t,
            Curve::Ease => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Curve::Elastic => {
                // Endpoints are exact, not the formula's limit.
                if t == 0.0 {
                    return 0.0;
                }
                if t == 1.0 {
                    return 1.0;
                }
                let p = ELASTIC_PERIOD;
                // Phase for unit amplitude: (p / 2pi) * asin(1) = p / 4.
                let s = p / 4.0;
                (2.0_f64).powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() + 1.0
            }
            Curve::Bell => {
                let d = 2.0 * (t - 0.5);
                1.0 - d * d
            }
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Curve {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Curve::Linear),
            "ease" => Ok(Curve::Ease),
            "elastic" => Ok(Curve::Elastic),
            "bell" => Ok(Curve::Bell),
            other => Err(SceneError::UnknownCurve {
                name: other.to_string(),
            }),
        }
    }
}

// Serde support: serialize as the wire name, deserialize strictly. An unknown
// name is a fatal decode error, never defaulted to "no curve".
impl Serialize for Curve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Curve {
    fn deserialize<D>(deserializer: D) -> Result<Curve, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Curve::from_str(&s).map_err(de::Error::custom)
    }
}

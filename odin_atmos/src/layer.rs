/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::constants::HYDROSTATIC_CONSTANT;
use crate::errors::{OdinAtmosError,Result};

/// immutable reference data for one barometric layer
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LayerRecord {
    pub base_altitude_m: f64,
    pub base_temperature_k: f64,
    /// temperature change per meter within the layer, 0.0 for isothermal layers
    pub lapse_rate_k_per_m: f64,
    pub base_pressure_pa: f64,
}

impl LayerRecord {
    pub const fn new (base_altitude_m: f64, base_temperature_k: f64, lapse_rate_k_per_m: f64, base_pressure_pa: f64)->Self {
        LayerRecord { base_altitude_m, base_temperature_k, lapse_rate_k_per_m, base_pressure_pa }
    }

    #[inline]
    pub fn is_isothermal (&self)->bool {
        self.lapse_rate_k_per_m == 0.0
    }

    /// standard (offset free) temperature at given altitude, extending the layer formula if the altitude is outside
    #[inline]
    pub fn temperature_at (&self, altitude_m: f64)->f64 {
        self.base_temperature_k + self.lapse_rate_k_per_m * (altitude_m - self.base_altitude_m)
    }

    /// barometric pressure at given altitude.
    /// `temperature_k` is the (possibly offset-adjusted) temperature at that altitude. It only enters the
    /// gradient branch, the isothermal branch is a function of the base temperature alone
    pub fn pressure_at (&self, altitude_m: f64, temperature_k: f64)->f64 {
        if self.is_isothermal() {
            self.base_pressure_pa * (-HYDROSTATIC_CONSTANT * (altitude_m - self.base_altitude_m) / self.base_temperature_k).exp()
        } else {
            self.base_pressure_pa * (self.base_temperature_k / temperature_k).powf( HYDROSTATIC_CONSTANT / self.lapse_rate_k_per_m)
        }
    }
}

impl fmt::Display for LayerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}m: {}K, {}K/m, {}Pa", self.base_altitude_m, self.base_temperature_k, self.lapse_rate_k_per_m, self.base_pressure_pa)
    }
}

/// the seven layers of the 1975 US Standard Atmosphere up to 87km
pub static US1975_LAYERS: [LayerRecord;7] = [
    LayerRecord::new(     0.0, 288.15, -0.0065, 101325.0 ),  // troposphere
    LayerRecord::new( 11000.0, 216.65,  0.0,     22632.1 ),  // tropopause
    LayerRecord::new( 20000.0, 216.65,  0.001,    5474.89 ), // stratosphere
    LayerRecord::new( 32000.0, 228.65,  0.0028,    868.019 ),
    LayerRecord::new( 47000.0, 270.65,  0.0,       110.906 ), // stratopause
    LayerRecord::new( 51000.0, 270.65, -0.0028,     66.9389 ), // mesosphere
    LayerRecord::new( 71000.0, 214.65, -0.002,       3.95642 ),
];

/// index of the layer with the greatest base altitude that is <= `altitude_m`.
/// An altitude that equals a threshold resolves to the upper layer, altitudes below the first
/// base resolve to the first layer (extrapolation downwards is allowed).
/// `layers` has to be non-empty and sorted by ascending base altitude
#[inline]
pub fn resolve_layer (layers: &[LayerRecord], altitude_m: f64)->usize {
    layers.partition_point( |l| l.base_altitude_m <= altitude_m).saturating_sub(1)
}

/// check that each layer's base temperature and pressure match what the previous layer's formulae
/// produce at this base altitude, within relative tolerance `rel_tol`
pub fn check_continuity (layers: &[LayerRecord], rel_tol: f64)->Result<()> {
    for w in layers.windows(2) {
        let (lower, upper) = (&w[0], &w[1]);
        let h = upper.base_altitude_m;

        let t = lower.temperature_at(h);
        if !is_within( t, upper.base_temperature_k, rel_tol) {
            return Err( OdinAtmosError::Discontinuity { boundary_m: h, quantity: "temperature", expected: upper.base_temperature_k, actual: t })
        }

        let p = lower.pressure_at( h, t);
        if !is_within( p, upper.base_pressure_pa, rel_tol) {
            return Err( OdinAtmosError::Discontinuity { boundary_m: h, quantity: "pressure", expected: upper.base_pressure_pa, actual: p })
        }
    }
    Ok(())
}

#[inline]
fn is_within (actual: f64, expected: f64, rel_tol: f64)->bool {
    ((actual - expected) / expected).abs() <= rel_tol
}

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
use crate::constants::*;
use crate::layer::LayerRecord;

/// the atmospheric properties at a given altitude. This is a pure value that is re-computed for each
/// query - it does not have an identity and does not change once created.
///
/// Note that `dynamic_viscosity_pa_s` is the *dynamic* viscosity μ obtained from Sutherland's law. Use
/// [`AtmosphereState::kinematic_viscosity_m2_per_s`] if you need ν = μ/ρ
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct AtmosphereState {
    pub altitude_m: f64,
    pub temperature_k: f64,
    pub pressure_pa: f64,
    pub density_kg_per_m3: f64,
    pub speed_of_sound_m_per_s: f64,
    pub dynamic_viscosity_pa_s: f64,
}

impl AtmosphereState {
    /// compute the state for an altitude that lies within (or below) the given layer.
    /// This does not check the altitude against any ceiling, which is the responsibility of the model
    pub fn from_layer (layer: &LayerRecord, altitude_m: f64, temperature_offset_k: f64)->Self {
        let temperature_k = layer.temperature_at(altitude_m) + temperature_offset_k;
        let pressure_pa = layer.pressure_at( altitude_m, temperature_k);

        AtmosphereState {
            altitude_m,
            temperature_k,
            pressure_pa,
            density_kg_per_m3: AIR_MOLAR_MASS * pressure_pa / (GAS_CONSTANT * temperature_k),
            speed_of_sound_m_per_s: (SPECIFIC_HEAT_RATIO * GAS_CONSTANT * temperature_k / AIR_MOLAR_MASS).sqrt(),
            dynamic_viscosity_pa_s: sutherland_viscosity(temperature_k),
        }
    }

    #[inline] pub fn dynamic_pressure (&self, velocity_m_per_s: f64)->f64 { dynamic_pressure( self, velocity_m_per_s) }

    #[inline] pub fn mach_number (&self, velocity_m_per_s: f64)->f64 { mach_number( self, velocity_m_per_s) }

    #[inline] pub fn reynolds_number (&self, velocity_m_per_s: f64, reference_length_m: f64)->f64 {
        reynolds_number( self, velocity_m_per_s, reference_length_m)
    }

    /// ν = μ/ρ in m²/s
    #[inline] pub fn kinematic_viscosity_m2_per_s (&self)->f64 {
        self.dynamic_viscosity_pa_s / self.density_kg_per_m3
    }
}

impl fmt::Display for AtmosphereState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "altitude = {} m", self.altitude_m)?;
        writeln!(f, "temperature = {} K", self.temperature_k)?;
        writeln!(f, "pressure = {} Pa", self.pressure_pa)?;
        writeln!(f, "density = {} kg/m³", self.density_kg_per_m3)?;
        writeln!(f, "speed_of_sound = {} m/s", self.speed_of_sound_m_per_s)?;
        write!(f, "dynamic_viscosity = {} Pa·s", self.dynamic_viscosity_pa_s)
    }
}

/// Sutherland's law for the dynamic viscosity of air in Pa·s
#[inline]
pub fn sutherland_viscosity (temperature_k: f64)->f64 {
    SUTHERLAND_LAMBDA * temperature_k.powf(1.5) / (temperature_k + SUTHERLAND_TEMPERATURE)
}

/* #region derived queries ****************************************************************/

/// q = ½ρv² in Pa
#[inline]
pub fn dynamic_pressure (state: &AtmosphereState, velocity_m_per_s: f64)->f64 {
    0.5 * state.density_kg_per_m3 * velocity_m_per_s * velocity_m_per_s
}

/// Re = ρvl/μ, based on dynamic viscosity.
/// It is the caller's responsibility to provide a positive `reference_length_m` - zero or negative
/// lengths are not rejected and just produce a meaningless number
#[inline]
pub fn reynolds_number (state: &AtmosphereState, velocity_m_per_s: f64, reference_length_m: f64)->f64 {
    state.density_kg_per_m3 * velocity_m_per_s * reference_length_m / state.dynamic_viscosity_pa_s
}

#[inline]
pub fn mach_number (state: &AtmosphereState, velocity_m_per_s: f64)->f64 {
    velocity_m_per_s / state.speed_of_sound_m_per_s
}

/* #endregion derived queries */

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

//! typed access to atmosphere quantities. The core API works on plain SI f64 values, these are
//! the conversions for callers that use uom quantities

use uom::si::{
    f64::{Length,ThermodynamicTemperature,Pressure,MassDensity,Velocity,DynamicViscosity},
    length::meter,
    thermodynamic_temperature::kelvin,
    pressure::pascal,
    mass_density::kilogram_per_cubic_meter,
    velocity::meter_per_second,
    dynamic_viscosity::pascal_second,
};
use crate::errors::Result;
use crate::model::AtmosphereModel;
use crate::state::AtmosphereState;

impl AtmosphereState {
    #[inline] pub fn altitude (&self)->Length { Length::new::<meter>(self.altitude_m) }
    #[inline] pub fn temperature (&self)->ThermodynamicTemperature { ThermodynamicTemperature::new::<kelvin>(self.temperature_k) }
    #[inline] pub fn pressure (&self)->Pressure { Pressure::new::<pascal>(self.pressure_pa) }
    #[inline] pub fn density (&self)->MassDensity { MassDensity::new::<kilogram_per_cubic_meter>(self.density_kg_per_m3) }
    #[inline] pub fn speed_of_sound (&self)->Velocity { Velocity::new::<meter_per_second>(self.speed_of_sound_m_per_s) }
    #[inline] pub fn dynamic_viscosity (&self)->DynamicViscosity { DynamicViscosity::new::<pascal_second>(self.dynamic_viscosity_pa_s) }

    /// dynamic pressure for a uom velocity
    pub fn dynamic_pressure_at (&self, velocity: Velocity)->Pressure {
        Pressure::new::<pascal>( self.dynamic_pressure( velocity.get::<meter_per_second>()))
    }
}

/// evaluate `model` for a uom altitude
pub fn evaluate_at<M: AtmosphereModel + ?Sized> (model: &M, altitude: Length)->Result<AtmosphereState> {
    model.evaluate( altitude.get::<meter>())
}

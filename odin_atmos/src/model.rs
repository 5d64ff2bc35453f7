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

use tracing::debug;
use crate::constants::US1975_CEILING;
use crate::errors::{OdinAtmosError,Result,config_error};
use crate::layer::{LayerRecord,US1975_LAYERS,resolve_layer,check_continuity};
use crate::state::AtmosphereState;

/// the strategy interface for atmosphere models. Which model is used is decided when it is constructed,
/// evaluation is a pure function of altitude and temperature offset.
/// Implementors have to be thread safe so that models can be shared between concurrent evaluators
pub trait AtmosphereModel: Send + Sync {
    fn name (&self)->&str;

    /// max altitude in meters for which the model is valid
    fn ceiling_m (&self)->f64;

    fn evaluate_with_offset (&self, altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState>;

    fn evaluate (&self, altitude_m: f64)->Result<AtmosphereState> {
        self.evaluate_with_offset( altitude_m, 0.0)
    }
}

/// the common evaluation of piecewise barometric models
fn evaluate_layers (layers: &[LayerRecord], ceiling_m: f64, altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState> {
    debug_assert!( altitude_m.is_finite(), "non-finite altitude {altitude_m}");

    if altitude_m > ceiling_m {
        debug!("rejecting extrapolation to {altitude_m}m (ceiling {ceiling_m}m)");
        return Err( OdinAtmosError::ModelExtrapolation { altitude_m, ceiling_m })
    }

    let layer = &layers[ resolve_layer( layers, altitude_m)];
    Ok( AtmosphereState::from_layer( layer, altitude_m, temperature_offset_k) )
}

/* #region US Standard Atmosphere 1975 ***************************************************/

/// the seven layer 1975 US Standard Atmosphere up to 87km.
/// Altitudes below 0m are accepted and extrapolate the troposphere (e.g. for depressions or trenches)
#[derive(Debug,Clone,Copy,Default)]
pub struct UsStandardAtmosphere1975;

impl AtmosphereModel for UsStandardAtmosphere1975 {
    fn name (&self)->&str { "US Standard Atmosphere 1975" }

    fn ceiling_m (&self)->f64 { US1975_CEILING }

    fn evaluate_with_offset (&self, altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState> {
        evaluate_layers( &US1975_LAYERS, US1975_CEILING, altitude_m, temperature_offset_k)
    }
}

/// evaluate the 1975 US Standard Atmosphere at given altitude
pub fn evaluate (altitude_m: f64)->Result<AtmosphereState> {
    UsStandardAtmosphere1975.evaluate( altitude_m)
}

/// evaluate the 1975 US Standard Atmosphere at given altitude, with a temperature offset in Kelvin.
/// Note the offset does affect pressure in gradient layers but not in isothermal layers
pub fn evaluate_with_offset (altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState> {
    UsStandardAtmosphere1975.evaluate_with_offset( altitude_m, temperature_offset_k)
}

/* #endregion US Standard Atmosphere 1975 */

/* #region generic layered profiles ******************************************************/

/// a piecewise barometric model with an owned, validated layer table
#[derive(Debug,Clone,PartialEq)]
pub struct LayeredAtmosphere {
    name: String,
    layers: Vec<LayerRecord>,
    ceiling_m: f64,
}

impl LayeredAtmosphere {
    /// create a new model after checking that layers are non-empty, start at or below 0m, are strictly
    /// ascending, have positive base values, lie below the ceiling and are continuous within `rel_tol`
    pub fn new (name: impl Into<String>, layers: Vec<LayerRecord>, ceiling_m: f64, rel_tol: f64)->Result<Self> {
        let name = name.into();

        let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
            return Err( config_error!("profile '{}' has no layers", name))
        };
        if first.base_altitude_m > 0.0 {
            return Err( config_error!("profile '{}' has to start at or below 0m, not {}m", name, first.base_altitude_m))
        }
        if let Some(w) = layers.windows(2).find( |w| w[1].base_altitude_m <= w[0].base_altitude_m) {
            return Err( config_error!("profile '{}' layer bases not ascending at {}m", name, w[1].base_altitude_m))
        }
        if let Some(l) = layers.iter().find( |l| !(l.base_temperature_k > 0.0 && l.base_pressure_pa > 0.0)) {
            return Err( config_error!("profile '{}' layer {} has non-positive base values", name, l))
        }
        if !(ceiling_m > last.base_altitude_m) {
            return Err( config_error!("profile '{}' ceiling {}m not above last layer base {}m", name, ceiling_m, last.base_altitude_m))
        }
        check_continuity( &layers, rel_tol)?;

        debug!("created atmosphere profile '{}' with {} layers up to {}m", name, layers.len(), ceiling_m);
        Ok( LayeredAtmosphere { name, layers, ceiling_m } )
    }

    /// an owned copy of the 1975 US Standard Atmosphere
    pub fn us_standard_1975 ()->Self {
        LayeredAtmosphere {
            name: UsStandardAtmosphere1975.name().to_string(),
            layers: US1975_LAYERS.to_vec(),
            ceiling_m: US1975_CEILING
        }
    }

    pub fn layers (&self)->&[LayerRecord] { &self.layers }

    /// the layer that is used for given altitude
    pub fn layer_at (&self, altitude_m: f64)->&LayerRecord {
        &self.layers[ resolve_layer( &self.layers, altitude_m)]
    }
}

impl AtmosphereModel for LayeredAtmosphere {
    fn name (&self)->&str { &self.name }

    fn ceiling_m (&self)->f64 { self.ceiling_m }

    fn evaluate_with_offset (&self, altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState> {
        evaluate_layers( &self.layers, self.ceiling_m, altitude_m, temperature_offset_k)
    }
}

/* #endregion generic layered profiles */

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

//! configuration of custom layered atmosphere profiles, stored as RON files like
//! ```text
//! LayeredAtmosphereConfig(
//!     name: "hot day",
//!     ceiling_m: 11000.0,
//!     layers: [
//!         ( base_altitude_m: 0.0, base_temperature_k: 303.15, lapse_rate_k_per_m: -0.0065, base_pressure_pa: 101325.0 ),
//!     ],
//! )
//! ```

use std::{fs::File, io::BufReader, path::Path};
use lazy_static::lazy_static;
use ron::ser::PrettyConfig;
use serde::{Serialize,Deserialize};
use tracing::debug;

use crate::constants::{US1975_CEILING,DEFAULT_CONTINUITY_TOLERANCE};
use crate::errors::Result;
use crate::layer::{LayerRecord,US1975_LAYERS};
use crate::model::{AtmosphereModel,LayeredAtmosphere,UsStandardAtmosphere1975};

lazy_static! {
    static ref PROFILE_RON: PrettyConfig = PrettyConfig::new()
        .struct_names(true)
        .compact_structs(true)
        .depth_limit(3);
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct LayeredAtmosphereConfig {
    pub name: String,
    pub ceiling_m: f64,
    pub layers: Vec<LayerRecord>,

    /// max relative deviation of base temperature/pressure from the values of the layer below
    #[serde(default="default_continuity_tolerance")]
    pub continuity_tolerance: f64,
}

fn default_continuity_tolerance()->f64 { DEFAULT_CONTINUITY_TOLERANCE }

/// the default is the 1975 US Standard Atmosphere
impl Default for LayeredAtmosphereConfig {
    fn default()->Self {
        LayeredAtmosphereConfig {
            name: UsStandardAtmosphere1975.name().to_string(),
            ceiling_m: US1975_CEILING,
            layers: US1975_LAYERS.to_vec(),
            continuity_tolerance: DEFAULT_CONTINUITY_TOLERANCE
        }
    }
}

impl LayeredAtmosphereConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s)? )
    }

    pub fn to_ron_string (&self)->Result<String> {
        Ok( ron::ser::to_string_pretty( self, PROFILE_RON.clone())? )
    }
}

pub fn load_config<P: AsRef<Path>> (path: P)->Result<LayeredAtmosphereConfig> {
    let path = path.as_ref();
    let reader = BufReader::new( File::open(path)?);
    let config: LayeredAtmosphereConfig = ron::de::from_reader(reader)?;
    debug!("loaded atmosphere profile '{}' from {:?}", config.name, path);
    Ok(config)
}

impl LayeredAtmosphere {
    pub fn from_config (config: LayeredAtmosphereConfig)->Result<Self> {
        LayeredAtmosphere::new( config.name, config.layers, config.ceiling_m, config.continuity_tolerance)
    }

    pub fn from_config_file<P: AsRef<Path>> (path: P)->Result<Self> {
        LayeredAtmosphere::from_config( load_config(path)?)
    }
}

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

//! piecewise barometric atmosphere models, most notably the 1975 US Standard Atmosphere up to 87km.
//!
//! All quantities are plain f64 values in SI base units (m, K, Pa, kg/m³, m/s, Pa·s). Evaluation is a
//! pure function of altitude and temperature offset over constant layer tables, i.e. models can be
//! shared and evaluated concurrently without synchronization.
//! ```
//! let state = odin_atmos::evaluate(5000.0).unwrap();
//! assert!( (state.temperature_k - 255.65).abs() < 1e-9);
//! println!("mach: {}", state.mach_number(250.0));
//! ```

pub mod constants;
pub mod errors;
pub mod layer;
pub mod state;
pub mod model;
pub mod config;
pub mod cache;
pub mod uom;

pub use errors::{OdinAtmosError,Result};
pub use layer::{LayerRecord,US1975_LAYERS};
pub use state::{AtmosphereState,dynamic_pressure,reynolds_number,mach_number};
pub use model::{AtmosphereModel,UsStandardAtmosphere1975,LayeredAtmosphere,evaluate,evaluate_with_offset};
pub use config::{LayeredAtmosphereConfig,load_config};
pub use cache::CachedAtmosphere;

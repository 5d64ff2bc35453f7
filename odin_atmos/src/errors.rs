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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OdinAtmosError>;

#[derive(Error,Debug)]
pub enum OdinAtmosError {

    /// the only error `evaluate(..)` can produce. Retrying with the same input yields the same error
    #[error("altitude {altitude_m}m exceeds model ceiling of {ceiling_m}m")]
    ModelExtrapolation { altitude_m: f64, ceiling_m: f64 },

    #[error("{quantity} discontinuity at layer boundary {boundary_m}m: expected {expected}, got {actual}")]
    Discontinuity { boundary_m: f64, quantity: &'static str, expected: f64, actual: f64 },

    #[error("config error {0}")]
    ConfigError( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("RON parse error {0}")]
    RonError( #[from] ron::error::SpannedError),

    #[error("RON serialization error {0}")]
    RonSerError( #[from] ron::error::Error),
}

macro_rules! config_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        OdinAtmosError::ConfigError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use config_error;

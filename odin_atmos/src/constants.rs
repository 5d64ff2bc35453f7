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

//! physical constants of the 1975 US Standard Atmosphere. All values are in SI base units.
//! These are shared by all layered models so that evaluation of the reference table and of
//! configured profiles is consistent

/// standard gravitational acceleration in m/s². We use standard gravity throughout, not 9.81
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// universal gas constant in J/(mol·K) - note this is per mol, not per kmol
pub const GAS_CONSTANT: f64 = 8.31432;

/// molar mass of dry air in kg/mol
pub const AIR_MOLAR_MASS: f64 = 0.0289644;

/// ratio of specific heats (cp/cv) for air
pub const SPECIFIC_HEAT_RATIO: f64 = 1.4;

/// Sutherland's law coefficient λ in Pa·s·K^-0.5
pub const SUTHERLAND_LAMBDA: f64 = 1.51204129e-6;

/// Sutherland's temperature constant in K
pub const SUTHERLAND_TEMPERATURE: f64 = 120.0;

/// upper altitude limit of the 1975 model in meters. Evaluation above this is an extrapolation error
pub const US1975_CEILING: f64 = 87_000.0;

/// g·M/R in K/m - the hydrostatic constant that appears in both barometric formulae
pub const HYDROSTATIC_CONSTANT: f64 = STANDARD_GRAVITY * AIR_MOLAR_MASS / GAS_CONSTANT;

/// default relative tolerance for layer boundary continuity checks
pub const DEFAULT_CONTINUITY_TOLERANCE: f64 = 1e-4;

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

use std::{collections::HashMap, sync::{PoisonError,RwLock}};
use tracing::{debug,trace};
use crate::errors::Result;
use crate::model::AtmosphereModel;
use crate::state::AtmosphereState;

type CacheKey = (u64,u64); // bit patterns of (altitude, temperature offset)

/// default max number of cached states before the cache is flushed
pub const DEFAULT_MAX_ENTRIES: usize = 65_536;

/// a memoizing wrapper for atmosphere models.
/// Lookups return copies of stored states under a read lock. Concurrent first use of the same key might compute
/// the state more than once, which is harmless since evaluation is deterministic and inserting it again does
/// not change the stored value. Errors are not cached.
/// Keys are arbitrary f64 values (e.g. along a trajectory), hence the cache is bounded: inserting a new key into a
/// full cache flushes all entries first
pub struct CachedAtmosphere<M> where M: AtmosphereModel {
    model: M,
    max_entries: usize,
    cache: RwLock<HashMap<CacheKey,AtmosphereState>>,
}

impl<M> CachedAtmosphere<M> where M: AtmosphereModel {
    pub fn new (model: M)->Self {
        CachedAtmosphere::with_max_entries( model, DEFAULT_MAX_ENTRIES)
    }

    /// `max_entries` is at least 1
    pub fn with_max_entries (model: M, max_entries: usize)->Self {
        CachedAtmosphere { model, max_entries: max_entries.max(1), cache: RwLock::new( HashMap::new()) }
    }

    pub fn max_entries (&self)->usize { self.max_entries }

    pub fn model (&self)->&M { &self.model }

    pub fn len (&self)->usize {
        self.cache.read().unwrap_or_else( PoisonError::into_inner).len()
    }

    pub fn is_empty (&self)->bool { self.len() == 0 }

    pub fn clear (&self) {
        self.cache.write().unwrap_or_else( PoisonError::into_inner).clear()
    }

    fn lookup (&self, key: &CacheKey)->Option<AtmosphereState> {
        // map values are Copy so a poisoned lock can't leave a partially written state
        self.cache.read().unwrap_or_else( PoisonError::into_inner).get(key).copied()
    }
}

impl<M> AtmosphereModel for CachedAtmosphere<M> where M: AtmosphereModel {
    fn name (&self)->&str { self.model.name() }

    fn ceiling_m (&self)->f64 { self.model.ceiling_m() }

    fn evaluate_with_offset (&self, altitude_m: f64, temperature_offset_k: f64)->Result<AtmosphereState> {
        let key = (altitude_m.to_bits(), temperature_offset_k.to_bits());

        if let Some(state) = self.lookup(&key) {
            trace!("cache hit for {altitude_m}m / {temperature_offset_k}K");
            return Ok(state)
        }

        trace!("cache miss for {altitude_m}m / {temperature_offset_k}K");
        let state = self.model.evaluate_with_offset( altitude_m, temperature_offset_k)?;
        let mut cache = self.cache.write().unwrap_or_else( PoisonError::into_inner);
        if cache.len() >= self.max_entries && !cache.contains_key(&key) {
            debug!("flushing {} cached atmosphere states", cache.len());
            cache.clear();
        }
        cache.entry(key).or_insert(state);
        Ok(state)
    }
}

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
#![allow(unused)]

use odin_atmos::{*, layer::{resolve_layer,check_continuity}, constants::US1975_CEILING};

// run with "cargo test -p odin_atmos --test test_us1975 -- --nocapture"

fn assert_rel (actual: f64, expected: f64, rel_tol: f64) {
    let err = ((actual - expected) / expected).abs();
    assert!( err <= rel_tol, "{actual} not within {rel_tol} of {expected} (rel error {err})");
}

#[test]
fn test_sea_level () {
    let s = evaluate(0.0).unwrap();
    println!("{s}");

    assert_eq!( s.altitude_m, 0.0);
    assert_eq!( s.temperature_k, 288.15);
    assert_eq!( s.pressure_pa, 101325.0);
    assert_rel( s.density_kg_per_m3, 1.225, 1e-3);
    assert_rel( s.speed_of_sound_m_per_s, 340.294, 1e-4);
    assert_rel( s.dynamic_viscosity_pa_s, 1.8121e-5, 1e-3);
}

#[test]
fn test_reference_values () {
    let s = evaluate(5000.0).unwrap();
    println!("5km: T={} rho={}", s.temperature_k, s.density_kg_per_m3);
    assert_rel( s.temperature_k, 255.65, 5e-3);
    assert_rel( s.density_kg_per_m3, 0.7364, 5e-3);

    // altitudes are interpreted as geopotential, tables list 0.0889 for geometric 20km.
    // The 1% tolerance covers that ~1% gap (see "20 km density regression" in DESIGN.md)
    let s = evaluate(20000.0).unwrap();
    println!("20km: T={} rho={}", s.temperature_k, s.density_kg_per_m3);
    assert_rel( s.temperature_k, 216.65, 5e-3);
    assert_rel( s.density_kg_per_m3, 0.0889, 1e-2);
    assert_rel( s.density_kg_per_m3, 0.08803, 1e-3);

    let s = evaluate(50000.0).unwrap();
    println!("50km: T={} rho={}", s.temperature_k, s.density_kg_per_m3);
    assert_rel( s.temperature_k, 270.65, 5e-3);
    assert_rel( s.density_kg_per_m3, 0.000977, 5e-3);
}

#[test]
fn test_table_continuity () {
    for w in US1975_LAYERS.windows(2) {
        let (lower, upper) = (&w[0], &w[1]);
        let h = upper.base_altitude_m;
        let t = lower.temperature_at(h);
        let p = lower.pressure_at(h, t);
        println!("{h:>7}m: T {t:.3} / {:.3}, p {p:.6} / {:.6}", upper.base_temperature_k, upper.base_pressure_pa);

        assert_rel( t, upper.base_temperature_k, 1e-4);
        assert_rel( p, upper.base_pressure_pa, 1e-4);
    }
    assert!( check_continuity( &US1975_LAYERS, 1e-4).is_ok());
}

#[test]
fn test_discontinuity_detected () {
    let mut layers = US1975_LAYERS.to_vec();
    layers[3].base_pressure_pa = 900.0;

    match check_continuity( &layers, 1e-4) {
        Err(OdinAtmosError::Discontinuity{ boundary_m, quantity, .. }) => {
            assert_eq!( boundary_m, 32000.0);
            assert_eq!( quantity, "pressure");
        }
        other => panic!("expected discontinuity, got {other:?}")
    }
}

#[test]
fn test_monotonic_pressure () {
    let mut h = -1000.0;
    let mut last = evaluate(h).unwrap().pressure_pa;

    while h < US1975_CEILING {
        h = (h + 250.0).min( US1975_CEILING);
        let p = evaluate(h).unwrap().pressure_pa;
        assert!( p < last, "pressure not decreasing at {h}m: {p} >= {last}");
        last = p;
    }
}

#[test]
fn test_ceiling () {
    assert!( evaluate(87000.0).is_ok());

    match evaluate(87000.001) {
        Err(OdinAtmosError::ModelExtrapolation { altitude_m, ceiling_m }) => {
            assert_eq!( altitude_m, 87000.001);
            assert_eq!( ceiling_m, 87000.0);
        }
        other => panic!("expected extrapolation error, got {other:?}")
    }

    let e = evaluate(1_000_000.0).unwrap_err();
    println!("error: {e}");
    assert!( e.to_string().contains("87000"));
}

#[test]
fn test_below_sea_level () {
    let s = evaluate(-400.0).unwrap();
    println!("{s}");
    assert_eq!( s.altitude_m, -400.0);
    assert!( s.temperature_k > 288.15);
    assert!( s.pressure_pa > 101325.0);
    assert_rel( s.temperature_k, 288.15 + 0.0065 * 400.0, 1e-12);
}

#[test]
fn test_layer_resolution () {
    let thresholds: Vec<f64> = US1975_LAYERS.iter().map(|l| l.base_altitude_m).collect();

    for (i,h) in thresholds.iter().enumerate() {
        assert_eq!( resolve_layer( &US1975_LAYERS, *h), i);
        if i > 0 {
            assert_eq!( resolve_layer( &US1975_LAYERS, *h - 0.5), i-1);
        }
    }
    assert_eq!( resolve_layer( &US1975_LAYERS, -50.0), 0);
    assert_eq!( resolve_layer( &US1975_LAYERS, 87000.0), 6);

    // at exact thresholds the upper layer base values are used verbatim
    let s = evaluate(47000.0).unwrap();
    assert_eq!( s.temperature_k, 270.65);
    assert_eq!( s.pressure_pa, 110.906);
}

#[test]
fn test_offset_additivity () {
    for h in [-200.0, 0.0, 3000.0, 11000.0, 15000.0, 40000.0, 49000.0, 60000.0, 87000.0] {
        let t0 = evaluate(h).unwrap().temperature_k;
        for offset in [-20.0, -1.5, 0.0, 10.0, 35.0] {
            let t = evaluate_with_offset(h, offset).unwrap().temperature_k;
            assert_eq!( t, t0 + offset, "offset {offset} at {h}m");
        }
    }
}

#[test]
fn test_offset_pressure () {
    // the offset enters the pressure ratio of gradient layers ..
    let p0 = evaluate(5000.0).unwrap().pressure_pa;
    let p = evaluate_with_offset(5000.0, 10.0).unwrap().pressure_pa;
    assert!( p != p0);

    // .. but not isothermal layers
    let p0 = evaluate(15000.0).unwrap().pressure_pa;
    let s = evaluate_with_offset(15000.0, 10.0).unwrap();
    assert_eq!( s.pressure_pa, p0);
    assert!( s.density_kg_per_m3 < evaluate(15000.0).unwrap().density_kg_per_m3);
}

#[test]
fn test_derived_quantities () {
    let s = evaluate(0.0).unwrap();

    let q = dynamic_pressure( &s, 100.0);
    println!("q = {q} Pa");
    assert_rel( q, 6125.0, 1e-3);
    assert_eq!( q, s.dynamic_pressure(100.0));

    let m = mach_number( &s, 100.0);
    println!("M = {m}");
    assert_rel( m, 100.0 / 340.3, 1e-3);
    assert_eq!( m, s.mach_number(100.0));

    let re = reynolds_number( &s, 100.0, 1.0);
    println!("Re = {re}");
    assert_rel( re, s.density_kg_per_m3 * 100.0 / s.dynamic_viscosity_pa_s, 1e-12);
    assert!( re > 6.0e6 && re < 7.5e6);
    assert_eq!( re, s.reynolds_number(100.0, 1.0));

    let nu = s.kinematic_viscosity_m2_per_s();
    assert_rel( re, 100.0 / nu, 1e-12);
}

#[test]
fn test_concurrent_evaluation () {
    let handles: Vec<_> = (0..4).map( |i| {
        std::thread::spawn( move || {
            (0..100).map( |j| evaluate( (i * 100 + j) as f64 * 200.0).map(|s| s.pressure_pa)).collect::<Vec<_>>()
        })
    }).collect();

    for (i,h) in handles.into_iter().enumerate() {
        for (j,p) in h.join().unwrap().into_iter().enumerate() {
            let alt = (i * 100 + j) as f64 * 200.0;
            match p {
                Ok(p) => assert_eq!( p, evaluate(alt).unwrap().pressure_pa),
                Err(_) => assert!( alt > US1975_CEILING)
            }
        }
    }
}

#[test]
fn test_serde () {
    let s = evaluate(12000.0).unwrap();
    let json = serde_json::to_string(&s).unwrap();
    println!("{json}");
    assert!( json.contains("\"temperature_k\":216.65"));

    // this needs serde_json's float_roundtrip, the default parser can be off by one ULP
    for h in [-250.0, 0.0, 5000.0, 12000.0, 20000.0, 33333.3, 50000.0, 87000.0] {
        let s = evaluate_with_offset(h, 7.3).unwrap();
        let s1: AtmosphereState = serde_json::from_str( &serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!( s, s1, "serde round trip differs at {h}m");
    }
}

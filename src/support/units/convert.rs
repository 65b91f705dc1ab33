//! Scale factors between the SI and English engineering units.
//!
//! The SI side uses the units steam tables are usually printed in
//! (bar, °C, kJ/kg, kJ/kg·K, m³/kg), not the SI base units.
//! Every pair of functions here is an exact inverse up to floating-point rounding.

/// Pascals per pound-force per square inch.
pub const PA_PER_PSI: f64 = 6_894.757_293_168_361;

/// Kilojoules per kilogram in one BTU (IT) per pound.
pub const KJ_PER_KG_PER_BTU_PER_LB: f64 = 2.326;

/// Kilojoules per kilogram-kelvin in one BTU (IT) per pound-degree Fahrenheit.
pub const KJ_PER_KG_K_PER_BTU_PER_LB_F: f64 = 4.1868;

/// Cubic meters per kilogram in one cubic foot per pound.
pub const M3_PER_KG_PER_FT3_PER_LB: f64 = 0.028_316_846_592 / 0.453_592_37;

const PA_PER_BAR: f64 = 1.0e5;

#[must_use]
pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PA_PER_BAR / PA_PER_PSI
}

#[must_use]
pub fn psi_to_bar(psi: f64) -> f64 {
    psi * PA_PER_PSI / PA_PER_BAR
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Converts a temperature difference; no offset is applied.
#[must_use]
pub fn delta_celsius_to_fahrenheit(delta_celsius: f64) -> f64 {
    delta_celsius * 9.0 / 5.0
}

/// Converts a temperature difference; no offset is applied.
#[must_use]
pub fn delta_fahrenheit_to_celsius(delta_fahrenheit: f64) -> f64 {
    delta_fahrenheit * 5.0 / 9.0
}

#[must_use]
pub fn kj_per_kg_to_btu_per_lb(energy: f64) -> f64 {
    energy / KJ_PER_KG_PER_BTU_PER_LB
}

#[must_use]
pub fn btu_per_lb_to_kj_per_kg(energy: f64) -> f64 {
    energy * KJ_PER_KG_PER_BTU_PER_LB
}

#[must_use]
pub fn kj_per_kg_k_to_btu_per_lb_f(entropy: f64) -> f64 {
    entropy / KJ_PER_KG_K_PER_BTU_PER_LB_F
}

#[must_use]
pub fn btu_per_lb_f_to_kj_per_kg_k(entropy: f64) -> f64 {
    entropy * KJ_PER_KG_K_PER_BTU_PER_LB_F
}

#[must_use]
pub fn m3_per_kg_to_ft3_per_lb(volume: f64) -> f64 {
    volume / M3_PER_KG_PER_FT3_PER_LB
}

#[must_use]
pub fn ft3_per_lb_to_m3_per_kg(volume: f64) -> f64 {
    volume * M3_PER_KG_PER_FT3_PER_LB
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn reference_values() {
        assert_relative_eq!(bar_to_psi(1.0), 14.503_773_773, epsilon = 1e-8);
        assert_relative_eq!(psi_to_bar(14.7), 1.013_529, epsilon = 1e-6);
        assert_relative_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_relative_eq!(fahrenheit_to_celsius(-40.0), -40.0);
        assert_relative_eq!(delta_celsius_to_fahrenheit(10.0), 18.0);
        assert_relative_eq!(kj_per_kg_to_btu_per_lb(2_326.0), 1_000.0);
        assert_relative_eq!(btu_per_lb_f_to_kj_per_kg_k(1.0), 4.1868);
        assert_relative_eq!(m3_per_kg_to_ft3_per_lb(1.0), 16.018_463_37, epsilon = 1e-8);
    }

    fn assert_round_trip(x: f64, forward: fn(f64) -> f64, back: fn(f64) -> f64) {
        assert_relative_eq!(back(forward(x)), x, max_relative = 1e-9, epsilon = 1e-12);
        assert_relative_eq!(forward(back(x)), x, max_relative = 1e-9, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn pressure_round_trips(p in 1e-3f64..1e4) {
            assert_round_trip(p, bar_to_psi, psi_to_bar);
        }

        #[test]
        fn temperature_round_trips(t in -100.0f64..2_000.0) {
            assert_round_trip(t, celsius_to_fahrenheit, fahrenheit_to_celsius);
            assert_round_trip(t, delta_celsius_to_fahrenheit, delta_fahrenheit_to_celsius);
        }

        #[test]
        fn energy_round_trips(e in -500.0f64..5_000.0) {
            assert_round_trip(e, kj_per_kg_to_btu_per_lb, btu_per_lb_to_kj_per_kg);
        }

        #[test]
        fn entropy_round_trips(s in -1.0f64..12.0) {
            assert_round_trip(s, kj_per_kg_k_to_btu_per_lb_f, btu_per_lb_f_to_kj_per_kg_k);
        }

        #[test]
        fn volume_round_trips(v in 1e-4f64..1e3) {
            assert_round_trip(v, m3_per_kg_to_ft3_per_lb, ft3_per_lb_to_m3_per_kg);
        }
    }
}

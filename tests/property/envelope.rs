//! Speed envelope and monotonicity under random journeys.

use proptest::prelude::*;
use rampcheck::{lsp_check, Operation, VehicleKind};

use crate::common::{
    assert_in_envelope, huge_max_speed_strategy, journey_strategy, kind_strategy,
    max_speed_strategy, vehicle,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// 0 ≤ speed ≤ max_speed after every call, whatever the journey.
    #[test]
    fn prop_speed_never_leaves_envelope(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        assert_in_envelope(v.as_ref());
        for op in journey {
            op.apply(v.as_mut()).unwrap();
            prop_assert!(v.speed() >= 0.0, "{} went negative after {}", v, op);
            prop_assert!(v.speed() <= max_speed, "{} passed its ceiling after {}", v, op);
        }
    }

    /// Accelerate never lowers speed; brake never raises it.
    #[test]
    fn prop_operations_are_monotonic(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            let before = v.speed();
            op.apply(v.as_mut()).unwrap();
            match op {
                Operation::Accelerate(_) => prop_assert!(v.speed() >= before),
                Operation::Brake(_) => prop_assert!(v.speed() <= before),
            }
        }
    }

    /// Top speed is fixed at construction.
    #[test]
    fn prop_max_speed_is_immutable(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            op.apply(v.as_mut()).unwrap();
            prop_assert_eq!(v.max_speed(), max_speed);
        }
    }

    /// A brake larger than the current speed always lands exactly on zero.
    #[test]
    fn prop_overwhelming_brake_stops_exactly(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
        excess in 0.0f64..1e6,
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            op.apply(v.as_mut()).unwrap();
        }
        let overwhelming = v.speed() + excess + 1.0;
        v.brake(overwhelming).unwrap();
        prop_assert_eq!(v.speed(), 0.0);
    }

    /// The verifier accepts every variant, whatever state the journey left it in.
    #[test]
    fn prop_every_variant_passes_after_any_journey(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            op.apply(v.as_mut()).unwrap();
        }
        prop_assert_eq!(lsp_check(v.as_mut()), Ok(true));
    }

    /// Fresh vehicles pass however large their top speed, even when the
    /// scripted extreme accelerate overflows to `+∞`.
    #[test]
    fn prop_every_variant_passes_with_huge_top_speed(
        kind in kind_strategy(),
        max_speed in huge_max_speed_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        prop_assert_eq!(lsp_check(v.as_mut()), Ok(true));
        prop_assert!(v.speed() <= max_speed);
    }
}

#[test]
fn test_verifier_accepts_extreme_top_speeds() {
    for max_speed in [1e6, 1e300, f64::MAX] {
        for kind in VehicleKind::ALL {
            let mut v = vehicle(kind, max_speed);
            assert_eq!(lsp_check(v.as_mut()), Ok(true), "{} with max {}", kind, max_speed);
        }
    }
}

#[test]
fn test_every_kind_survives_a_long_alternating_journey() {
    for kind in VehicleKind::ALL {
        let mut v = vehicle(kind, 60.0);
        for i in 0..1_000 {
            let delta = (i % 17) as f64 + 0.5;
            let op = if i % 3 == 0 {
                Operation::Brake(delta)
            } else {
                Operation::Accelerate(delta)
            };
            op.apply(v.as_mut()).unwrap();
            assert_in_envelope(v.as_ref());
        }
    }
}

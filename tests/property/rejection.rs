//! Invalid input is rejected without touching state.

use proptest::prelude::*;
use rampcheck::{build_vehicle, Argument, Bicycle, Car, ElectricScooter, Vehicle, VehicleError};

use crate::common::{
    invalid_delta_strategy, invalid_max_speed_strategy, journey_strategy, kind_strategy,
    max_speed_strategy, vehicle,
};

proptest! {
    #[test]
    fn prop_invalid_accelerate_leaves_state_unchanged(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
        delta in invalid_delta_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            op.apply(v.as_mut()).unwrap();
        }
        let before = v.snapshot();

        let err = v.accelerate(delta).unwrap_err();
        prop_assert!(matches!(
            err,
            VehicleError::InvalidArgument { argument: Argument::AccelerateDelta, .. }
        ), "unexpected error: {:?}", err);
        prop_assert_eq!(v.snapshot(), before);
    }

    #[test]
    fn prop_invalid_brake_leaves_state_unchanged(
        kind in kind_strategy(),
        max_speed in max_speed_strategy(),
        journey in journey_strategy(),
        delta in invalid_delta_strategy(),
    ) {
        let mut v = vehicle(kind, max_speed);
        for op in journey {
            op.apply(v.as_mut()).unwrap();
        }
        let before = v.snapshot();

        let err = v.brake(delta).unwrap_err();
        prop_assert!(matches!(
            err,
            VehicleError::InvalidArgument { argument: Argument::BrakeDelta, .. }
        ), "unexpected error: {:?}", err);
        prop_assert_eq!(v.snapshot(), before);
    }

    #[test]
    fn prop_invalid_max_speed_is_rejected(
        kind in kind_strategy(),
        max_speed in invalid_max_speed_strategy(),
    ) {
        let err = build_vehicle(kind, max_speed).unwrap_err();
        prop_assert!(matches!(
            err,
            VehicleError::InvalidArgument { argument: Argument::MaxSpeed, .. }
        ), "unexpected error: {:?}", err);
    }
}

#[test]
fn test_each_constructor_rejects_zero_and_negative() {
    for max_speed in [0.0, -1.0, -200.0] {
        assert!(Car::new(max_speed).is_err());
        assert!(Bicycle::new(max_speed).is_err());
        assert!(ElectricScooter::new(max_speed).is_err());
    }
}

#[test]
fn test_rejection_message_names_argument_and_value() {
    let mut car = Car::new(200.0).unwrap();
    let err = car.brake(-3.0).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("braking delta"), "{}", message);
    assert!(message.contains("-3"), "{}", message);
}

#[test]
fn test_infinite_delta_is_accepted_and_clamped() {
    for kind in rampcheck::VehicleKind::ALL {
        let mut v = vehicle(kind, 40.0);
        v.accelerate(f64::INFINITY).unwrap();
        assert!(v.speed() > 0.0 && v.speed() <= 40.0, "{}", v);

        v.brake(f64::INFINITY).unwrap();
        assert_eq!(v.speed(), 0.0, "{}", v);
    }

    let mut car = vehicle(rampcheck::VehicleKind::Car, 40.0);
    car.accelerate(f64::INFINITY).unwrap();
    assert_eq!(car.speed(), 40.0);
}

#[test]
fn test_infinite_max_speed_is_rejected() {
    assert!(matches!(
        Car::new(f64::INFINITY),
        Err(VehicleError::InvalidArgument { argument: Argument::MaxSpeed, .. })
    ));
}

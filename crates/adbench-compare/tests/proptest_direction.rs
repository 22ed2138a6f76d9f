// SPDX-License-Identifier: Apache-2.0

use adbench_compare::compare;
use adbench_model::BetterDirection;
use proptest::prelude::*;

proptest! {
    #[test]
    fn higher_is_better_favors_strictly_greater(measured in 0.0f64..1.0e6, benchmark in 1.0e-3f64..1.0e6) {
        let result = compare(measured, benchmark, BetterDirection::Higher).expect("compare");
        prop_assert_eq!(result.favorable, measured > benchmark);
    }

    #[test]
    fn lower_is_better_favors_strictly_smaller(measured in 0.0f64..1.0e6, benchmark in 1.0e-3f64..1.0e6) {
        let result = compare(measured, benchmark, BetterDirection::Lower).expect("compare");
        prop_assert_eq!(result.favorable, measured < benchmark);
    }

    #[test]
    fn identical_values_have_zero_delta(b in prop_oneof![-1.0e6f64..-1.0e-6, 1.0e-6f64..1.0e6]) {
        let result = compare(b, b, BetterDirection::Higher).expect("compare");
        prop_assert_eq!(result.percent_delta, 0.0);
    }

    #[test]
    fn delta_sign_follows_measured_side(measured in 0.0f64..1.0e6, benchmark in 1.0e-3f64..1.0e6) {
        let result = compare(measured, benchmark, BetterDirection::Higher).expect("compare");
        prop_assert_eq!(result.percent_delta > 0.0, measured > benchmark);
        prop_assert!(result.percent_delta >= -100.0);
    }
}

use adbench_model::{Identifier, IDENTIFIER_MAX_LEN};
use proptest::prelude::*;
use proptest::test_runner::Config;

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn trimmed_printable_names_round_trip(name in "[A-Za-z0-9][A-Za-z0-9 ()/+-]{0,40}[A-Za-z0-9]") {
        let id = Identifier::parse(&name).expect("valid identifier");
        prop_assert_eq!(id.as_str(), name.as_str());
        prop_assert!(id.as_str().chars().count() <= IDENTIFIER_MAX_LEN);
    }

    #[test]
    fn leading_whitespace_is_rejected(name in "[A-Za-z]{1,20}") {
        let padded = format!(" {name}");
        prop_assert!(Identifier::parse(&padded).is_err());
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Mark Wells <contact@markwells.dev>

//! Property-based tests for `Person::greet`.

use greet::Person;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_greet_wraps_name(name in ".*", age in any::<i32>()) {
        let person = Person::new(name.clone(), age);
        prop_assert_eq!(person.greet(), format!("Hello, {name}!"));
    }

    #[test]
    fn test_greet_is_pure(name in ".*", age in any::<i32>()) {
        let person = Person::new(name, age);
        prop_assert_eq!(person.greet(), person.greet());
    }

    #[test]
    fn test_age_does_not_affect_greeting(name in "[A-Za-z ]{0,16}", a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(
            Person::new(name.clone(), a).greet(),
            Person::new(name, b).greet()
        );
    }
}

//! Property-based tests for canonical ordering
//!
//! Models are generated from a set of names, each contributing a type, a class and
//! an instance. Whatever order the declarations are written in, the canonical text
//! is the same and is a fixed point of the round trip.

use mdl::mdl::{compile, round_trip};
use proptest::prelude::*;

/// Distinct capitalized names
fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[A-Z][a-z]{2,8}", 1..6)
        .prop_map(|names| names.into_iter().collect())
}

/// The same names in two independent orders
fn permutations_strategy() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    names_strategy().prop_flat_map(|names| {
        (
            Just(names.clone()).prop_shuffle(),
            Just(names).prop_shuffle(),
        )
    })
}

fn model_source(names: &[String]) -> String {
    let mut source = String::from("/* Notice */\n\n/* Header */\npackage generated\n");

    source.push_str("\n// Types\n");
    for name in names {
        source.push_str(&format!("\n/* {0} */\ntype {0} uint8\n", name));
    }

    source.push_str("\n// Classes\n");
    for name in names {
        source.push_str(&format!(
            "\n/* {0}ClassLike */\ntype {0}ClassLike interface {{\n\t// Constructors\n\tMake() {0}Like\n}}\n",
            name
        ));
    }

    source.push_str("\n// Instances\n");
    for name in names {
        source.push_str(&format!(
            "\n/* {0}Like */\ntype {0}Like interface {{\n\t// Attributes\n\tGetValue() {0}\n}}\n",
            name
        ));
    }
    source
}

proptest! {
    #[test]
    fn canonical_text_ignores_declaration_order((first, second) in permutations_strategy()) {
        let one = round_trip(&model_source(&first)).unwrap();
        let other = round_trip(&model_source(&second)).unwrap();
        prop_assert_eq!(&one, &other);
        prop_assert_eq!(round_trip(&one).unwrap(), one);
    }

    #[test]
    fn families_are_sorted_by_lower_case_name(names in names_strategy().prop_shuffle()) {
        let model = compile(&model_source(&names)).unwrap();

        let mut expected: Vec<String> = names.iter().map(|name| name.to_lowercase()).collect();
        expected.sort();

        let types: Vec<String> = model
            .types()
            .iter()
            .map(|t| t.declaration().name().to_lowercase())
            .collect();
        prop_assert_eq!(&types, &expected);

        let classes: Vec<String> = model
            .classes()
            .iter()
            .filter_map(|c| c.declaration().name().strip_suffix("ClassLike"))
            .map(str::to_lowercase)
            .collect();
        prop_assert_eq!(&classes, &expected);

        let instances: Vec<String> = model
            .instances()
            .iter()
            .filter_map(|i| i.declaration().name().strip_suffix("Like"))
            .map(str::to_lowercase)
            .collect();
        prop_assert_eq!(&instances, &expected);
    }
}

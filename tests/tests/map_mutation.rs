//! Map mutation integration tests.

use recast_tests::prelude::*;

fn fixture() -> Fixture {
    Fixture::new().unwrap()
}

mod overlay {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_overwrite_and_add_keys() {
        // GIVEN a map describing a person
        let fx = fixture();
        let person = Value::Map(map! { "name" => "John", "age" => 30 });

        // WHEN age is changed and email added
        let result = fx
            .mutator()
            .mutate(&person, &map! { "age" => 31, "email" => "john@example.com" })
            .unwrap();

        // THEN the overlay is applied in key order
        assert_eq!(
            result,
            Value::Map(map! {
                "name" => "John",
                "age" => 31,
                "email" => "john@example.com",
            })
        );
        assert_field(&person, "age", 30);
        assert_eq!(person.field("email"), None);
    }

    #[test]
    fn test_overwrite_existing_key_only() {
        let fx = fixture();
        let person = Value::Map(map! { "name" => "John", "age" => 30 });

        let result = fx.mutator().mutate(&person, &map! { "age" => 31 }).unwrap();

        assert_eq!(result, Value::Map(map! { "name" => "John", "age" => 31 }));
        assert_eq!(person, Value::Map(map! { "name" => "John", "age" => 30 }));
    }

    #[test]
    fn test_empty_changes_yield_equal_copy() {
        let fx = fixture();
        let list = Value::Map(Map::from_list([Value::Int(1), Value::Int(2)]));

        let result = fx.mutator().mutate(&list, &ChangeSet::new()).unwrap();

        assert_eq!(result, list);
    }

    #[test]
    fn test_overlay_is_idempotent() {
        let fx = fixture();
        let mutator = fx.mutator();
        let source = Value::Map(map! { "a" => 1 });
        let changes = map! { "a" => 2, "b" => 3 };

        let once = mutator.mutate(&source, &changes).unwrap();
        let twice = mutator.mutate(&once, &changes).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_values_are_not_type_checked() {
        let fx = fixture();
        let source = Value::Map(map! { "count" => 1 });

        let result = fx
            .mutator()
            .mutate(&source, &map! { "count" => "many" })
            .unwrap();

        assert_field(&result, "count", "many");
    }
}

mod keys {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_keys_extend_list() {
        let fx = fixture();
        let list = Value::Map(Map::from_list([Value::from("a"), Value::from("b")]));

        let result = fx
            .mutator()
            .mutate(&list, &map! { 1 => "B", 2 => "c" })
            .unwrap();

        assert_eq!(result.index(0), Some(&Value::from("a")));
        assert_eq!(result.index(1), Some(&Value::from("B")));
        assert_eq!(result.index(2), Some(&Value::from("c")));
    }

    #[test]
    fn test_integer_and_string_keys_are_distinct() {
        let fx = fixture();
        let list = Value::Map(Map::from_list([Value::from("a")]));

        let result = fx.mutator().mutate(&list, &map! { "0" => "z" }).unwrap();

        assert_eq!(result.index(0), Some(&Value::from("a")));
        assert_field(&result, "0", "z");
        assert_eq!(result.as_map().map(Map::len), Some(2));
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_map_replaced_wholesale() {
        // GIVEN a map with a nested map
        let fx = fixture();
        let source = Value::Map(map! {
            "settings" => map! { "theme" => "dark", "lang" => "en" },
        });

        // WHEN the nested key is overlaid with a partial map
        let result = fx
            .mutator()
            .mutate(&source, &map! { "settings" => map! { "theme" => "light" } })
            .unwrap();

        // THEN the nested value is replaced, not merged
        assert_eq!(
            result.field("settings"),
            Some(&Value::Map(map! { "theme" => "light" }))
        );
    }

    #[test]
    fn test_nested_record_copied_by_value() {
        let fx = fixture();
        let job = fx.running_job();
        let source = Value::Map(map! { "current" => job.clone() });

        let result = fx
            .mutator()
            .mutate(&source, &map! { "previous" => job.clone() })
            .unwrap();

        assert_eq!(result.field("current"), Some(&job));
        assert_eq!(result.field("previous"), Some(&job));
    }
}

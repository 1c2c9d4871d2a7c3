//! Dispatch integration tests: bags, self-mutation hooks, unsupported values
//! and the chained builder.

use recast_core::{Fields, TypeId};
use recast_tests::prelude::*;

fn fixture() -> Fixture {
    Fixture::new().unwrap()
}

mod bags {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bag_assignment() {
        // GIVEN a bag with one entry
        let fx = fixture();
        let mut bag = Bag::new();
        bag.set("colour", "red");
        let source = Value::Bag(bag);

        // WHEN entries are changed and added
        let result = fx
            .mutator()
            .mutate(&source, &map! { "colour" => "blue", "size" => 3 })
            .unwrap();

        // THEN the copy has both, unchecked, and the source is untouched
        assert_field(&result, "colour", "blue");
        assert_field(&result, "size", 3);
        assert_field(&source, "colour", "red");
        assert_eq!(source.field("size"), None);
    }

    #[test]
    fn test_bag_integer_key_becomes_name() {
        let fx = fixture();

        let result = fx
            .mutator()
            .mutate(&Value::Bag(Bag::new()), &map! { 7 => true })
            .unwrap();

        assert_field(&result, "7", true);
    }
}

mod self_mutation {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Bumps `progress` by one on every mutation, on top of the changes.
    struct Ticking;

    impl SelfMutate for Ticking {
        fn mutate(
            &self,
            registry: &Registry,
            source: &Record,
            changes: &ChangeSet,
        ) -> MutationResult<Record> {
            let mut next = recast_mutation::mutate_record(registry, source, changes)?;
            let progress = next.get("progress").and_then(Value::as_int).unwrap_or(0);
            next.set("progress", progress + 1);
            Ok(next)
        }
    }

    #[test]
    fn test_hook_replaces_generic_algorithm() {
        // GIVEN a mutator with a hook for jobs
        let fx = fixture();
        let mutator = fx.mutator().with_self_mutation(fx.job, Ticking);

        // WHEN a job is mutated
        let result = mutator
            .mutate(&fx.running_job(), &map! { "status" => fx.status("Done") })
            .unwrap();

        // THEN the hook's result is returned
        assert!(mutator.has_self_mutation(fx.job));
        assert_field(&result, "status", fx.status("Done"));
        assert_field(&result, "progress", 51);
    }

    #[test]
    fn test_hook_result_is_not_validated() {
        let fx = fixture();
        let mutator = fx.mutator().with_self_mutation(
            fx.job,
            |_: &Registry, source: &Record, _: &ChangeSet| -> MutationResult<Record> {
                Ok(Record::new(source.type_id, Fields::new()))
            },
        );

        let result = mutator
            .mutate(&fx.running_job(), &map! { "owner" => "bob" })
            .unwrap();

        assert_uninitialized(&result, "id");
    }

    #[test]
    fn test_hook_returning_another_shape_rejected() {
        // GIVEN a job hook that answers with a setting
        let fx = fixture();
        let setting = fx.setting;
        let mutator = fx.mutator().with_self_mutation(
            fx.job,
            move |_: &Registry, _: &Record, _: &ChangeSet| -> MutationResult<Record> {
                Ok(Record::new(setting, Fields::new()))
            },
        );

        // WHEN a job is mutated
        let result = mutator.mutate(&fx.running_job(), &ChangeSet::new());

        // THEN the shape change is refused
        assert_eq!(result, Err(MutationError::unsupported_type("Job")));
    }

    #[test]
    fn test_hook_only_applies_to_its_shape() {
        let fx = fixture();
        let mutator = fx.mutator().with_self_mutation(fx.job, Ticking);

        let result = mutator
            .mutate(&fx.setting(), &map! { "key" => "speed" })
            .unwrap();

        assert!(!mutator.has_self_mutation(fx.setting));
        assert_field(&result, "key", "speed");
    }

    #[test]
    fn test_mutate_record_bypasses_hook() {
        let fx = fixture();
        let mutator = fx.mutator().with_self_mutation(fx.job, Ticking);
        let job = fx.running_job();
        let record = job.as_record().unwrap();

        let result = mutator.mutate_record(record, &map! { "progress" => 80 }).unwrap();

        assert_eq!(result.get("progress"), Some(&Value::Int(80)));
    }
}

mod unsupported {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalars_rejected() {
        let fx = fixture();
        let mutator = fx.mutator();
        let changes = map! { "a" => 1 };

        let cases = [
            (Value::Int(5), "int"),
            (Value::from("text"), "string"),
            (Value::Bool(true), "bool"),
            (Value::Float(1.5), "float"),
            (Value::Null, "null"),
        ];
        for (value, actual) in cases {
            assert_eq!(
                mutator.mutate(&value, &changes),
                Err(MutationError::unsupported_type(actual))
            );
        }
    }

    #[test]
    fn test_immutable_objects_rejected() {
        let fx = fixture();
        let mutator = fx.mutator();

        assert_eq!(
            mutator.mutate(&Value::Timestamp(CANCELLED_AT), &ChangeSet::new()),
            Err(MutationError::unsupported_type("Timestamp"))
        );
        assert_eq!(
            mutator.mutate(&fx.status("Done"), &ChangeSet::new()),
            Err(MutationError::unsupported_type("JobStatus"))
        );
    }

    #[test]
    fn test_unregistered_shape_rejected() {
        let fx = fixture();
        let stray = Value::Record(Record::empty(TypeId::new(999)));

        let err = fx.mutator().mutate(&stray, &ChangeSet::new()).unwrap_err();

        assert!(matches!(err, MutationError::UnsupportedType { .. }));
    }

    #[test]
    fn test_unsupported_message() {
        let fx = fixture();

        let err = fx
            .mutator()
            .mutate(&Value::Int(5), &ChangeSet::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "Cannot mutate value of type int");
    }
}

mod builder {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_later_set_overrides_earlier_with() {
        let fx = fixture();
        let mutator = fx.mutator();
        let person = Value::Map(map! { "name" => "John" });

        let result = mutator
            .begin(&person)
            .with(map! { "name" => "Jane", "age" => 20 })
            .set("name", "Joan")
            .commit()
            .unwrap();

        assert_field(&result, "name", "Joan");
        assert_field(&result, "age", 20);
    }

    #[test]
    fn test_invalid_change_fails_at_commit() {
        // GIVEN a pending mutation with a bad value
        let fx = fixture();
        let mutator = fx.mutator();
        let job = fx.running_job();
        let pending = mutator.begin(&job).set("progress", "lots");

        // WHEN nothing has been committed yet
        assert_eq!(pending.changes().len(), 1);

        // THEN the error only shows up on commit
        assert_eq!(
            pending.commit(),
            Err(MutationError::type_mismatch("progress", "int", "string"))
        );
    }

    #[test]
    fn test_commit_without_changes_copies() {
        let fx = fixture();
        let mutator = fx.mutator();
        let job = fx.running_job();

        let result = mutator.begin(&job).commit().unwrap();

        assert_eq!(result, job);
    }
}

//! Job-tracking schema used across the integration tests.
//!
//! ```text
//! interface HasLabel
//! enum JobStatus implements HasLabel { Pending, Running, Cancelled, Done }
//! record Entity implements HasLabel { readonly id: string }
//! record Job extends Entity {
//!     status: JobStatus, progress: int, cancelled_at: ?Timestamp,
//!     weight: float, tags: array, note: mixed, static kind: string
//! }
//! record Setting { key: string, value: int|string, raw }
//! ```

use recast_core::{fields, EnumCase, Record, TypeId, Value};
use recast_mutation::Mutator;
use recast_registry::{FieldDef, Registry, RegistryBuilder, RegistryError};

/// Timestamp used by cancellation scenarios.
pub const CANCELLED_AT: i64 = 1_700_000_000_000;

/// The job-tracking registry and the ids tests need from it.
#[derive(Debug)]
pub struct Fixture {
    pub registry: Registry,
    pub job: TypeId,
    pub setting: TypeId,
    pub status: TypeId,
}

impl Fixture {
    pub fn new() -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        builder.add_interface("HasLabel").done()?;
        let status = builder
            .add_enum("JobStatus")
            .implements("HasLabel")
            .case("Pending")
            .case("Running")
            .case("Cancelled")
            .case("Done")
            .done()?;
        builder
            .add_record("Entity")
            .implements("HasLabel")
            .field(FieldDef::new("id", "string").readonly())
            .done()?;
        let job = builder
            .add_record("Job")
            .extends("Entity")
            .field(FieldDef::new("status", "JobStatus"))
            .field(FieldDef::new("progress", "int"))
            .field(FieldDef::new("cancelled_at", "?Timestamp"))
            .field(FieldDef::new("weight", "float"))
            .field(FieldDef::new("tags", "array"))
            .field(FieldDef::new("note", "mixed"))
            .field(FieldDef::new("kind", "string").static_field())
            .done()?;
        let setting = builder
            .add_record("Setting")
            .field(FieldDef::new("key", "string"))
            .field(FieldDef::new("value", "int|string"))
            .field(FieldDef::untyped("raw"))
            .done()?;

        Ok(Self {
            registry: builder.build()?,
            job,
            setting,
            status,
        })
    }

    pub fn mutator(&self) -> Mutator<'_> {
        Mutator::new(&self.registry)
    }

    /// A `JobStatus` case.
    pub fn status(&self, case: &str) -> Value {
        Value::Enum(EnumCase::new(self.status, case))
    }

    /// `job-1`, running at 50%, not cancelled.
    pub fn running_job(&self) -> Value {
        Value::Record(Record::new(
            self.job,
            fields! {
                "id" => "job-1",
                "status" => self.status("Running"),
                "progress" => 50,
                "cancelled_at" => Value::Null,
            },
        ))
    }

    /// A setting whose union-typed value currently holds a string.
    pub fn setting(&self) -> Value {
        Value::Record(Record::new(
            self.setting,
            fields! { "key" => "mode", "value" => "string" },
        ))
    }
}

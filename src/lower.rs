use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::ir::{Declaration, Item, Layout, Member, Module, Ty};
use crate::snapshot::{FieldType, Snapshot, SnapshotField};

/// Name of the aggregate record, and of the namespace in [`Layout::Namespace`].
pub const SCHEMA_TYPE_NAME: &str = "Schema";

const DATE_TYPE_NAME: &str = "Date";

// ————————————————————————————————————————————————————————————————————————————
// FIELD TYPES
// ————————————————————————————————————————————————————————————————————————————

pub fn field_type(field: &SnapshotField) -> Result<Ty> {
    let base = match &field.ty {
        FieldType::Boolean => Ty::Boolean,
        FieldType::Date | FieldType::DateTime | FieldType::Time | FieldType::Timestamp => {
            Ty::Reference(DATE_TYPE_NAME.to_string())
        }
        FieldType::Decimal | FieldType::Float | FieldType::Integer | FieldType::BigInteger => {
            Ty::Number
        }
        FieldType::Hash | FieldType::String | FieldType::Text | FieldType::Uuid => Ty::String,
        FieldType::Unknown | FieldType::Csv | FieldType::Json | FieldType::Alias => Ty::Unknown,
        unsupported @ (FieldType::Geometry(_) | FieldType::Binary | FieldType::Other(_)) => {
            return Err(Error::UnsupportedFieldType(unsupported.to_string()));
        }
    };
    if field.is_nullable() { Ok(base.nullable()) } else { Ok(base) }
}

/// `user_roles` → `UserRoles`. Empty segments contribute nothing.
pub fn convert_to_type_name(collection: &str) -> String {
    collection
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

// ————————————————————————————————————————————————————————————————————————————
// ASSEMBLY
// ————————————————————————————————————————————————————————————————————————————

/// Lower a snapshot to the declarations to emit, in order.
///
/// Fails on the first unsupported field; nothing partial is returned.
pub fn assemble(snapshot: &Snapshot, layout: Layout) -> Result<Module> {
    // keyed by raw collection name; a repeated name keeps its first position
    let mut records = IndexMap::<&str, Declaration>::new();

    for collection in &snapshot.collections {
        let name = collection.collection.as_str();
        let members = snapshot
            .fields
            .iter()
            .filter(|field| field.collection == name)
            .map(|field| {
                Ok(Member {
                    name: field.field.clone(),
                    ty: field_type(field)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let declaration = Declaration {
            name: convert_to_type_name(name),
            members,
        };
        log::debug!("{name} → {} ({} members)", declaration.name, declaration.members.len());
        records.insert(name, declaration);
    }

    report_orphan_fields(snapshot, &records);
    report_type_name_collisions(&records);

    let aggregate = Declaration {
        name: SCHEMA_TYPE_NAME.to_string(),
        members: records
            .iter()
            .map(|(collection, declaration)| Member {
                name: collection.to_string(),
                ty: Ty::Reference(declaration.name.clone()),
            })
            .collect(),
    };

    let records = records.into_values().collect::<Vec<_>>();
    let mut items = match layout {
        Layout::TopLevel => records.into_iter().map(Item::Record).collect::<Vec<_>>(),
        Layout::Namespace => vec![Item::Namespace {
            name: SCHEMA_TYPE_NAME.to_string(),
            records,
        }],
    };
    items.push(Item::Record(aggregate));

    Ok(Module { items })
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn report_orphan_fields(snapshot: &Snapshot, records: &IndexMap<&str, Declaration>) {
    for field in orphan_fields(snapshot, records) {
        log::debug!(
            "skipping field {}.{}: no such collection",
            field.collection,
            field.field,
        );
    }
}

// Colliding names are still emitted; the output will not compile.
fn report_type_name_collisions(records: &IndexMap<&str, Declaration>) {
    for collision in type_name_collisions(records) {
        log::warn!(
            "collections `{}` and `{}` both generate type `{}`",
            collision.first,
            collision.second,
            collision.type_name,
        );
    }
}

fn orphan_fields<'a>(
    snapshot: &'a Snapshot,
    records: &IndexMap<&str, Declaration>,
) -> Vec<&'a SnapshotField> {
    snapshot
        .fields
        .iter()
        .filter(|field| !records.contains_key(field.collection.as_str()))
        .collect()
}

#[derive(Debug, PartialEq, Eq)]
struct TypeNameCollision<'a> {
    type_name: &'a str,
    first: &'a str,
    second: &'a str,
}

fn type_name_collisions<'a>(
    records: &'a IndexMap<&'a str, Declaration>,
) -> Vec<TypeNameCollision<'a>> {
    let mut seen = HashMap::<&str, &str>::new();
    let mut collisions = Vec::new();
    for (&collection, declaration) in records {
        if let Some(first) = seen.insert(declaration.name.as_str(), collection) {
            collisions.push(TypeNameCollision {
                type_name: declaration.name.as_str(),
                first,
                second: collection,
            });
        }
    }
    collisions
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

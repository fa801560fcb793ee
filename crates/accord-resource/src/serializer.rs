//! Resource object serialization.

use serde_json::{Map, Value};
use tracing::debug;

use accord_core::{ResourceIdentifier, SparseFieldSets};

use crate::field::Field;

/// A model that can serialize itself as a JSON:API resource object.
///
/// Implementors describe their surface declaratively via [`fields`]
/// (`Self::fields`); [`serialize_resource`] turns that description into the
/// wire object, applying any sparse field sets supplied by the request.
///
/// [`fields`]: Resource::fields
pub trait Resource {
    /// Returns the resource type.
    fn resource_type(&self) -> &str;

    /// Returns the resource id.
    fn id(&self) -> String;

    /// Returns the serializable fields, in output order.
    fn fields(&self) -> Vec<Field>;
}

/// Serializes a resource into a JSON:API resource object.
///
/// Sparse field sets are threaded explicitly: `None`, or a set that does
/// not mention the resource's type, leaves the resource unrestricted; an
/// empty set for the type drops every field. `attributes` and
/// `relationships` members are omitted entirely when they would be empty.
///
/// # Example
///
/// ```
/// use accord_resource::{Field, Resource, serialize_resource};
///
/// struct Article;
///
/// impl Resource for Article {
///     fn resource_type(&self) -> &str {
///         "articles"
///     }
///     fn id(&self) -> String {
///         String::from("1")
///     }
///     fn fields(&self) -> Vec<Field> {
///         vec![Field::attribute("title", "Accord")]
///     }
/// }
///
/// let object = serialize_resource(&Article, None);
/// assert_eq!(object["type"], "articles");
/// assert_eq!(object["attributes"]["title"], "Accord");
/// ```
#[must_use]
pub fn serialize_resource<R: Resource>(resource: &R, fields: Option<&SparseFieldSets>) -> Value {
    let resource_type = resource.resource_type().to_owned();
    debug!(resource_type = %resource_type, "serializing resource object");

    let mut attributes = Map::new();
    let mut relationships = Map::new();

    for field in resource.fields() {
        let Some(concrete) = resolve_conditional(field) else {
            continue;
        };
        let allowed = fields.is_none_or(|sets| sets.allows(&resource_type, concrete.name()));
        if !allowed {
            continue;
        }
        match concrete {
            Field::Attribute { name, value } => {
                attributes.insert(name, value);
            }
            Field::ToOne { name, identifier } => {
                let linkage = identifier.map_or(Value::Null, identifier_value);
                relationships.insert(name, linkage_object(linkage));
            }
            Field::ToMany { name, identifiers } => {
                let linkage = Value::Array(identifiers.into_iter().map(identifier_value).collect());
                relationships.insert(name, linkage_object(linkage));
            }
            Field::Conditional { .. } => {}
        }
    }

    let mut object = Map::new();
    object.insert(String::from("type"), Value::String(resource_type));
    object.insert(String::from("id"), Value::String(resource.id()));
    if !attributes.is_empty() {
        object.insert(String::from("attributes"), Value::Object(attributes));
    }
    if !relationships.is_empty() {
        object.insert(String::from("relationships"), Value::Object(relationships));
    }
    Value::Object(object)
}

/// Unwraps conditional wrappers, dropping fields whose condition is false.
fn resolve_conditional(field: Field) -> Option<Field> {
    match field {
        Field::Conditional { present: false, .. } => None,
        Field::Conditional {
            present: true,
            field: inner,
        } => resolve_conditional(*inner),
        other => Some(other),
    }
}

/// Wraps resource linkage in a relationship object.
fn linkage_object(data: Value) -> Value {
    let mut object = Map::new();
    object.insert(String::from("data"), data);
    Value::Object(object)
}

/// Serializes a resource identifier as `{"type": ..., "id": ...}`.
fn identifier_value(identifier: ResourceIdentifier) -> Value {
    let mut object = Map::new();
    object.insert(
        String::from("type"),
        Value::String(identifier.resource_type().to_owned()),
    );
    object.insert(String::from("id"), Value::String(identifier.id().to_owned()));
    Value::Object(object)
}

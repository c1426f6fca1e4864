//! Generic CRUD resources with client-side identity tracking.
//!
//! This module defines the [`Collection`] trait, which declares a collection
//! by name and URL suffix, and [`Resource`], which maps CRUD verbs for that
//! collection onto a [`Connection`] and holds one object's fields.
//!
//! # Identity Tracking
//!
//! A resource fetched with [`Resource::get_by_id`] remembers the id it was
//! fetched by. [`Resource::update`] and [`Resource::delete`] target that id
//! when none is passed explicitly:
//!
//! ```rust,ignore
//! let product = Product::new(&connection).get_by_id(42).await?;
//! // PUT /products/42.json
//! let updated = product.update(Some(&json!({"name": "x"})), None).await?;
//! ```
//!
//! Objects returned by [`Resource::create`] carry the server-assigned id in
//! their fields only; read it with [`Resource::server_id`] and pass it
//! explicitly or [`select`](Resource::select) it.
//!
//! # Declaring a Collection
//!
//! ```rust
//! use bigcommerce_api::rest::{Collection, ResourceDescriptor};
//!
//! pub struct GiftCertificates;
//!
//! impl Collection for GiftCertificates {
//!     const DESCRIPTOR: ResourceDescriptor =
//!         ResourceDescriptor::new("gift_certificates", "/gift_certificates");
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::clients::{ApiResponse, Connection, HttpMethod};
use crate::rest::{filter_query_string, FilterSet, ResourceError};

/// The ordered field mapping of a resource.
pub type Fields = Map<String, Value>;

/// Static declaration of a collection: its name and URL suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    /// The collection name used in errors and logs (e.g., "products").
    pub collection_name: &'static str,
    /// The path suffix under the API base path (e.g., "/products").
    pub url_suffix: &'static str,
}

impl ResourceDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub const fn new(collection_name: &'static str, url_suffix: &'static str) -> Self {
        Self {
            collection_name,
            url_suffix,
        }
    }

    /// Path of the collection, with an optional filter query.
    #[must_use]
    pub fn collection_path(&self, filters: Option<&FilterSet>) -> String {
        format!("{}{}", self.url_suffix, filter_query_string(filters))
    }

    /// Path of one member of the collection.
    #[must_use]
    pub fn member_path(&self, id: &ResourceId) -> String {
        format!("{}/{}", self.url_suffix, urlencoding::encode(id.as_str()))
    }
}

/// A list-style collection supporting the full CRUD set.
pub trait Collection {
    /// The collection's name and URL suffix.
    const DESCRIPTOR: ResourceDescriptor;
}

/// The identifier of a remote object.
///
/// Ids are numeric for most collections but are kept as strings so any
/// server-issued id can be addressed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates an id from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts an id from a JSON number or string.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self(n.to_string())),
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ResourceId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One object of collection `K`, bound to a connection.
///
/// A freshly constructed resource is detached: no fields and no selected id.
/// It doubles as the handle for collection-level calls (`get`, `create`).
///
/// Serializes as its field mapping.
pub struct Resource<'c, K: Collection> {
    connection: &'c Connection,
    fields: Fields,
    selected_id: Option<ResourceId>,
    kind: PhantomData<fn() -> K>,
}

impl<'c, K: Collection> Resource<'c, K> {
    /// Creates a detached resource.
    #[must_use]
    pub fn new(connection: &'c Connection) -> Self {
        Self::from_fields(connection, Fields::new())
    }

    /// Creates a detached resource holding `fields`.
    #[must_use]
    pub const fn from_fields(connection: &'c Connection, fields: Fields) -> Self {
        Self {
            connection,
            fields,
            selected_id: None,
            kind: PhantomData,
        }
    }

    /// Returns the collection declaration.
    #[must_use]
    pub const fn descriptor() -> ResourceDescriptor {
        K::DESCRIPTOR
    }

    /// Lists the collection, wrapping every element as a resource.
    ///
    /// The whole list is materialized from a single response.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if the API rejects the request,
    /// [`ResourceError::UnexpectedShape`] if the body is not an array of
    /// objects, or [`ResourceError::Connection`] for connection failures.
    pub async fn get(&self, filters: Option<&FilterSet>) -> Result<Vec<Self>, ResourceError> {
        match self.get_raw(filters).await? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| self.wrap(item, None))
                .collect(),
            _ => Err(ResourceError::UnexpectedShape {
                resource: K::DESCRIPTOR.collection_name,
                expected: "array",
            }),
        }
    }

    /// Lists the collection, returning the decoded body untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if the API rejects the request or
    /// [`ResourceError::Connection`] for connection failures.
    pub async fn get_raw(&self, filters: Option<&FilterSet>) -> Result<Value, ResourceError> {
        let path = K::DESCRIPTOR.collection_path(filters);
        let response = self
            .connection
            .request_json(HttpMethod::Get, &path, None)
            .await?;
        Self::success_body(response)
    }

    /// Fetches one object; the result remembers `id` as its selected id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if the API rejects the request,
    /// [`ResourceError::UnexpectedShape`] if the body is not an object, or
    /// [`ResourceError::Connection`] for connection failures.
    pub async fn get_by_id(&self, id: impl Into<ResourceId>) -> Result<Self, ResourceError> {
        let id = id.into();
        let path = K::DESCRIPTOR.member_path(&id);
        let response = self
            .connection
            .request_json(HttpMethod::Get, &path, None)
            .await?;
        self.wrap(Self::success_body(response)?, Some(id))
    }

    /// Creates an object from `payload` and wraps the server's representation.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Remote`] if the API rejects the payload,
    /// [`ResourceError::UnexpectedShape`] if the body is not an object, or
    /// [`ResourceError::Connection`] for connection failures.
    pub async fn create(&self, payload: &Value) -> Result<Self, ResourceError> {
        let response = self
            .connection
            .request_json(HttpMethod::Post, K::DESCRIPTOR.url_suffix, Some(payload))
            .await?;
        self.wrap(Self::success_body(response)?, None)
    }

    /// Updates an object.
    ///
    /// Targets `id` if given, else the selected id. Sends `payload` if given,
    /// else this resource's own fields. The result keeps the targeted id
    /// selected.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] without any network
    /// activity if there is no id to target. Otherwise fails as
    /// [`get_by_id`](Self::get_by_id) does.
    pub async fn update(
        &self,
        payload: Option<&Value>,
        id: Option<ResourceId>,
    ) -> Result<Self, ResourceError> {
        let id = self.effective_id(id, "update")?;
        let own_fields;
        let body = match payload {
            Some(payload) => payload,
            None => {
                own_fields = Value::Object(self.fields.clone());
                &own_fields
            }
        };

        let path = K::DESCRIPTOR.member_path(&id);
        let response = self
            .connection
            .request_json(HttpMethod::Put, &path, Some(body))
            .await?;
        self.wrap(Self::success_body(response)?, Some(id))
    }

    /// Deletes an object, returning the raw outcome.
    ///
    /// Targets `id` if given, else the selected id. A remote rejection comes
    /// back as [`ApiResponse::Error`], not as an `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingIdentifier`] without any network
    /// activity if there is no id to target, or
    /// [`ResourceError::Connection`] for connection failures.
    pub async fn delete(&self, id: Option<ResourceId>) -> Result<ApiResponse, ResourceError> {
        let id = self.effective_id(id, "delete")?;
        let path = K::DESCRIPTOR.member_path(&id);
        Ok(self
            .connection
            .request_json(HttpMethod::Delete, &path, None)
            .await?)
    }

    /// Returns the field mapping as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Returns the field mapping.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the resource, returning its field mapping.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Returns one field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets one field, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Removes one field, returning its value.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name)
    }

    /// Returns the id recorded by [`get_by_id`](Self::get_by_id) or
    /// [`select`](Self::select).
    #[must_use]
    pub const fn selected_id(&self) -> Option<&ResourceId> {
        self.selected_id.as_ref()
    }

    /// Records `id` as the target of later updates and deletes.
    pub fn select(&mut self, id: impl Into<ResourceId>) {
        self.selected_id = Some(id.into());
    }

    /// Returns the server-assigned id held in the `id` field, if any.
    #[must_use]
    pub fn server_id(&self) -> Option<ResourceId> {
        self.fields.get("id").and_then(ResourceId::from_value)
    }

    /// Returns `true` once an id is known, selected or server-assigned.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.selected_id.is_some() || self.server_id().is_some()
    }

    fn effective_id(
        &self,
        id: Option<ResourceId>,
        operation: &'static str,
    ) -> Result<ResourceId, ResourceError> {
        id.or_else(|| self.selected_id.clone())
            .ok_or(ResourceError::MissingIdentifier {
                resource: K::DESCRIPTOR.collection_name,
                operation,
            })
    }

    fn success_body(response: ApiResponse) -> Result<Value, ResourceError> {
        response
            .into_result()
            .map_err(|(status, body)| ResourceError::Remote {
                resource: K::DESCRIPTOR.collection_name,
                status,
                body,
            })
    }

    fn wrap(&self, value: Value, selected_id: Option<ResourceId>) -> Result<Self, ResourceError> {
        match value {
            Value::Object(fields) => Ok(Self {
                connection: self.connection,
                fields,
                selected_id,
                kind: PhantomData,
            }),
            _ => Err(ResourceError::UnexpectedShape {
                resource: K::DESCRIPTOR.collection_name,
                expected: "object",
            }),
        }
    }
}

impl<K: Collection> Clone for Resource<'_, K> {
    fn clone(&self) -> Self {
        Self {
            connection: self.connection,
            fields: self.fields.clone(),
            selected_id: self.selected_id.clone(),
            kind: PhantomData,
        }
    }
}

impl<K: Collection> fmt::Debug for Resource<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("collection", &K::DESCRIPTOR.collection_name)
            .field("fields", &self.fields)
            .field("selected_id", &self.selected_id)
            .finish_non_exhaustive()
    }
}

impl<K: Collection> Serialize for Resource<'_, K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;
    use serde_json::json;

    struct Widgets;

    impl Collection for Widgets {
        const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor::new("widgets", "/widgets");
    }

    fn connection() -> Connection {
        Connection::new(ConnectionConfig::default()).unwrap()
    }

    #[test]
    fn test_descriptor_builds_paths() {
        let descriptor = Widgets::DESCRIPTOR;
        assert_eq!(descriptor.collection_path(None), "/widgets");
        assert_eq!(
            descriptor.collection_path(Some(&FilterSet::new().with("limit", 5))),
            "/widgets?limit=5"
        );
        assert_eq!(descriptor.member_path(&ResourceId::from(42u64)), "/widgets/42");
        assert_eq!(descriptor.member_path(&ResourceId::from("a b")), "/widgets/a%20b");
    }

    #[test]
    fn test_new_resource_is_detached() {
        let connection = connection();
        let widget = Resource::<Widgets>::new(&connection);

        assert!(widget.fields().is_empty());
        assert!(widget.selected_id().is_none());
        assert!(!widget.is_identified());
    }

    #[test]
    fn test_field_accessors() {
        let connection = connection();
        let mut widget = Resource::<Widgets>::new(&connection);

        assert!(widget.set_field("name", "Sprocket").is_none());
        assert_eq!(
            widget.set_field("name", "Cog"),
            Some(Value::String("Sprocket".to_string()))
        );
        widget.set_field("price", 9.5);
        assert_eq!(widget.field("name"), Some(&json!("Cog")));
        assert_eq!(widget.to_json(), json!({"name": "Cog", "price": 9.5}));
        assert_eq!(widget.remove_field("price"), Some(json!(9.5)));
        assert!(widget.field("price").is_none());
    }

    #[test]
    fn test_fields_keep_insertion_order() {
        let connection = connection();
        let mut widget = Resource::<Widgets>::new(&connection);
        widget.set_field("zeta", 1);
        widget.set_field("alpha", 2);

        let keys: Vec<&String> = widget.fields().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_server_id_reads_numeric_and_string_ids() {
        let connection = connection();
        let mut widget = Resource::<Widgets>::new(&connection);
        widget.set_field("id", 17);
        assert_eq!(widget.server_id(), Some(ResourceId::from(17u64)));
        assert!(widget.is_identified());

        widget.set_field("id", "abc");
        assert_eq!(widget.server_id(), Some(ResourceId::from("abc")));

        widget.set_field("id", Value::Null);
        assert_eq!(widget.server_id(), None);
    }

    #[test]
    fn test_select_records_target() {
        let connection = connection();
        let mut widget = Resource::<Widgets>::new(&connection);
        widget.select(7u64);
        assert_eq!(widget.selected_id(), Some(&ResourceId::from(7u64)));
        assert!(widget.is_identified());
    }

    #[test]
    fn test_serializes_as_field_mapping() {
        let connection = connection();
        let mut fields = Fields::new();
        fields.insert("id".to_string(), json!(3));
        fields.insert("name".to_string(), json!("Bolt"));
        let widget = Resource::<Widgets>::from_fields(&connection, fields);

        let encoded = serde_json::to_string(&widget).unwrap();
        assert_eq!(encoded, r#"{"id":3,"name":"Bolt"}"#);
    }

    #[tokio::test]
    async fn test_update_without_any_id_fails_before_network() {
        let connection = connection();
        let widget = Resource::<Widgets>::new(&connection);

        let result = widget.update(Some(&json!({"name": "x"})), None).await;
        assert!(matches!(
            result,
            Err(ResourceError::MissingIdentifier {
                resource: "widgets",
                operation: "update"
            })
        ));
    }

    #[tokio::test]
    async fn test_delete_without_any_id_fails_before_network() {
        let connection = connection();
        let widget = Resource::<Widgets>::new(&connection);

        let result = widget.delete(None).await;
        assert!(matches!(
            result,
            Err(ResourceError::MissingIdentifier {
                operation: "delete",
                ..
            })
        ));
    }

    #[test]
    fn test_resource_id_conversions() {
        assert_eq!(ResourceId::from(42i32).to_string(), "42");
        assert_eq!(ResourceId::from("sku-1".to_string()).as_str(), "sku-1");
        assert_eq!(ResourceId::from_value(&json!(5)), Some(ResourceId::new("5")));
        assert_eq!(ResourceId::from_value(&json!("")), None);
        assert_eq!(ResourceId::from_value(&json!(true)), None);
    }
}

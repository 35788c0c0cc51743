// crates/doc-gate-core/src/core/schema.rs
// ============================================================================
// Module: Doc Gate Collection Schemas
// Description: Per-collection field rules, ownership rules, and policies.
// Purpose: Define the static schema table the evaluator consults per request.
// Dependencies: crate::core::{identifiers, policy, principal, request, value},
//               rule-logic, serde
// ============================================================================

//! ## Overview
//! A collection schema bundles the field whitelists, per-field types, the
//! ownership rule, and the four per-operation access policies for one
//! top-level collection. The registry is configuration: it is built once at
//! process start, is immutable afterwards, and is safe to share across
//! concurrent evaluations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::CollectionId;
use crate::core::identifiers::DocumentId;
use crate::core::identifiers::FieldName;
use crate::core::policy::AccessRule;
use crate::core::policy::admin;
use crate::core::policy::anyone;
use crate::core::policy::authenticated;
use crate::core::policy::nobody;
use crate::core::policy::owner;
use crate::core::principal::Principal;
use crate::core::request::Operation;
use crate::core::value::Document;
use crate::core::value::FieldValue;
use rule_logic::Rule;

// ============================================================================
// SECTION: Field Types
// ============================================================================

/// Declared type of a document field.
///
/// # Invariants
/// - Type checks are structural; `Text` and `Timestamp` never satisfy each
///   other even when a text value renders like a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 text.
    Text,
    /// Boolean.
    Boolean,
    /// Number (integral or fractional).
    Number,
    /// Caller-supplied timestamp value.
    Timestamp,
    /// List whose every element is text.
    TextList,
    /// List whose every element is a nested map, optionally sub-typed.
    StructList(Option<StructSchema>),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Timestamp => "timestamp",
            Self::TextList => "text list",
            Self::StructList(_) => "struct list",
        };
        f.write_str(label)
    }
}

/// Field types declared for elements of a struct list.
///
/// Element fields present in the map are type-checked independently; element
/// fields without a declaration are accepted as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructSchema {
    /// Declared element field types.
    pub field_types: BTreeMap<FieldName, FieldType>,
}

impl StructSchema {
    /// Creates a struct schema from (name, type) pairs.
    #[must_use]
    pub fn of(fields: &[(&str, FieldType)]) -> Self {
        Self {
            field_types: fields
                .iter()
                .map(|(name, ty)| (FieldName::new(*name), ty.clone()))
                .collect(),
        }
    }

    /// Returns the declared type of an element field when present.
    #[must_use]
    pub fn field_type(&self, field: &FieldName) -> Option<&FieldType> {
        self.field_types.get(field)
    }
}

// ============================================================================
// SECTION: Ownership Rules
// ============================================================================

/// Per-collection rule deciding whether a principal owns a document.
///
/// # Invariants
/// - Ownership compares the principal's `uid` to document contents or to the
///   document id; it never consults the email address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnershipRule {
    /// The collection has no ownership notion; `Owner` evaluates false.
    None,
    /// Ownership is carried by a document field holding the owner's uid.
    ///
    /// On Create the candidate payload's field AND the target document id
    /// must both equal the principal's uid; on other operations the existing
    /// document's field must equal it.
    Field {
        /// Field holding the owner's uid.
        field: FieldName,
    },
}

impl OwnershipRule {
    /// Ownership rule keyed on a uid-holding document field.
    #[must_use]
    pub fn field(name: impl Into<FieldName>) -> Self {
        Self::Field {
            field: name.into(),
        }
    }

    /// Returns true when the principal owns the target document.
    #[must_use]
    pub fn matches(
        &self,
        principal: &Principal,
        operation: Operation,
        doc_id: &DocumentId,
        payload: Option<&Document>,
        existing: Option<&Document>,
    ) -> bool {
        let Self::Field {
            field,
        } = self
        else {
            return false;
        };
        let Some(uid) = principal.uid() else {
            return false;
        };
        match operation {
            Operation::Create => {
                let payload_uid =
                    payload.and_then(|doc| doc.get(field)).and_then(FieldValue::as_text);
                doc_id.as_str() == uid && payload_uid == Some(uid)
            }
            Operation::Get | Operation::List | Operation::Update | Operation::Delete => {
                let existing_uid =
                    existing.and_then(|doc| doc.get(field)).and_then(FieldValue::as_text);
                existing_uid == Some(uid)
            }
        }
    }
}

// ============================================================================
// SECTION: Collection Schema
// ============================================================================

/// Field rules and access policies for one collection.
///
/// # Invariants
/// - `allowed_fields` is a superset of `required_fields`.
/// - `updatable_fields` is a subset of `allowed_fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSchema {
    /// Fields that must all be present on create.
    pub required_fields: BTreeSet<FieldName>,
    /// Strict whitelist of fields a document may contain.
    pub allowed_fields: BTreeSet<FieldName>,
    /// Subset of allowed fields that may change after creation.
    pub updatable_fields: BTreeSet<FieldName>,
    /// Declared per-field types.
    pub field_types: BTreeMap<FieldName, FieldType>,
    /// Ownership rule consulted by the `Owner` predicate.
    pub ownership: OwnershipRule,
    /// Policy for Get/List.
    pub read_policy: AccessRule,
    /// Policy for Create.
    pub create_policy: AccessRule,
    /// Policy for Update.
    pub update_policy: AccessRule,
    /// Policy for Delete.
    pub delete_policy: AccessRule,
}

impl CollectionSchema {
    /// Starts building a schema; policies default to deny-all.
    #[must_use]
    pub fn builder() -> CollectionSchemaBuilder {
        CollectionSchemaBuilder::new()
    }

    /// Returns the policy governing the given operation.
    #[must_use]
    pub const fn policy_for(&self, operation: Operation) -> &AccessRule {
        match operation {
            Operation::Get | Operation::List => &self.read_policy,
            Operation::Create => &self.create_policy,
            Operation::Update => &self.update_policy,
            Operation::Delete => &self.delete_policy,
        }
    }

    /// Returns the declared type of a field when present.
    #[must_use]
    pub fn field_type(&self, field: &FieldName) -> Option<&FieldType> {
        self.field_types.get(field)
    }
}

/// Builder assembling a [`CollectionSchema`] from field declarations.
///
/// Unset policies deny every caller; the updatable set defaults to the
/// allowed set minus any fields marked create-only.
#[derive(Debug, Clone, Default)]
pub struct CollectionSchemaBuilder {
    /// Fields required on create.
    required: BTreeSet<FieldName>,
    /// Strict field whitelist.
    allowed: BTreeSet<FieldName>,
    /// Declared field types.
    types: BTreeMap<FieldName, FieldType>,
    /// Explicit updatable set, overriding the derived one.
    updatable_override: Option<BTreeSet<FieldName>>,
    /// Fields excluded from the derived updatable set.
    create_only: BTreeSet<FieldName>,
    /// Ownership rule; defaults to none.
    ownership: Option<OwnershipRule>,
    /// Read policy; defaults to deny-all.
    read: Option<AccessRule>,
    /// Create policy; defaults to deny-all.
    create: Option<AccessRule>,
    /// Update policy; defaults to deny-all.
    update: Option<AccessRule>,
    /// Delete policy; defaults to deny-all.
    delete: Option<AccessRule>,
}

impl CollectionSchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field that must be present on create.
    #[must_use]
    pub fn required_field(mut self, name: &str, ty: FieldType) -> Self {
        let name = FieldName::new(name);
        self.required.insert(name.clone());
        self.allowed.insert(name.clone());
        self.types.insert(name, ty);
        self
    }

    /// Declares a field that may be present but is not required.
    #[must_use]
    pub fn optional_field(mut self, name: &str, ty: FieldType) -> Self {
        let name = FieldName::new(name);
        self.allowed.insert(name.clone());
        self.types.insert(name, ty);
        self
    }

    /// Marks fields as immutable after creation.
    #[must_use]
    pub fn create_only(mut self, names: &[&str]) -> Self {
        for name in names {
            self.create_only.insert(FieldName::new(*name));
        }
        self
    }

    /// Restricts the updatable set to exactly the given fields.
    #[must_use]
    pub fn updatable_only(mut self, names: &[&str]) -> Self {
        self.updatable_override = Some(names.iter().map(|name| FieldName::new(*name)).collect());
        self
    }

    /// Sets the collection ownership rule.
    #[must_use]
    pub fn ownership(mut self, rule: OwnershipRule) -> Self {
        self.ownership = Some(rule);
        self
    }

    /// Sets the Get/List policy.
    #[must_use]
    pub fn read(mut self, rule: AccessRule) -> Self {
        self.read = Some(rule);
        self
    }

    /// Sets the Create policy.
    #[must_use]
    pub fn create(mut self, rule: AccessRule) -> Self {
        self.create = Some(rule);
        self
    }

    /// Sets the Update policy.
    #[must_use]
    pub fn update(mut self, rule: AccessRule) -> Self {
        self.update = Some(rule);
        self
    }

    /// Sets the Delete policy.
    #[must_use]
    pub fn delete(mut self, rule: AccessRule) -> Self {
        self.delete = Some(rule);
        self
    }

    /// Finalizes the schema.
    #[must_use]
    pub fn build(self) -> CollectionSchema {
        let updatable_fields = self.updatable_override.unwrap_or_else(|| {
            self.allowed.iter().filter(|name| !self.create_only.contains(*name)).cloned().collect()
        });
        CollectionSchema {
            required_fields: self.required,
            allowed_fields: self.allowed,
            updatable_fields,
            field_types: self.types,
            ownership: self.ownership.unwrap_or(OwnershipRule::None),
            read_policy: self.read.unwrap_or_else(Rule::never),
            create_policy: self.create.unwrap_or_else(Rule::never),
            update_policy: self.update.unwrap_or_else(Rule::never),
            delete_policy: self.delete.unwrap_or_else(Rule::never),
        }
    }
}

// ============================================================================
// SECTION: Schema Registry
// ============================================================================

/// Immutable lookup table of collection schemas.
///
/// # Invariants
/// - Read-only after construction; safe for concurrent lookup.
/// - Collections without an entry deny every operation (fail closed).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    /// Schemas keyed by collection.
    schemas: BTreeMap<CollectionId, CollectionSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
        }
    }

    /// Inserts a schema, replacing any existing entry for the collection.
    pub fn insert(&mut self, collection: impl Into<CollectionId>, schema: CollectionSchema) {
        self.schemas.insert(collection.into(), schema);
    }

    /// Looks up the schema for a collection.
    #[must_use]
    pub fn lookup(&self, collection: &CollectionId) -> Option<&CollectionSchema> {
        self.schemas.get(collection)
    }

    /// Returns the number of configured collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Returns true when no collections are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Iterates over the configured collections in lexicographic order.
    pub fn collections(&self) -> impl Iterator<Item = &CollectionId> {
        self.schemas.keys()
    }

    /// Builds the built-in schema table.
    ///
    /// One entry per collection; the nested-items `downloads` shape and the
    /// typed-timestamp `pushTokens` shape are the canonical revisions.
    #[must_use]
    #[allow(clippy::too_many_lines, reason = "The schema table is one flat declaration per row.")]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.insert(
            "users",
            CollectionSchema::builder()
                .required_field("uid", FieldType::Text)
                .required_field("about", FieldType::Text)
                .required_field("batch", FieldType::Text)
                .required_field("branch", FieldType::Text)
                .required_field("contact", FieldType::Text)
                .required_field("cvLink", FieldType::Text)
                .required_field("email", FieldType::Text)
                .required_field("fbId", FieldType::Text)
                .required_field("instaId", FieldType::Text)
                .required_field("interests", FieldType::Text)
                .required_field("isAdmin", FieldType::Boolean)
                .required_field("isMember", FieldType::Boolean)
                .required_field("linkedinId", FieldType::Text)
                .required_field("name", FieldType::Text)
                .required_field("position", FieldType::Text)
                .required_field("profileImageUrl", FieldType::Text)
                .required_field("quote", FieldType::Text)
                .create_only(&["uid", "isAdmin", "email"])
                .ownership(OwnershipRule::field("uid"))
                .read(anyone())
                .create(Rule::and(vec![authenticated(), owner()]))
                .update(Rule::or(vec![admin(), owner()]))
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "projects",
            CollectionSchema::builder()
                .required_field("date", FieldType::Text)
                .required_field("description", FieldType::Text)
                .required_field("fileUrl", FieldType::Text)
                .required_field("link", FieldType::Text)
                .required_field("name", FieldType::Text)
                .required_field("progress", FieldType::Text)
                .required_field("projectImg", FieldType::TextList)
                .required_field(
                    "teamMembers",
                    FieldType::StructList(Some(StructSchema::of(&[
                        ("linkedinId", FieldType::Text),
                        ("member", FieldType::Text),
                    ]))),
                )
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "contributors",
            CollectionSchema::builder()
                .required_field("amount", FieldType::Text)
                .required_field("date", FieldType::Text)
                .required_field("description", FieldType::Text)
                .required_field("name", FieldType::Text)
                .required_field("representativeImg", FieldType::Text)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "notifications",
            CollectionSchema::builder()
                .required_field("date", FieldType::Text)
                .required_field("link", FieldType::Text)
                .required_field("msg", FieldType::Text)
                .required_field("title", FieldType::Text)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(admin())
                .build(),
        );

        registry.insert(
            "events",
            CollectionSchema::builder()
                .required_field("date", FieldType::Text)
                .required_field("details", FieldType::Text)
                .required_field("endTime", FieldType::Text)
                .required_field("eventName", FieldType::Text)
                .required_field("place", FieldType::Text)
                .required_field("posterURL", FieldType::Text)
                .required_field("regFormLink", FieldType::Text)
                .required_field("startTime", FieldType::Text)
                .required_field("isFeatured", FieldType::Boolean)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(admin())
                .build(),
        );

        registry.insert(
            "tutorials",
            CollectionSchema::builder()
                .optional_field("title", FieldType::Text)
                .optional_field("link", FieldType::Text)
                .read(anyone())
                .create(nobody())
                .update(nobody())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "feedbacks",
            CollectionSchema::builder()
                .required_field("dateTime", FieldType::Text)
                .required_field("feedback", FieldType::Text)
                .required_field("isMember", FieldType::Boolean)
                .read(admin())
                .create(anyone())
                .update(nobody())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "keys",
            CollectionSchema::builder()
                .optional_field("key", FieldType::Text)
                .read(admin())
                .create(nobody())
                .update(nobody())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "downloads",
            CollectionSchema::builder()
                .required_field("name", FieldType::Text)
                .required_field(
                    "items",
                    FieldType::StructList(Some(StructSchema::of(&[
                        ("file", FieldType::Text),
                        ("name", FieldType::Text),
                        ("size", FieldType::Text),
                        ("url", FieldType::Text),
                    ]))),
                )
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "currentTeam",
            CollectionSchema::builder()
                .optional_field("data", FieldType::Text)
                .read(anyone())
                .create(nobody())
                .update(nobody())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "pushTokens",
            CollectionSchema::builder()
                .required_field("androidId", FieldType::Text)
                .required_field("createdAt", FieldType::Timestamp)
                .required_field("deviceToken", FieldType::Text)
                .required_field("platform", FieldType::Text)
                .updatable_only(&["deviceToken"])
                .read(admin())
                .create(anyone())
                .update(anyone())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "news",
            CollectionSchema::builder()
                .required_field("date", FieldType::Text)
                .required_field("link", FieldType::Text)
                .required_field("notice", FieldType::Text)
                .required_field("notification", FieldType::Text)
                .required_field("timestamp", FieldType::Number)
                .required_field("title", FieldType::Text)
                .optional_field("sent", FieldType::Text)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(admin())
                .build(),
        );

        registry.insert(
            "robocon",
            CollectionSchema::builder()
                .required_field("about", FieldType::Text)
                .required_field("gallery", FieldType::TextList)
                .required_field("image", FieldType::Text)
                .required_field("introduction", FieldType::Text)
                .required_field("title", FieldType::Text)
                .required_field("video", FieldType::Text)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "robovoyage",
            CollectionSchema::builder()
                .required_field("about", FieldType::Text)
                .required_field("gallery", FieldType::TextList)
                .required_field("image", FieldType::Text)
                .required_field("introduction", FieldType::Text)
                .required_field("title", FieldType::Text)
                .required_field("video", FieldType::Text)
                .read(anyone())
                .create(admin())
                .update(admin())
                .delete(nobody())
                .build(),
        );

        registry.insert(
            "members",
            CollectionSchema::builder()
                .required_field("timestamp", FieldType::Number)
                .required_field("course", FieldType::Text)
                .required_field("email", FieldType::Text)
                .required_field("paymentStatus", FieldType::Boolean)
                .required_field("facultyNumber", FieldType::Text)
                .required_field("enrollmentNumber", FieldType::Text)
                .required_field("mobile", FieldType::Text)
                .required_field("name", FieldType::Text)
                .required_field("registrationNumber", FieldType::Text)
                .read(admin())
                .create(anyone())
                .update(admin())
                .delete(admin())
                .build(),
        );

        registry.insert(
            "facultyNumbers",
            CollectionSchema::builder()
                .required_field("value", FieldType::Boolean)
                .read(anyone())
                .create(anyone())
                .update(nobody())
                .delete(admin())
                .build(),
        );

        registry
    }
}

// crates/doc-gate-config/src/examples.rs
// ============================================================================
// Module: Example Schema Table
// Description: Canonical TOML rendition of the built-in schema table.
// Purpose: Provide a complete, copyable starting point for deployments.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The default table mirrors the built-in registry collection for collection.
//! Parsing it and compiling the result yields the same registry the core
//! crate ships, which the config tests assert.

/// Returns the canonical TOML schema table matching the built-in registry.
#[must_use]
pub const fn default_table_toml() -> &'static str {
    r#"# Doc Gate schema table.
# Omitted policies default to "nobody"; omitted types default to "text".

[collections.users]
required = [
    "uid", "about", "batch", "branch", "contact", "cvLink", "email",
    "fbId", "instaId", "interests", "isAdmin", "isMember", "linkedinId",
    "name", "position", "profileImageUrl", "quote",
]
create_only = ["uid", "isAdmin", "email"]
ownership_field = "uid"
read = "anyone"
create = { all_of = ["authenticated", "owner"] }
update = { any_of = ["admin", "owner"] }

[collections.users.types]
isAdmin = "boolean"
isMember = "boolean"

[collections.projects]
required = [
    "date", "description", "fileUrl", "link", "name", "progress",
    "projectImg", "teamMembers",
]
read = "anyone"
create = "admin"
update = "admin"

[collections.projects.types]
projectImg = "text_list"
teamMembers = { struct_list = { linkedinId = "text", member = "text" } }

[collections.contributors]
required = ["amount", "date", "description", "name", "representativeImg"]
read = "anyone"
create = "admin"
update = "admin"

[collections.notifications]
required = ["date", "link", "msg", "title"]
read = "anyone"
create = "admin"
update = "admin"
delete = "admin"

[collections.events]
required = [
    "date", "details", "endTime", "eventName", "place", "posterURL",
    "regFormLink", "startTime", "isFeatured",
]
read = "anyone"
create = "admin"
update = "admin"
delete = "admin"

[collections.events.types]
isFeatured = "boolean"

[collections.tutorials]
optional = ["title", "link"]
read = "anyone"

[collections.feedbacks]
required = ["dateTime", "feedback", "isMember"]
read = "admin"
create = "anyone"

[collections.feedbacks.types]
isMember = "boolean"

[collections.keys]
optional = ["key"]
read = "admin"

[collections.downloads]
required = ["name", "items"]
read = "anyone"
create = "admin"
update = "admin"

[collections.downloads.types]
items = { struct_list = { file = "text", name = "text", size = "text", url = "text" } }

[collections.currentTeam]
optional = ["data"]
read = "anyone"

[collections.pushTokens]
required = ["androidId", "createdAt", "deviceToken", "platform"]
updatable = ["deviceToken"]
read = "admin"
create = "anyone"
update = "anyone"

[collections.pushTokens.types]
createdAt = "timestamp"

[collections.news]
required = ["date", "link", "notice", "notification", "timestamp", "title"]
optional = ["sent"]
read = "anyone"
create = "admin"
update = "admin"
delete = "admin"

[collections.news.types]
timestamp = "number"

[collections.robocon]
required = ["about", "gallery", "image", "introduction", "title", "video"]
read = "anyone"
create = "admin"
update = "admin"

[collections.robocon.types]
gallery = "text_list"

[collections.robovoyage]
required = ["about", "gallery", "image", "introduction", "title", "video"]
read = "anyone"
create = "admin"
update = "admin"

[collections.robovoyage.types]
gallery = "text_list"

[collections.members]
required = [
    "timestamp", "course", "email", "paymentStatus", "facultyNumber",
    "enrollmentNumber", "mobile", "name", "registrationNumber",
]
read = "admin"
create = "anyone"
update = "admin"
delete = "admin"

[collections.members.types]
timestamp = "number"
paymentStatus = "boolean"

[collections.facultyNumbers]
required = ["value"]
read = "anyone"
create = "anyone"
delete = "admin"

[collections.facultyNumbers.types]
value = "boolean"
"#
}

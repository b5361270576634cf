//! The stream capability: identity, schema, and cursor declaration.

use sluice_types::errors::SchemaError;
use sluice_types::protocol::CursorField;

/// An abstract source of records with a schema and an optional
/// incremental-sync cursor.
///
/// Implementors fix their cursor declaration at construction time; the
/// projector reads it through [`Stream::cursor_field`] and never mutates
/// the stream.
pub trait Stream {
    /// Stream name as it should appear in the catalog.
    ///
    /// Defaults to the implementing type's bare identifier converted to
    /// snake_case (`UsersByRegion` becomes `"users_by_region"`).
    fn name(&self) -> String {
        derive_stream_name(std::any::type_name_of_val(self))
    }

    /// JSON Schema describing this stream's records. Must be a JSON object.
    fn json_schema(&self) -> Result<serde_json::Value, SchemaError>;

    /// Field(s) used to track sync progress for incremental mode.
    fn cursor_field(&self) -> Option<CursorField> {
        None
    }
}

/// Convert a type identifier to its catalog stream name.
///
/// Generic parameters and module path segments are stripped, then the bare
/// identifier is converted from PascalCase/camelCase to lowercase
/// snake_case: a `_` is inserted before each uppercase letter that follows
/// a lowercase letter or digit.
pub fn derive_stream_name(type_ident: &str) -> String {
    let bare = type_ident.split('<').next().unwrap_or(type_ident);
    let bare = bare.rsplit("::").next().unwrap_or(bare);

    let mut name = String::with_capacity(bare.len() + 4);
    let mut prev_lower_or_digit = false;
    for ch in bare.chars() {
        if ch.is_uppercase() && prev_lower_or_digit {
            name.push('_');
        }
        prev_lower_or_digit = ch.is_lowercase() || ch.is_ascii_digit();
        name.extend(ch.to_lowercase());
    }
    name
}

//! Projection of a stream's declared capabilities into a catalog entry.

use tracing::debug;

use sluice_types::errors::SchemaError;
use sluice_types::protocol::{CatalogEntry, CursorField, SyncMode};

use crate::stream::Stream;

/// Project a stream into an immutable [`CatalogEntry`].
///
/// `FullRefresh` is always supported; `Incremental` is added iff the
/// stream declares a cursor field that normalizes to a non-empty path.
/// An empty-string or empty-sequence declaration counts as no cursor.
///
/// Fails with [`SchemaError`] when the stream's schema accessor errors or
/// returns a non-object value.
pub fn project(stream: &dyn Stream) -> Result<CatalogEntry, SchemaError> {
    let name = stream.name();

    let json_schema = stream.json_schema()?;
    if !json_schema.is_object() {
        return Err(SchemaError::not_an_object(&json_schema));
    }

    let cursor_path: Vec<String> = stream
        .cursor_field()
        .map(CursorField::into_path)
        .unwrap_or_default();

    let mut supported_sync_modes = vec![SyncMode::FullRefresh];
    let (default_cursor_field, source_defined_cursor) = if cursor_path.is_empty() {
        (None, false)
    } else {
        supported_sync_modes.push(SyncMode::Incremental);
        (Some(cursor_path), true)
    };

    debug!(
        stream = %name,
        incremental = source_defined_cursor,
        "projected stream into catalog entry"
    );

    Ok(CatalogEntry {
        name,
        json_schema,
        supported_sync_modes,
        default_cursor_field,
        source_defined_cursor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedSchema(serde_json::Value);

    impl Stream for FixedSchema {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn json_schema(&self) -> Result<serde_json::Value, SchemaError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenSchema;

    impl Stream for BrokenSchema {
        fn json_schema(&self) -> Result<serde_json::Value, SchemaError> {
            Err(SchemaError::access("schema store unreachable"))
        }
    }

    #[test]
    fn test_accessor_error_propagates() {
        let err = project(&BrokenSchema).expect_err("must fail");
        assert_eq!(err, SchemaError::access("schema store unreachable"));
    }

    #[test]
    fn test_non_object_schema_rejected() {
        for (value, found) in [
            (json!(null), "null"),
            (json!(true), "boolean"),
            (json!(3), "number"),
            (json!("s"), "string"),
            (json!([]), "array"),
        ] {
            let err = project(&FixedSchema(value)).expect_err("must fail");
            assert_eq!(
                err,
                SchemaError::NotAnObject {
                    found: found.to_string()
                }
            );
        }
    }

    #[test]
    fn test_schema_propagated_verbatim() {
        let schema = json!({"type": "object", "properties": {"id": {"type": "integer"}}});
        let entry = project(&FixedSchema(schema.clone())).expect("project");
        assert_eq!(entry.json_schema, schema);
    }

    #[test]
    fn test_entry_invariant_holds() {
        struct Cursored;
        impl Stream for Cursored {
            fn json_schema(&self) -> Result<serde_json::Value, SchemaError> {
                Ok(json!({}))
            }
            fn cursor_field(&self) -> Option<CursorField> {
                Some(CursorField::from("updated_at"))
            }
        }

        let entry = project(&Cursored).expect("project");
        assert!(entry.supports_incremental());
        assert_eq!(
            entry.default_cursor_field,
            Some(vec!["updated_at".to_string()])
        );
        assert!(entry.source_defined_cursor);

        let entry = project(&FixedSchema(json!({}))).expect("project");
        assert!(!entry.supports_incremental());
        assert_eq!(entry.default_cursor_field, None);
        assert!(!entry.source_defined_cursor);
    }
}

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};

use crate::CompressionAlgorithm;

impl JsonSchema for CompressionAlgorithm {
    fn schema_name() -> Cow<'static, str> {
        "CompressionAlgorithm".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let tokens: Vec<&str> = CompressionAlgorithm::VALID
            .iter()
            .filter_map(|algorithm| algorithm.token())
            .collect();

        json_schema!({
            "type": "string",
            "enum": tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_tokens() {
        let schema = schemars::schema_for!(CompressionAlgorithm);
        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["type"], "string");
        assert_eq!(value["enum"], serde_json::json!(["none", "zlib"]));
    }
}

//! Declarative description of the build document.
//!
//! One [`Shape`] tree drives both the response constraint sent to the
//! text-generation service ([`Shape::to_response_schema`]) and the local
//! validator, so the two cannot drift apart.

use std::sync::OnceLock;

use serde_json::{Map, Value, json};

/// Expected kind of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    /// Any whole number.
    Integer,
    /// A whole number in `0..=u32::MAX`.
    Count,
    Boolean,
    Array(Box<Shape>),
    Object(Vec<Field>),
}

/// A named property of an object shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub required: bool,
    pub description: Option<&'static str>,
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: true,
            description: None,
        }
    }

    pub fn optional(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            required: false,
            description: None,
        }
    }

    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl Shape {
    fn array_of(items: Shape) -> Self {
        Shape::Array(Box::new(items))
    }

    /// Human-readable kind, used in validation messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Integer => "integer",
            Shape::Count => "non-negative integer",
            Shape::Boolean => "boolean",
            Shape::Array(_) => "array",
            Shape::Object(_) => "object",
        }
    }

    /// Names of the required properties, in declaration order.
    /// Empty for non-object shapes.
    pub fn required_fields(&self) -> Vec<&'static str> {
        match self {
            Shape::Object(fields) => fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.name)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Render in the generative service's schema dialect
    /// (`OBJECT` / `ARRAY` / `STRING` / `INTEGER` / `BOOLEAN`).
    pub fn to_response_schema(&self) -> Value {
        render(self, None)
    }
}

fn render(shape: &Shape, description: Option<&str>) -> Value {
    let mut schema = match shape {
        Shape::String => json!({ "type": "STRING" }),
        Shape::Integer | Shape::Count => json!({ "type": "INTEGER" }),
        Shape::Boolean => json!({ "type": "BOOLEAN" }),
        Shape::Array(items) => json!({ "type": "ARRAY", "items": render(items, None) }),
        Shape::Object(fields) => {
            let properties: Map<String, Value> = fields
                .iter()
                .map(|f| (f.name.to_string(), render(&f.shape, f.description)))
                .collect();
            let required: Vec<&str> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();
            json!({ "type": "OBJECT", "properties": properties, "required": required })
        }
    };

    if let (Some(text), Value::Object(map)) = (description, &mut schema) {
        map.insert("description".to_string(), Value::String(text.to_string()));
    }
    schema
}

fn stat_block() -> Shape {
    Shape::Object(
        ["strength", "fortitude", "agility", "intelligence", "willpower", "charisma"]
            .into_iter()
            .map(|name| Field::required(name, Shape::Count))
            .collect(),
    )
}

fn attunement_stat() -> Shape {
    Shape::Object(vec![
        Field::required("name", Shape::String),
        Field::required("value", Shape::Integer),
    ])
}

fn requirement() -> Shape {
    Shape::Object(vec![
        Field::required("item", Shape::String),
        Field::required("statRequirement", Shape::String),
    ])
}

fn progression_step() -> Shape {
    Shape::Object(vec![
        Field::required("level", Shape::String),
        Field::required("action", Shape::String),
        Field::required("reason", Shape::String),
        Field::optional("isShrinePoint", Shape::Boolean),
    ])
}

fn investment_points() -> Shape {
    Shape::Object(vec![
        Field::required("vitality", Shape::Count)
            .describe("Points in Vitality (12 total across all investment stats)"),
        Field::required("erudition", Shape::Count).describe("Points in Erudition"),
        Field::required("proficiency", Shape::Count).describe("Points in Proficiency"),
        Field::required("songchant", Shape::Count).describe("Points in Songchant"),
    ])
}

fn strings() -> Shape {
    Shape::array_of(Shape::String)
}

/// The shape of a build as returned by the text-generation service.
///
/// The attached image is not part of the remote response and is absent here.
pub fn build_shape() -> &'static Shape {
    static SHAPE: OnceLock<Shape> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Shape::Object(vec![
            Field::required("name", Shape::String),
            Field::required("oath", Shape::String),
            Field::required("attunement", Shape::String),
            Field::required("weaponType", Shape::String),
            Field::required("race", Shape::String),
            Field::required("murmur", Shape::String),
            Field::required("preShrineStats", stat_block()),
            Field::required("postShrineStats", stat_block()),
            Field::required("preShrineAttunementStats", Shape::array_of(attunement_stat())),
            Field::required("postShrineAttunementStats", Shape::array_of(attunement_stat())),
            Field::required("preShrineTalents", strings()),
            Field::required("postShrineTalents", strings()),
            Field::required("mantras", strings()),
            Field::required("weaponRequirements", Shape::array_of(requirement())),
            Field::required("oathRequirements", Shape::array_of(requirement())),
            Field::required("recommendedBells", strings()),
            Field::required("progressionOrder", Shape::array_of(progression_step())),
            Field::required("description", Shape::String),
            Field::required("playstyle", Shape::String),
            Field::required("exportSummary", Shape::String).describe(
                "The EXACT raw multiline text for deepwoken.co import. MUST follow the specified \
                 format with '=====' separators and 50+ talents.",
            ),
            Field::required("builderJson", Shape::String),
            Field::required("preferableBoons", strings()),
            Field::required("preferableFlaws", strings()),
            Field::required("investmentPoints", investment_points()),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_top_level_field_is_required() {
        let Shape::Object(fields) = build_shape() else {
            panic!("build shape must be an object");
        };
        assert_eq!(fields.len(), 24);
        assert!(fields.iter().all(|f| f.required));
        assert!(!build_shape().required_fields().contains(&"imageUrl"));
    }

    #[test]
    fn test_response_schema_top_level() {
        let schema = build_shape().to_response_schema();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["required"].as_array().unwrap().len(), 24);
        assert_eq!(schema["properties"]["mantras"]["type"], "ARRAY");
        assert_eq!(schema["properties"]["mantras"]["items"]["type"], "STRING");
    }

    #[test]
    fn test_response_schema_nested_records() {
        let schema = build_shape().to_response_schema();
        let stats = &schema["properties"]["preShrineStats"];
        assert_eq!(stats["type"], "OBJECT");
        assert_eq!(stats["properties"]["charisma"]["type"], "INTEGER");
        assert_eq!(stats["required"].as_array().unwrap().len(), 6);

        let step = &schema["properties"]["progressionOrder"]["items"];
        let required: Vec<&str> = step["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["level", "action", "reason"]);
        assert_eq!(step["properties"]["isShrinePoint"]["type"], "BOOLEAN");
    }

    #[test]
    fn test_response_schema_descriptions() {
        let schema = build_shape().to_response_schema();
        let export = schema["properties"]["exportSummary"]["description"]
            .as_str()
            .unwrap();
        assert!(export.contains("====="));
        assert!(
            schema["properties"]["investmentPoints"]["properties"]["songchant"]["description"]
                .is_string()
        );
        assert!(schema["properties"]["name"].get("description").is_none());
    }
}

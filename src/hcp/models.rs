//! Wire-level pieces shared by every resource model

use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Generic relationship data
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipData {
    pub data: Option<RelationshipId>,
}

/// Relationship ID reference
#[derive(Deserialize, Debug, Clone)]
pub struct RelationshipId {
    pub id: String,
    #[serde(rename = "type")]
    pub rel_type: Option<String>,
}

impl RelationshipData {
    /// Id of the related resource, if present
    pub fn id(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.id.as_str())
    }
}

/// Id of an optional relationship
pub fn related_id(rel: Option<&RelationshipData>) -> Option<&str> {
    rel.and_then(|r| r.id())
}

/// Relationship member pointing at another resource
pub fn relationship(rel_type: &str, id: &str) -> Value {
    json!({ "data": { "type": rel_type, "id": id } })
}

/// Build a JSON:API request document
/// (`{"data": {"type", "attributes", "relationships"?}}`)
pub fn document(resource_type: &str, attributes: Value, relationships: Option<Value>) -> Value {
    let mut data = Map::new();
    data.insert("type".to_string(), Value::String(resource_type.to_string()));
    data.insert("attributes".to_string(), attributes);
    if let Some(rel) = relationships {
        data.insert("relationships".to_string(), rel);
    }
    json!({ "data": data })
}

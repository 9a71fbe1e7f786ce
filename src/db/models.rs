//! Row types shared by the repositories and the JSON API.
//!
//! Every struct decodes with all fields defaulted so partial request bodies
//! are accepted; an explicit `null` on a plain field also falls back to the
//! default. The handlers fill in identifiers and timestamps.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_with::{serde_as, DefaultOnNull};
use sqlx::FromRow;

/// JSON document kept as the exact text the client sent.
///
/// Never parsed by the store; serialized back out verbatim. Text that is not
/// valid JSON (older rows may hold `""`) is emitted as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct JsonText(String);

impl JsonText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JsonText {
    /// Matches the `'[]'` column default.
    fn default() -> Self {
        JsonText("[]".into())
    }
}

impl Serialize for JsonText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match serde_json::from_str::<&RawValue>(&self.0) {
            Ok(raw) => raw.serialize(serializer),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for JsonText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(JsonText(raw.get().to_owned()))
    }
}

impl TryFrom<&str> for JsonText {
    type Error = serde_json::Error;

    /// Accepts only well-formed JSON.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let raw: &RawValue = serde_json::from_str(text)?;
        Ok(JsonText(raw.get().to_owned()))
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Player {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub notes: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct WeekPlan {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub player_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub week: String,
    pub days: JsonText,
    #[serde(rename = "totalRPE")]
    #[serde_as(as = "DefaultOnNull")]
    pub total_rpe: i64,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct Media {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub exercise_id: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub media_type: String,
    /// Base64 payload or URL; opaque here.
    #[serde_as(as = "DefaultOnNull")]
    pub data: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
}

/// Training log keyed by caller-chosen id (usually the player id).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerLog {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    pub entries: JsonText,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(default)]
pub struct Setting {
    #[serde_as(as = "DefaultOnNull")]
    pub key: String,
    #[serde_as(as = "DefaultOnNull")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_text_survives_decode_and_encode_verbatim() {
        let body = r#"{"id":"wp1","days":[ {"day":"mon", "rpe":3} ],"totalRPE":3}"#;
        let plan: WeekPlan = serde_json::from_str(body).unwrap();
        assert_eq!(plan.days.as_str(), r#"[ {"day":"mon", "rpe":3} ]"#);

        let out = serde_json::to_string(&plan).unwrap();
        assert!(out.contains(r#""days":[ {"day":"mon", "rpe":3} ]"#));
        assert!(out.contains(r#""totalRPE":3"#));
    }

    #[test]
    fn string_blob_keeps_its_quotes() {
        let plan: WeekPlan = serde_json::from_str(r#"{"days":"[]"}"#).unwrap();
        assert_eq!(plan.days.as_str(), r#""[]""#);
    }

    #[test]
    fn missing_blob_defaults_to_empty_list() {
        let log: PlayerLog = serde_json::from_str(r#"{"id":"p1"}"#).unwrap();
        assert_eq!(log.entries.as_str(), "[]");
    }

    #[test]
    fn absent_optional_player_fields_are_omitted() {
        let p: Player = serde_json::from_str(r#"{"name":"Alex","level":"U12","dob":null}"#).unwrap();
        assert_eq!(p.dob, None);

        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("height").is_none());
        assert!(json.get("dob").is_none());
        assert_eq!(json["createdAt"], "");
    }

    #[test]
    fn media_type_uses_wire_name() {
        let m: Media = serde_json::from_str(r#"{"type":"video","exerciseId":"e1"}"#).unwrap();
        assert_eq!(m.media_type, "video");
        assert_eq!(serde_json::to_value(&m).unwrap()["type"], "video");
    }

    #[test]
    fn null_plain_fields_fall_back_to_defaults() {
        let p: Player =
            serde_json::from_str(r#"{"id":null,"name":"Alex","notes":null,"level":null}"#).unwrap();
        assert_eq!(p.id, "");
        assert_eq!(p.notes, "");
        assert_eq!(p.level, "");

        let plan: WeekPlan = serde_json::from_str(r#"{"week":null,"totalRPE":null}"#).unwrap();
        assert_eq!(plan.total_rpe, 0);
        assert_eq!(plan.week, "");

        let s: Setting = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(s.value, "");
    }

    #[test]
    fn non_json_blob_text_is_emitted_as_string() {
        let log = PlayerLog {
            id: "p1".into(),
            entries: JsonText(String::new()),
            updated_at: "2024-03-01T10:00:00Z".into(),
        };
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["entries"], "");

        let legacy = JsonText("not json".into());
        assert_eq!(serde_json::to_string(&legacy).unwrap(), r#""not json""#);
    }

    #[test]
    fn json_text_rejects_malformed_input() {
        assert!(JsonText::try_from("[1, 2").is_err());
        assert_eq!(JsonText::try_from("[1, 2]").unwrap().as_str(), "[1, 2]");
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFramesRequest {
    /// Video page or file URL understood by yt-dlp
    #[serde(default)]
    pub url: Option<String>,
    /// Frames per second override, e.g. "2" or "1/5"
    #[serde(default, deserialize_with = "string_or_number")]
    #[schema(value_type = Option<String>)]
    pub frame_rate: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        // Falsy values (null, 0, false) fall back to the configured default.
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => Ok(None),
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "frameRate must be a string or number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractFramesResponse {
    pub job_id: Uuid,
    pub frames_uploaded: usize,
    pub bucket: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_rate_accepts_string_or_number() {
        let req: ExtractFramesRequest =
            serde_json::from_str(r#"{"url":"https://example.com/v","frameRate":"2"}"#).unwrap();
        assert_eq!(req.frame_rate.as_deref(), Some("2"));

        let req: ExtractFramesRequest =
            serde_json::from_str(r#"{"url":"https://example.com/v","frameRate":0.5}"#).unwrap();
        assert_eq!(req.frame_rate.as_deref(), Some("0.5"));

        let req: ExtractFramesRequest = serde_json::from_str(r#"{"frameRate":null}"#).unwrap();
        assert!(req.frame_rate.is_none());
        assert!(req.url.is_none());
    }

    #[test]
    fn zero_and_false_frame_rate_count_as_absent() {
        for body in [
            r#"{"url":"u","frameRate":0}"#,
            r#"{"url":"u","frameRate":0.0}"#,
            r#"{"url":"u","frameRate":false}"#,
        ] {
            let req: ExtractFramesRequest = serde_json::from_str(body).unwrap();
            assert!(req.frame_rate.is_none(), "{body}");
        }
    }

    #[test]
    fn frame_rate_rejects_other_types() {
        let res = serde_json::from_str::<ExtractFramesRequest>(r#"{"url":"u","frameRate":true}"#);
        assert!(res.is_err());
    }

    #[test]
    fn response_uses_wire_field_names() {
        let job_id = Uuid::new_v4();
        let body = serde_json::to_value(ExtractFramesResponse {
            job_id,
            frames_uploaded: 3,
            bucket: "steez-video-frames".to_string(),
        })
        .unwrap();

        assert_eq!(body["jobId"], job_id.to_string());
        assert_eq!(body["framesUploaded"], 3);
        assert_eq!(body["bucket"], "steez-video-frames");
    }
}

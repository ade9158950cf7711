use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serializer;

/// Writes raw bytes as a standard base64 string, the way image blobs travel in JSON.
pub fn serialize_base64<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Blob {
        #[serde(serialize_with = "serialize_base64")]
        data: Vec<u8>,
    }

    #[test]
    fn poster_bytes_become_base64_text() {
        let blob = Blob { data: vec![0x89, b'P', b'N', b'G'] };
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#"{"data":"iVBORw=="}"#);
    }

    #[test]
    fn empty_bytes_become_empty_string() {
        let blob = Blob { data: Vec::new() };
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#"{"data":""}"#);
    }
}

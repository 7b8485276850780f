//! Media results delivered to the host through the media callback

use serde_json::{Map, Value};

// Keys of the payload as expected by the host bridge
pub const KEY_CAPTURE_TYPE: &str = "captureType";
pub const KEY_FILE_DATA: &str = "fileData";
pub const KEY_FILE_NAME: &str = "fileName";
pub const KEY_FILE_TYPE: &str = "fileType";
pub const KEY_DOCUMENT_SIDE: &str = "side";
pub const KEY_DOCUMENT_TYPE: &str = "type";
pub const KEY_DOCUMENT_ISSUING_COUNTRY: &str = "issuingCountry";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureType {
    Document,
    Face,
    Video,
}

impl CaptureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureType::Document => "DOCUMENT",
            CaptureType::Face => "FACE",
            CaptureType::Video => "VIDEO",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFile {
    pub file_data: Vec<u8>,
    pub file_name: String,
    pub file_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub side: Option<String>,
    pub doc_type: Option<String>,
    pub issuing_country: Option<String>,
}

/// A captured media file together with what produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaResult {
    Document {
        file: MediaFile,
        metadata: DocumentMetadata,
    },
    Liveness {
        file: MediaFile,
    },
    Selfie {
        file: MediaFile,
    },
}

impl MediaResult {
    pub fn capture_type(&self) -> CaptureType {
        match self {
            MediaResult::Document { .. } => CaptureType::Document,
            MediaResult::Liveness { .. } => CaptureType::Video,
            MediaResult::Selfie { .. } => CaptureType::Face,
        }
    }

    pub fn file(&self) -> &MediaFile {
        match self {
            MediaResult::Document { file, .. }
            | MediaResult::Liveness { file }
            | MediaResult::Selfie { file } => file,
        }
    }

    /// Flatten into the key/value payload sent to the host.
    ///
    /// `fileData` is rendered as a signed byte list (`[1, -1]`). Missing
    /// document metadata values are sent as `null`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let file = self.file();

        map.insert(
            KEY_CAPTURE_TYPE.to_string(),
            Value::from(self.capture_type().as_str()),
        );
        map.insert(
            KEY_FILE_DATA.to_string(),
            Value::from(render_bytes(&file.file_data)),
        );
        map.insert(KEY_FILE_TYPE.to_string(), Value::from(file.file_type.as_str()));
        map.insert(KEY_FILE_NAME.to_string(), Value::from(file.file_name.as_str()));

        if let MediaResult::Document { metadata, .. } = self {
            map.insert(
                KEY_DOCUMENT_TYPE.to_string(),
                Value::from(metadata.doc_type.clone()),
            );
            map.insert(
                KEY_DOCUMENT_SIDE.to_string(),
                Value::from(metadata.side.clone()),
            );
            map.insert(
                KEY_DOCUMENT_ISSUING_COUNTRY.to_string(),
                Value::from(metadata.issuing_country.clone()),
            );
        }

        map
    }
}

fn render_bytes(bytes: &[u8]) -> String {
    let signed: Vec<i8> = bytes.iter().map(|b| *b as i8).collect();
    format!("{:?}", signed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> MediaFile {
        MediaFile {
            file_data: vec![1, 2, 255],
            file_name: "capture.jpg".to_string(),
            file_type: "image/jpeg".to_string(),
        }
    }

    #[test]
    fn test_document_result_map() {
        let result = MediaResult::Document {
            file: sample_file(),
            metadata: DocumentMetadata {
                side: Some("front".to_string()),
                doc_type: Some("passport".to_string()),
                issuing_country: None,
            },
        };

        let map = result.to_map();
        assert_eq!(map[KEY_CAPTURE_TYPE], "DOCUMENT");
        assert_eq!(map[KEY_FILE_DATA], "[1, 2, -1]");
        assert_eq!(map[KEY_FILE_NAME], "capture.jpg");
        assert_eq!(map[KEY_FILE_TYPE], "image/jpeg");
        assert_eq!(map[KEY_DOCUMENT_SIDE], "front");
        assert_eq!(map[KEY_DOCUMENT_TYPE], "passport");
        assert_eq!(map[KEY_DOCUMENT_ISSUING_COUNTRY], Value::Null);
        assert_eq!(map.len(), 7);
    }

    #[test]
    fn test_face_results_have_no_document_keys() {
        let selfie = MediaResult::Selfie { file: sample_file() }.to_map();
        assert_eq!(selfie[KEY_CAPTURE_TYPE], "FACE");
        assert!(!selfie.contains_key(KEY_DOCUMENT_SIDE));
        assert_eq!(selfie.len(), 4);

        let liveness = MediaResult::Liveness { file: sample_file() }.to_map();
        assert_eq!(liveness[KEY_CAPTURE_TYPE], "VIDEO");
    }

    #[test]
    fn test_empty_file_data() {
        let result = MediaResult::Selfie {
            file: MediaFile::default(),
        };
        assert_eq!(result.to_map()[KEY_FILE_DATA], "[]");
    }
}

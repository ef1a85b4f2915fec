use crate::error::BillscanError;
use std::fmt;
use std::path::Path;

/// Document types accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Jpeg,
    Png,
}

impl UploadKind {
    pub fn from_mime(mime: &str) -> Result<UploadKind, BillscanError> {
        match mime.trim().to_lowercase().as_str() {
            "application/pdf" => Ok(UploadKind::Pdf),
            "image/jpeg" => Ok(UploadKind::Jpeg),
            "image/png" => Ok(UploadKind::Png),
            other => Err(BillscanError::UnsupportedUpload(other.to_string())),
        }
    }

    pub fn from_path(path: &Path) -> Result<UploadKind, BillscanError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Ok(UploadKind::Pdf),
            "jpg" | "jpeg" => Ok(UploadKind::Jpeg),
            "png" => Ok(UploadKind::Png),
            _ => Err(BillscanError::UnsupportedUpload(path.display().to_string())),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            UploadKind::Pdf => "application/pdf",
            UploadKind::Jpeg => "image/jpeg",
            UploadKind::Png => "image/png",
        }
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(UploadKind::from_mime("application/pdf").unwrap(), UploadKind::Pdf);
        assert_eq!(UploadKind::from_mime("IMAGE/PNG").unwrap(), UploadKind::Png);
        assert!(UploadKind::from_mime("image/gif").is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(UploadKind::from_path(Path::new("bill.JPG")).unwrap(), UploadKind::Jpeg);
        assert_eq!(UploadKind::from_path(Path::new("scan.jpeg")).unwrap(), UploadKind::Jpeg);
        assert_eq!(UploadKind::from_path(Path::new("a/b.pdf")).unwrap(), UploadKind::Pdf);
        assert!(UploadKind::from_path(Path::new("notes.txt")).is_err());
        assert!(UploadKind::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_mime_display() {
        assert_eq!(UploadKind::Png.to_string(), "image/png");
    }
}

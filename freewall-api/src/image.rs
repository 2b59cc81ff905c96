use crate::Error;

pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// An image picked by the user, not yet uploaded
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn validate(&self) -> Result<(), Error> {
        match ALLOWED_IMAGE_TYPES.contains(&self.content_type.as_str()) {
            true => Ok(()),
            false => Err(Error::InvalidImageType(self.content_type.clone())),
        }
    }

    /// Extension of the original file name, or one matching the content type
    /// if the file name has none
    pub fn extension(&self) -> &str {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => match self.content_type.as_str() {
                "image/png" => "png",
                _ => "jpg",
            },
        }
    }

    /// Object name to upload under, `random` being freshly drawn for each upload
    pub fn storage_name(&self, random: u64) -> String {
        format!("{}.{}", random, self.extension())
    }

    /// Content type announced for a local file, judged on its extension only
    pub fn guess_content_type(file_name: &str) -> Option<&'static str> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            _ => None,
        }
    }
}

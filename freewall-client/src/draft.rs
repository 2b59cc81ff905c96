use crate::api::{self, validate_message, CommentId, ImageUpload, MAX_MESSAGE_CHARS};

/// Contents of the compose form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Draft {
    pub message: String,
    image: Option<ImageUpload>,

    /// Set when replying
    pub parent_id: Option<CommentId>,
}

impl Draft {
    pub fn new(parent_id: Option<CommentId>) -> Draft {
        Draft {
            message: String::new(),
            image: None,
            parent_id,
        }
    }

    pub fn with_message(message: &str) -> Draft {
        Draft {
            message: String::from(message),
            ..Draft::default()
        }
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    /// Keeps the previously selected image if `image` is not acceptable
    pub fn set_image(&mut self, image: ImageUpload) -> Result<(), api::Error> {
        image.validate()?;
        self.image = Some(image);
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Negative once over the limit
    pub fn chars_remaining(&self) -> i64 {
        MAX_MESSAGE_CHARS as i64 - self.message.chars().count() as i64
    }

    pub fn is_over_limit(&self) -> bool {
        self.chars_remaining() < 0
    }

    pub fn preview(&self) -> &str {
        match self.message.is_empty() {
            true => "No content to preview",
            false => &self.message,
        }
    }

    pub fn validate(&self) -> Result<(), api::Error> {
        validate_message(&self.message)?;
        if let Some(image) = &self.image {
            image.validate()?;
        }
        Ok(())
    }

    /// Clears the form after a successful post, staying on the same thread
    pub fn reset(&mut self) {
        *self = Draft::new(self.parent_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(content_type: &str) -> ImageUpload {
        ImageUpload {
            file_name: String::from("f.bin"),
            content_type: String::from(content_type),
            bytes: Vec::new(),
        }
    }

    #[test]
    fn remaining_characters() {
        let mut d = Draft::new(None);
        assert_eq!(d.chars_remaining(), 500);
        d.message = "a".repeat(500);
        assert_eq!(d.chars_remaining(), 0);
        assert!(!d.is_over_limit());
        d.message.push('b');
        assert_eq!(d.chars_remaining(), -1);
        assert!(d.is_over_limit());
        assert_eq!(d.validate(), Err(api::Error::MessageTooLong(501)));
    }

    #[test]
    fn rejected_image_keeps_previous() {
        let mut d = Draft::with_message("hi");
        d.set_image(image("image/png")).unwrap();
        assert_eq!(
            d.set_image(image("image/gif")),
            Err(api::Error::InvalidImageType(String::from("image/gif")))
        );
        assert_eq!(d.image().unwrap().content_type, "image/png");
        d.clear_image();
        assert!(d.image().is_none());
    }

    #[test]
    fn preview_and_reset() {
        let mut d = Draft::new(Some(CommentId(3)));
        assert_eq!(d.preview(), "No content to preview");
        d.message = String::from("Child");
        d.set_image(image("image/jpeg")).unwrap();
        assert_eq!(d.preview(), "Child");
        d.reset();
        assert_eq!(d, Draft::new(Some(CommentId(3))));
    }
}

//! Input collection: the form behind a submission.
//!
//! DESIGN
//! ======
//! File and text inputs are mutually exclusive. Picking a file clears the
//! text and re-derives the type selector from the file name; typing
//! non-blank text drops the file. Type detection looks at the extension
//! only. Content is never inspected, so spoofed or missing extensions pass
//! through unclassified and the backend decides.

use crate::error::ConsoleError;
use crate::types::DocumentType;

/// Infer the input type from a file name's extension (case-insensitive).
#[must_use]
pub fn detect_input_type(file_name: &str) -> Option<DocumentType> {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        Some(DocumentType::Pdf)
    } else if lower.ends_with(".json") {
        Some(DocumentType::Json)
    } else if lower.ends_with(".eml") || lower.ends_with(".txt") {
        Some(DocumentType::Email)
    } else {
        None
    }
}

/// MIME type sent for an uploaded file when the uploader did not declare one.
#[must_use]
pub fn guess_content_type(file_name: &str) -> &'static str {
    match detect_input_type(file_name) {
        Some(DocumentType::Pdf) => "application/pdf",
        Some(DocumentType::Json) => "application/json",
        Some(DocumentType::Email) if file_name.to_ascii_lowercase().ends_with(".eml") => {
            "message/rfc822"
        }
        Some(DocumentType::Email) => "text/plain",
        None => "application/octet-stream",
    }
}

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Upload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: None, bytes }
    }

    /// Declared content type, or one guessed from the extension.
    #[must_use]
    pub fn mime(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|mime| !mime.is_empty())
            .unwrap_or_else(|| guess_content_type(&self.file_name))
    }
}

/// What actually goes over the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    File(Upload),
    Text(String),
}

/// A validated, ready-to-send submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub payload: Payload,
    pub input_type: Option<DocumentType>,
}

/// Current state of the input controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputForm {
    file: Option<Upload>,
    text: String,
    input_type: Option<DocumentType>,
}

impl InputForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a file: clears the text and sets the type from the extension.
    pub fn select_file(&mut self, upload: Upload) {
        self.text.clear();
        self.input_type = detect_input_type(&upload.file_name);
        self.file = Some(upload);
    }

    /// Enter text: non-blank text drops any selected file.
    pub fn enter_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.trim().is_empty() {
            self.file = None;
        }
        self.text = text;
    }

    pub fn set_input_type(&mut self, input_type: Option<DocumentType>) {
        self.input_type = input_type;
    }

    /// Pre-populate from a sample payload.
    pub fn load_sample(&mut self, text: impl Into<String>, input_type: DocumentType) {
        self.file = None;
        self.text = text.into();
        self.input_type = Some(input_type);
    }

    #[must_use]
    pub fn file(&self) -> Option<&Upload> {
        self.file.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn input_type(&self) -> Option<DocumentType> {
        self.input_type
    }

    /// Require a file or non-blank text.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::InputMissing` when neither source is present.
    pub fn validate(&self) -> Result<Submission, ConsoleError> {
        let payload = if let Some(file) = &self.file {
            Payload::File(file.clone())
        } else if !self.text.trim().is_empty() {
            Payload::Text(self.text.clone())
        } else {
            return Err(ConsoleError::InputMissing);
        };

        Ok(Submission { payload, input_type: self.input_type })
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;

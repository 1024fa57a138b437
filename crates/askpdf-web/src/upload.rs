use axum::extract::Multipart;

/// An uploaded file with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parse the upload form, returning the single `pdf` field.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, String> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read form field: {}", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "pdf" => {
                let filename = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file data: {}", e))?
                    .to_vec();

                validate_pdf(&filename, &data)?;

                file = Some(UploadedFile { filename, data });
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    file.ok_or_else(|| "No file uploaded".to_string())
}

/// Cheap sanity check before the bytes reach the PDF parser: the upload
/// control is constrained to PDFs, so anything else is rejected outright.
fn validate_pdf(filename: &str, data: &[u8]) -> Result<(), String> {
    if data.is_empty() {
        return Err("Uploaded file is empty".to_string());
    }

    let lower = filename.to_lowercase();
    if lower.ends_with(".pdf") {
        if !data.starts_with(b"%PDF-") {
            return Err("File has .pdf extension but doesn't appear to be a valid PDF".to_string());
        }
        return Ok(());
    }

    // No .pdf extension: let the magic bytes decide
    if data.starts_with(b"%PDF-") {
        return Ok(());
    }

    Err("Unsupported file type. Please upload a PDF.".to_string())
}

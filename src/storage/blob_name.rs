//! Blob name generation
//!
//! Uploaded objects are named `{yyyymmdd}/{uuid}{ext}`: a date partition, a
//! random 128-bit identifier, and the original file's extension. Uniqueness
//! is probabilistic; no check is made against existing blobs.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Extract the extension from a file name, including the leading dot.
///
/// Returns the substring from the last `.` to the end of the name, or the
/// empty string when the name contains no dot.
pub fn file_extension(name: &str) -> &str {
    name.rfind('.').map_or("", |idx| &name[idx..])
}

/// Compose a blob name from an explicit date and identifier.
///
/// Pure building block behind [`blob_name`]; tests inject both
/// non-deterministic inputs through here.
pub fn blob_name_with(date: NaiveDate, id: Uuid, original_name: &str) -> String {
    format!(
        "{}/{}{}",
        date.format("%Y%m%d"),
        id,
        file_extension(original_name)
    )
}

/// Generate a blob name for `original_name` from the current local date and
/// a fresh random identifier.
pub fn blob_name(original_name: &str) -> String {
    blob_name_with(Local::now().date_naive(), Uuid::new_v4(), original_name)
}

/// Join base URL, container, and blob name into a public download URL.
pub fn public_url(base_url: &str, container: &str, blob_name: &str) -> String {
    format!(
        "{}/{container}/{blob_name}",
        base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("photo.png"), ".png");
        assert_eq!(file_extension("archive.tar.gz"), ".gz");
        assert_eq!(file_extension("noext"), "");
        assert_eq!(file_extension(""), "");
        assert_eq!(file_extension("trailing."), ".");
        // A leading dot counts as the extension separator, like filepath.Ext
        assert_eq!(file_extension(".gitignore"), ".gitignore");
    }

    #[test]
    fn test_blob_name_with_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date");
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").expect("valid uuid");

        assert_eq!(
            blob_name_with(date, id, "photo.png"),
            "20240307/67e55044-10b1-426f-9247-bb680e5fe0c8.png"
        );
        assert_eq!(
            blob_name_with(date, id, "noext"),
            "20240307/67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
    }

    #[test]
    fn test_blob_name_shape() {
        let name = blob_name("photo.png");

        let (date, rest) = name.split_once('/').expect("date partition");
        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));

        let id = rest.strip_suffix(".png").expect("extension preserved");
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_blob_name_without_extension() {
        let name = blob_name("noext");
        let (_, rest) = name.split_once('/').expect("date partition");
        assert!(!rest.contains('.'));
        assert!(Uuid::parse_str(rest).is_ok());
    }

    #[test]
    fn test_blob_names_are_unique() {
        assert_ne!(blob_name("a.txt"), blob_name("a.txt"));
    }

    #[test]
    fn test_public_url() {
        assert_eq!(
            public_url("https://cdn.example.com", "$web", "20240307/abc.png"),
            "https://cdn.example.com/$web/20240307/abc.png"
        );
        // A trailing slash on the base must not double up
        assert_eq!(
            public_url("https://cdn.example.com/", "$web", "20240307/abc.png"),
            "https://cdn.example.com/$web/20240307/abc.png"
        );
    }
}

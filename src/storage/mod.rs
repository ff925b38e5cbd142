// Storage naming module
// Blob name generation and public URL construction

mod blob_name;

pub use blob_name::{blob_name, blob_name_with, file_extension, public_url};

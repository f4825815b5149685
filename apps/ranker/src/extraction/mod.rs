// Input capture and text extraction.
// Uploads are held in memory for one request; nothing is written to disk.

pub mod pdf;
pub mod upload;

/*!
 * Text/binary classification heuristics
 *
 * Three checks run in order, short-circuiting on the first conclusive
 * one: a fixed binary-extension set, an extension-to-MIME lookup, and a
 * byte sniff of the first kilobyte. No error ever escapes this module;
 * unreadable files classify as binary.
 */

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use once_cell::sync::Lazy;

/// Number of bytes sampled from the start of a file when sniffing
const SNIFF_CHUNK_SIZE: usize = 1024;

/// Fraction of high (non-ASCII) bytes above which a sample counts as binary
const HIGH_BYTE_THRESHOLD: f64 = 0.30;

/// Extensions that are always binary, checked before any MIME lookup
static BINARY_EXTENSIONS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Images
        "png", "jpg", "jpeg", "gif", "ico", "svg",
        // Fonts
        "woff", "woff2", "ttf", "eot", "otf",
        // Audio / video
        "mp3", "mp4", "webm", "ogg",
        // Documents & archives
        "pdf", "zip", "gz", "rar", "7z",
    ]
});

/// Extension-to-MIME table consulted after the binary-extension set.
/// Extensions absent from the table fall through to byte sniffing.
static MIME_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("txt", "text/plain"),
        ("md", "text/markdown"),
        ("html", "text/html"),
        ("htm", "text/html"),
        ("css", "text/css"),
        ("csv", "text/csv"),
        ("js", "text/javascript"),
        ("mjs", "text/javascript"),
        ("xml", "text/xml"),
        ("bin", "application/octet-stream"),
        ("exe", "application/octet-stream"),
        ("dll", "application/octet-stream"),
        ("so", "application/octet-stream"),
        ("o", "application/octet-stream"),
        ("a", "application/octet-stream"),
        ("dat", "application/octet-stream"),
        ("class", "application/java-vm"),
        ("jar", "application/java-archive"),
        ("wasm", "application/wasm"),
        ("tar", "application/x-tar"),
        ("bz2", "application/x-bzip2"),
        ("xz", "application/x-xz"),
        ("doc", "application/msword"),
        ("xls", "application/vnd.ms-excel"),
        ("ppt", "application/vnd.ms-powerpoint"),
        ("sqlite", "application/vnd.sqlite3"),
        ("sqlite3", "application/vnd.sqlite3"),
        ("db", "application/vnd.sqlite3"),
        ("webp", "image/webp"),
        ("bmp", "image/bmp"),
        ("tif", "image/tiff"),
        ("tiff", "image/tiff"),
        ("wav", "audio/wav"),
        ("flac", "audio/flac"),
        ("avi", "video/x-msvideo"),
        ("mov", "video/quicktime"),
        ("mkv", "video/x-matroska"),
    ])
});

/// Decide whether a file is likely text-based
pub fn is_text_file(path: &Path) -> bool {
    if let Some(ext) = path.extension().map(|e| e.to_string_lossy().to_lowercase()) {
        if BINARY_EXTENSIONS.iter().any(|&e| e == ext) {
            return false;
        }
        if let Some(mime) = MIME_TYPES.get(ext.as_str()) {
            if !mime.starts_with("text/") {
                // application/octet-stream is too generic to trust the
                // extension; inspect the bytes instead
                if *mime == "application/octet-stream" {
                    return !binary_sniff(path);
                }
                return false;
            }
        }
    }

    !binary_sniff(path)
}

/// Quick binary inspection of the first `SNIFF_CHUNK_SIZE` bytes.
/// A NUL byte or a high-byte ratio above the threshold means binary;
/// unreadable files are binary too.
fn binary_sniff(path: &Path) -> bool {
    let mut chunk = [0u8; SNIFF_CHUNK_SIZE];
    let read = match File::open(path).and_then(|mut f| f.read(&mut chunk)) {
        Ok(n) => n,
        Err(_) => return true,
    };
    let chunk = &chunk[..read];

    if chunk.contains(&0) {
        return true;
    }
    if !chunk.is_empty() {
        let high = chunk.iter().filter(|&&b| b > 127).count();
        if high as f64 / chunk.len() as f64 > HIGH_BYTE_THRESHOLD {
            return true;
        }
    }

    false
}

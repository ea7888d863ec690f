//! Output formatting for emitted files.
//!
//! Each emitted file becomes one block on the sink:
//!
//! ````text
//! ## FILE: "src/main.rs"
//! ```rs
//! <raw file content>
//! ```
//!
//! ````

use std::{io::Write, path::Path};

/// Write one file block to `sink`.
///
/// The path, extension and content are written as raw bytes, without any
/// UTF-8 validation or replacement. The content is always followed by a
/// newline before the closing fence.
///
/// # Errors
///
/// Returns any error reported by the sink.
pub fn write_block<W: Write + ?Sized>(
    sink: &mut W,
    path: &Path,
    extension: &[u8],
    content: &[u8],
) -> std::io::Result<()> {
    sink.write_all(b"## FILE: \"")?;
    sink.write_all(path.as_os_str().as_encoded_bytes())?;
    sink.write_all(b"\"\n```")?;
    sink.write_all(extension)?;
    sink.write_all(b"\n")?;
    sink.write_all(content)?;
    sink.write_all(b"\n```\n\n")?;

    Ok(())
}

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use encoding_rs::{Encoding as RsEncoding, UTF_16BE, UTF_16LE, UTF_8};
use thiserror::Error;

/// 表示文件目前使用的行尾樣式。 / Represents the line ending style detected in a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    /// 回傳序列化文字時使用的行尾字串。 / Returns the literal string used when serialising text.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }
}

/// 列舉可讀寫的文字編碼。 / Text encodings a manifest can be read from and written back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
        }
    }

    fn from_rs(encoding: &'static RsEncoding) -> Option<Self> {
        if encoding == UTF_8 {
            Some(Encoding::Utf8)
        } else if encoding == UTF_16LE {
            Some(Encoding::Utf16Le)
        } else if encoding == UTF_16BE {
            Some(Encoding::Utf16Be)
        } else {
            None
        }
    }

    fn to_rs(self) -> &'static RsEncoding {
        match self {
            Encoding::Utf8 => UTF_8,
            Encoding::Utf16Le => UTF_16LE,
            Encoding::Utf16Be => UTF_16BE,
        }
    }
}

/// 文件載入或儲存時可能發生的錯誤。 / Errors that can occur while loading or saving a document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("file encoding is not supported or data is invalid")]
    InvalidEncoding,
    #[error("document has no associated path")]
    NoPath,
}

/// 以原始編碼、BOM 與行尾設定為後盾的文字文件。 / Text document that remembers the encoding, BOM and line ending it was read with.
///
/// Contents are kept exactly as decoded, terminators included. The detected
/// line ending is only a hint for lines the caller generates.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    contents: String,
    line_ending: LineEnding,
    encoding: Encoding,
    has_bom: bool,
}

impl Document {
    /// 由已讀取的位元組建立文件。 / Builds a document from bytes that were already read.
    pub fn from_bytes(path: Option<PathBuf>, bytes: &[u8]) -> Result<Self, DocumentError> {
        let decoded = decode_bytes(bytes)?;
        let line_ending = detect_line_ending(&decoded.text);

        Ok(Self {
            path,
            contents: decoded.text,
            line_ending,
            encoding: decoded.encoding,
            has_bom: decoded.has_bom,
        })
    }

    /// 將文件寫回原路徑：先寫暫存檔再重新命名。 / Saves to the document's path through a sibling temporary file and a rename.
    pub fn save(&self) -> Result<(), DocumentError> {
        let path = self.path.as_deref().ok_or(DocumentError::NoPath)?;
        let encoded = self.serialise_contents();

        let tmp_path = temporary_sibling(path);
        let result = write_synced(&tmp_path, &encoded).and_then(|()| fs::rename(&tmp_path, path));
        if let Err(err) = result {
            // 失敗時移除暫存檔。 / Leave no temporary file behind on failure.
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// 以新文字取代內容（原樣保存行尾）。 / Replaces the contents verbatim, terminators included.
    pub fn set_contents(&mut self, text: impl Into<String>) {
        self.contents = text.into();
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn has_bom(&self) -> bool {
        self.has_bom
    }

    pub(crate) fn serialise_contents(&self) -> Vec<u8> {
        match self.encoding {
            Encoding::Utf8 => {
                let mut bytes = Vec::with_capacity(3 + self.contents.len());
                if self.has_bom {
                    bytes.extend_from_slice(b"\xEF\xBB\xBF");
                }
                bytes.extend_from_slice(self.contents.as_bytes());
                bytes
            }
            Encoding::Utf16Le => encode_utf16(&self.contents, self.has_bom, false),
            Encoding::Utf16Be => encode_utf16(&self.contents, self.has_bom, true),
        }
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

struct DecodedText {
    text: String,
    encoding: Encoding,
    has_bom: bool,
}

fn decode_bytes(bytes: &[u8]) -> Result<DecodedText, DocumentError> {
    let (encoding, bom_len) = match RsEncoding::for_bom(bytes) {
        Some((rs, len)) => (
            Encoding::from_rs(rs).ok_or(DocumentError::InvalidEncoding)?,
            len,
        ),
        None => (Encoding::Utf8, 0),
    };

    let (text, had_errors) = encoding
        .to_rs()
        .decode_without_bom_handling(&bytes[bom_len..]);
    if had_errors {
        return Err(DocumentError::InvalidEncoding);
    }

    Ok(DecodedText {
        text: text.into_owned(),
        encoding,
        has_bom: bom_len > 0,
    })
}

fn encode_utf16(text: &str, include_bom: bool, big_endian: bool) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(text.len() * 2 + if include_bom { 2 } else { 0 });
    if include_bom {
        buffer.extend_from_slice(if big_endian { b"\xFE\xFF" } else { b"\xFF\xFE" });
    }

    for unit in text.encode_utf16() {
        let bytes = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        buffer.extend_from_slice(&bytes);
    }
    buffer
}

fn temporary_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp_slnfolders");
    PathBuf::from(name)
}

/// 掃描第一個換行記號以推斷行尾偏好。 / Scans for the first newline sentinel to infer the line ending.
fn detect_line_ending(text: &str) -> LineEnding {
    let bytes = text.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        match byte {
            b'\r' => {
                if bytes.get(idx + 1) == Some(&b'\n') {
                    return LineEnding::CrLf;
                }
                return LineEnding::Cr;
            }
            b'\n' => return LineEnding::Lf,
            _ => {}
        }
    }
    LineEnding::Lf
}

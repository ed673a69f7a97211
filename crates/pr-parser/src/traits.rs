use std::path::Path;

use pr_core::Result;
use pr_phonetics::Text;

/// Trait for transcript parsers.
pub trait TranscriptParser: Send + Sync {
    /// Parse transcript content.
    fn parse_content(&self, content: &str) -> Result<Text>;

    /// Parse from a UTF-8 file. I/O failures surface as `PrError::Io`.
    fn parse_file(&self, path: &Path) -> Result<Text> {
        let content = std::fs::read_to_string(path)?;
        self.parse_content(&content)
    }

    /// Supported file extensions, dot included.
    fn supported_extensions(&self) -> Vec<String>;

    /// Check if a file can be parsed.
    fn can_parse(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let ext_with_dot = format!(".{ext}");
        self.supported_extensions().contains(&ext_with_dot)
    }
}

//! Buffered line splitter for streamed tool output
//!
//! Chunks arrive at arbitrary byte boundaries. Completed lines are handed
//! out per chunk; the trailing partial line is carried into the next chunk
//! and released by [`LineSplitter::finish`] once the stream ends.

/// Carry buffer that turns stdout chunks into whole lines
#[derive(Debug, Default)]
pub struct LineSplitter {
    carry: String,
    /// Bytes of a UTF-8 sequence cut off at the end of the last chunk
    split_char: Vec<u8>,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk, returning every line it completed
    pub fn push(&mut self, chunk: &str) -> Vec<String> {
        self.carry.push_str(chunk);

        let Some(last_newline) = self.carry.rfind('\n') else {
            return Vec::new();
        };

        let rest = self.carry.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.carry, rest);

        complete
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Feed raw bytes; a multi-byte character split across chunks is held back
    pub fn push_bytes(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut bytes = std::mem::take(&mut self.split_char);
        bytes.extend_from_slice(chunk);

        let valid = match std::str::from_utf8(&bytes) {
            Ok(_) => bytes.len(),
            // error_len() == None means the input ended mid-character
            Err(e) if e.error_len().is_none() => e.valid_up_to(),
            Err(_) => bytes.len(),
        };
        self.split_char = bytes.split_off(valid);
        self.push(&String::from_utf8_lossy(&bytes))
    }

    /// The remainder after the last newline (if any)
    pub fn pending(&self) -> &str {
        &self.carry
    }

    /// End of stream: flush the remainder as a final item
    pub fn finish(mut self) -> Option<String> {
        if !self.split_char.is_empty() {
            let tail = String::from_utf8_lossy(&self.split_char).into_owned();
            self.carry.push_str(&tail);
        }
        let rest = self.carry.trim_end_matches('\r');
        if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_across_chunks() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push("alpha\nbe"), vec!["alpha"]);
        assert_eq!(splitter.pending(), "be");
        assert_eq!(splitter.push("ta\ngam"), vec!["beta"]);
        assert!(splitter.push("ma").is_empty());
        assert_eq!(splitter.finish(), Some("gamma".to_string()));
    }

    #[test]
    fn test_many_lines_in_one_chunk() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push("a\nb\nc\n"), vec!["a", "b", "c"]);
        assert_eq!(splitter.finish(), None);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "naïve\nrésumé\n".as_bytes();
        // cut inside the two-byte 'ï'
        let cut = "na".len() + 1;
        let mut splitter = LineSplitter::new();
        assert!(splitter.push_bytes(&text[..cut]).is_empty());
        assert_eq!(splitter.push_bytes(&text[cut..]), vec!["naïve", "résumé"]);
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let mut splitter = LineSplitter::new();
        assert_eq!(splitter.push("a\r\n\r\nb\r"), vec!["a"]);
        assert_eq!(splitter.push("\n"), vec!["b"]);
    }
}

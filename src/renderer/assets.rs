//! Card images with a placeholder fallback
//!
//! A source that fails to load is swapped for the embedded placeholder for
//! that card only. Failed sources are never retried.

/// Placeholder shown in place of an image that failed to load
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml,<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"160\" height=\"220\"><rect width=\"100%\" height=\"100%\" fill=\"%23e2e8f0\"/><text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" fill=\"%234a5568\" font-size=\"18\">Image</text></svg>";

/// Image source per card, plus which ones failed
#[derive(Debug, Clone, Default)]
pub struct CardImages {
    sources: Vec<String>,
    failed: Vec<bool>,
}

impl CardImages {
    pub fn new<S: AsRef<str>>(sources: &[S]) -> Self {
        Self {
            sources: sources.iter().map(|s| s.as_ref().to_string()).collect(),
            failed: vec![false; sources.len()],
        }
    }

    /// Record a load failure; returns true the first time for a card
    pub fn mark_failed(&mut self, index: usize) -> bool {
        match self.failed.get_mut(index) {
            Some(failed) if !*failed => {
                *failed = true;
                log::warn!(
                    "Card {} image failed to load, using placeholder: {}",
                    index,
                    self.sources[index]
                );
                true
            }
            _ => false,
        }
    }

    pub fn is_failed(&self, index: usize) -> bool {
        self.failed.get(index).copied().unwrap_or(false)
    }

    /// Source to display for a card
    pub fn resolve(&self, index: usize) -> Option<&str> {
        let src = self.sources.get(index)?;
        if self.failed[index] {
            Some(FALLBACK_IMAGE)
        } else {
            Some(src.as_str())
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_only_for_failed_card() {
        let mut images = CardImages::new(&["a.jpg", "b.jpg", "c.jpg"]);
        assert!(images.mark_failed(1));

        assert_eq!(images.resolve(0), Some("a.jpg"));
        assert_eq!(images.resolve(1), Some(FALLBACK_IMAGE));
        assert_eq!(images.resolve(2), Some("c.jpg"));
        assert!(images.is_failed(1));
        assert!(!images.is_failed(0));
    }

    #[test]
    fn test_failure_reported_once() {
        let mut images = CardImages::new(&["a.jpg"]);
        assert!(images.mark_failed(0));
        assert!(!images.mark_failed(0));
        assert_eq!(images.resolve(0), Some(FALLBACK_IMAGE));
    }

    #[test]
    fn test_out_of_range() {
        let mut images = CardImages::new(&["a.jpg"]);
        assert!(!images.mark_failed(5));
        assert_eq!(images.resolve(5), None);
        assert!(!images.is_failed(5));
    }

    #[test]
    fn test_placeholder_is_svg_data_uri() {
        assert!(FALLBACK_IMAGE.starts_with("data:image/svg+xml,"));
        assert!(FALLBACK_IMAGE.contains("width=\"160\""));
    }
}

use crate::diagram::C4Kind;

#[derive(Debug, thiserror::Error)]
#[error("No diagram type detected matching given configuration for text: {text}")]
pub struct DetectTypeError {
    pub text: String,
}

pub type DetectorFn = fn(text: &str) -> bool;

#[derive(Debug, Clone)]
pub struct Detector {
    pub id: &'static str,
    pub detector: DetectorFn,
}

/// Ordered list of dialect detectors; the first one that accepts the text wins.
#[derive(Debug, Clone, Default)]
pub struct DetectorRegistry {
    detectors: Vec<Detector>,
}

impl DetectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, detector: Detector) {
        self.detectors.push(detector);
    }

    pub fn add_fn(&mut self, id: &'static str, detector: DetectorFn) {
        self.add(Detector { id, detector });
    }

    pub fn detect_type(&self, text: &str) -> Result<&'static str, DetectTypeError> {
        for det in &self.detectors {
            if (det.detector)(text) {
                return Ok(det.id);
            }
        }

        Err(DetectTypeError {
            text: text.to_string(),
        })
    }

    /// Registry containing only the C4 dialect detector.
    pub fn c4() -> Self {
        let mut reg = Self::new();
        reg.add_fn("c4", is_c4);
        reg
    }
}

/// Returns `true` when the text contains any of the C4 diagram-kind markers.
///
/// This is a substring test, not a structural check: a marker appearing inside a label or a
/// comment still counts.
pub fn is_c4(text: &str) -> bool {
    detect_kind(text).is_some()
}

/// Returns the first marker (in `C4Context`, `C4Container`, `C4Component` order) present in
/// the text.
pub fn detect_kind(text: &str) -> Option<C4Kind> {
    let trimmed = text.trim();
    C4Kind::ALL
        .into_iter()
        .find(|kind| trimmed.contains(kind.marker()))
}

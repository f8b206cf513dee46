//! Simulated plant disease detection.
//!
//! Selecting an image enables analysis; analysis waits a fixed delay and always
//! yields the same mock diagnosis.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{KrishiError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub disease: &'static str,
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: &'static [&'static str],
    pub preventive_measures: &'static [&'static str],
}

const MOCK_RESULT: DetectionResult = DetectionResult {
    disease: "Late Blight (Tomato)",
    confidence: 87,
    severity: Severity::High,
    treatment: &[
        "Apply copper-based fungicide immediately",
        "Remove affected leaves and dispose properly",
        "Improve air circulation around plants",
        "Reduce watering frequency",
    ],
    preventive_measures: &[
        "Use resistant varieties",
        "Maintain proper plant spacing",
        "Avoid overhead watering",
        "Apply preventive fungicide spray",
    ],
};

const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// The photo chosen for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    NoImage,
    Ready,
    Analyzing,
    Done,
}

pub struct DiseaseScanner {
    image: Option<SelectedImage>,
    analyzing: bool,
    result: Option<DetectionResult>,
    delay: Duration,
}

impl DiseaseScanner {
    pub fn new(delay: Duration) -> Self {
        Self {
            image: None,
            analyzing: false,
            result: None,
            delay,
        }
    }

    pub fn state(&self) -> ScanState {
        if self.analyzing {
            ScanState::Analyzing
        } else if self.result.is_some() {
            ScanState::Done
        } else if self.image.is_some() {
            ScanState::Ready
        } else {
            ScanState::NoImage
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }

    /// Analysis needs an image and no analysis already running.
    pub fn can_analyze(&self) -> bool {
        self.image.is_some() && !self.analyzing
    }

    /// Choose an image file. Any previous result is discarded.
    pub fn select_image(&mut self, path: &Path) -> Result<()> {
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
            .unwrap_or(false);
        if !is_image {
            warn!(path = %path.display(), "rejected non-image file");
            return Err(KrishiError::UnsupportedImage(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(KrishiError::UnsupportedImage(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(%name, size = metadata.len(), "image selected");

        self.image = Some(SelectedImage {
            path: path.to_path_buf(),
            name,
            size_bytes: metadata.len(),
        });
        self.result = None;
        Ok(())
    }

    /// Mark analysis as started and return how long it will take.
    pub fn begin(&mut self) -> Result<Duration> {
        if self.image.is_none() {
            return Err(KrishiError::NoImageSelected);
        }
        if self.analyzing {
            return Err(KrishiError::AnalysisInProgress);
        }
        self.analyzing = true;
        Ok(self.delay)
    }

    pub fn finish(&mut self, result: DetectionResult) {
        info!(disease = result.disease, confidence = result.confidence, "analysis complete");
        self.analyzing = false;
        self.result = Some(result);
    }

    /// Run the whole flow inline.
    pub async fn analyze(&mut self) -> Result<DetectionResult> {
        let delay = self.begin()?;
        let result = run_analysis(delay).await;
        self.finish(result);
        Ok(result)
    }
}

/// Wait out the simulated inference and produce the diagnosis.
pub async fn run_analysis(delay: Duration) -> DetectionResult {
    tokio::time::sleep(delay).await;
    MOCK_RESULT
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scanner() -> DiseaseScanner {
        DiseaseScanner::new(Duration::from_millis(3000))
    }

    fn write_file(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"\x89PNG fake").unwrap();
        path
    }

    #[test]
    fn test_cannot_analyze_without_image() {
        let mut s = scanner();
        assert_eq!(s.state(), ScanState::NoImage);
        assert!(!s.can_analyze());
        assert!(matches!(s.begin(), Err(KrishiError::NoImageSelected)));
    }

    #[test]
    fn test_rejects_non_image_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt");
        let mut s = scanner();
        assert!(matches!(s.select_image(&path), Err(KrishiError::UnsupportedImage(_))));
        assert!(s.image().is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut s = scanner();
        let err = s.select_image(&dir.path().join("leaf.png")).unwrap_err();
        assert!(matches!(err, KrishiError::Io(_)));
    }

    #[test]
    fn test_selecting_image_enables_analysis() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "Leaf.JPG");
        let mut s = scanner();
        s.select_image(&path).unwrap();
        assert_eq!(s.state(), ScanState::Ready);
        assert!(s.can_analyze());
        let image = s.image().unwrap();
        assert_eq!(image.name, "Leaf.JPG");
        assert_eq!(image.size_bytes, 9);
    }

    #[test]
    fn test_double_begin_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut s = scanner();
        s.select_image(&write_file(&dir, "a.png")).unwrap();
        s.begin().unwrap();
        assert_eq!(s.state(), ScanState::Analyzing);
        assert!(!s.can_analyze());
        assert!(matches!(s.begin(), Err(KrishiError::AnalysisInProgress)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analysis_yields_fixed_result_after_delay() {
        let dir = TempDir::new().unwrap();
        let mut s = scanner();
        s.select_image(&write_file(&dir, "tomato.png")).unwrap();

        let start = tokio::time::Instant::now();
        let result = s.analyze().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert_eq!(result.disease, "Late Blight (Tomato)");
        assert_eq!(result.confidence, 87);
        assert_eq!(result.severity, Severity::High);
        assert_eq!(s.state(), ScanState::Done);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_image_clears_previous_result() {
        let dir = TempDir::new().unwrap();
        let mut s = scanner();
        s.select_image(&write_file(&dir, "one.png")).unwrap();
        s.analyze().await.unwrap();
        s.select_image(&write_file(&dir, "two.webp")).unwrap();
        assert!(s.result().is_none());
        assert_eq!(s.state(), ScanState::Ready);
    }
}

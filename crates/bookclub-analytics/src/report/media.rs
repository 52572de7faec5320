//! Page and audio aggregates across editions.

use serde::{Deserialize, Serialize};

use bookclub_core::types::duration::AudioDuration;
use bookclub_core::types::group::EditionMedia;

/// Media section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaStats {
    pub editions_with_pages: u32,
    pub total_pages: u64,
    pub average_pages: f64,
    pub editions_with_audio: u32,
    pub total_audio_seconds: u64,
    pub average_audio_seconds: u64,
    /// `"Nh Mm"`.
    pub total_audio_display: String,
    pub average_audio_display: String,
}

/// Aggregate pages and listening time. Editions missing a value are skipped
/// for that value only; zero-length entries count as missing.
pub fn media_stats(editions: &[EditionMedia]) -> MediaStats {
    let pages: Vec<u64> = editions
        .iter()
        .filter_map(|e| e.pages)
        .filter(|&p| p > 0)
        .map(u64::from)
        .collect();
    let audio: Vec<u64> = editions
        .iter()
        .filter_map(|e| e.audio_seconds)
        .filter(|&s| s > 0)
        .collect();

    let total_pages: u64 = pages.iter().sum();
    let average_pages = if pages.is_empty() {
        0.0
    } else {
        total_pages as f64 / pages.len() as f64
    };

    let total_audio_seconds: u64 = audio.iter().sum();
    let average_audio_seconds = if audio.is_empty() {
        0
    } else {
        (total_audio_seconds as f64 / audio.len() as f64).round() as u64
    };

    MediaStats {
        editions_with_pages: pages.len() as u32,
        total_pages,
        average_pages,
        editions_with_audio: audio.len() as u32,
        total_audio_seconds,
        average_audio_seconds,
        total_audio_display: AudioDuration::from_seconds(total_audio_seconds).to_string(),
        average_audio_display: AudioDuration::from_seconds(average_audio_seconds).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookclub_core::{BookId, EditionId};

    fn edition(id: u64, pages: Option<u32>, audio: Option<u64>) -> EditionMedia {
        EditionMedia {
            edition_id: EditionId(id),
            book_id: BookId(id),
            pages,
            audio_seconds: audio,
        }
    }

    #[test]
    fn aggregates_pages_and_audio_separately() {
        let editions = vec![
            edition(1, Some(300), None),
            edition(2, Some(500), Some(36_000)),
            edition(3, None, Some(18_000)),
            edition(4, Some(0), Some(0)),
        ];
        let stats = media_stats(&editions);
        assert_eq!(stats.editions_with_pages, 2);
        assert_eq!(stats.total_pages, 800);
        assert!((stats.average_pages - 400.0).abs() < 1e-9);
        assert_eq!(stats.editions_with_audio, 2);
        assert_eq!(stats.total_audio_display, "15h 0m");
        assert_eq!(stats.average_audio_display, "7h 30m");
    }

    #[test]
    fn no_editions_is_all_zero() {
        let stats = media_stats(&[]);
        assert_eq!(stats.total_pages, 0);
        assert_eq!(stats.average_pages, 0.0);
        assert_eq!(stats.total_audio_display, "0h 0m");
    }
}

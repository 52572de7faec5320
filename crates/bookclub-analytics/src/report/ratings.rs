//! Rating statistics.

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median, Statistics};

use bookclub_core::types::group::{GroupRoster, RatingRecord};
use bookclub_core::{BookId, FxHashMap, MemberId};

use crate::attribution::PickEvent;

const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;
/// Half-point buckets from 1.0 to 5.0.
const BUCKET_COUNT: usize = 9;

/// How many ratings landed in one half-point bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating: f64,
    pub count: u32,
}

/// Group-wide rating statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub count: u32,
    pub mean: f64,
    pub median: f64,
    pub distribution: Vec<RatingBucket>,
}

/// Average rating of the books a member picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerRating {
    pub member_id: MemberId,
    pub username: String,
    pub books_rated: u32,
    pub average_rating: f64,
}

/// Round to the nearest half point, clamped to 1.0..=5.0.
pub fn to_half_point(rating: f64) -> f64 {
    ((rating * 2.0).round() / 2.0).clamp(MIN_RATING, MAX_RATING)
}

fn bucket_index(rating: f64) -> usize {
    (((to_half_point(rating) - MIN_RATING) * 2.0) as usize).min(BUCKET_COUNT - 1)
}

fn finite_ratings(ratings: &[RatingRecord]) -> impl Iterator<Item = &RatingRecord> {
    ratings.iter().filter(|r| r.rating.is_finite())
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().mean()
    }
}

/// Count, mean, median, and half-point distribution of all ratings.
pub fn rating_stats(ratings: &[RatingRecord]) -> RatingStats {
    let values: Vec<f64> = finite_ratings(ratings).map(|r| r.rating).collect();

    let mut distribution: Vec<RatingBucket> = (0..BUCKET_COUNT)
        .map(|i| RatingBucket {
            rating: MIN_RATING + i as f64 * 0.5,
            count: 0,
        })
        .collect();
    for &v in &values {
        distribution[bucket_index(v)].count += 1;
    }

    let median = if values.is_empty() {
        0.0
    } else {
        Data::new(values.clone()).median()
    };

    RatingStats {
        count: values.len() as u32,
        mean: mean(&values),
        median,
        distribution,
    }
}

/// Per roster member, the average rating of the books they picked.
pub fn picker_ratings(
    sequence: &[PickEvent],
    ratings: &[RatingRecord],
    roster: &GroupRoster,
) -> Vec<PickerRating> {
    let mut by_book: FxHashMap<BookId, Vec<f64>> = FxHashMap::default();
    for r in finite_ratings(ratings) {
        by_book.entry(r.book_id).or_default().push(r.rating);
    }

    roster
        .members
        .iter()
        .map(|member| {
            let book_means: Vec<f64> = sequence
                .iter()
                .filter(|e| e.attribution.member_id() == Some(member.id))
                .filter_map(|e| by_book.get(&e.book_id))
                .map(|values| mean(values))
                .collect();
            PickerRating {
                member_id: member.id,
                username: member.username.clone(),
                books_rated: book_means.len() as u32,
                average_rating: mean(&book_means),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(book: u64, member: u64, value: f64) -> RatingRecord {
        RatingRecord { book_id: BookId(book), member_id: MemberId(member), rating: value }
    }

    #[test]
    fn half_point_rounding_and_clamping() {
        assert_eq!(to_half_point(3.74), 3.5);
        assert_eq!(to_half_point(3.76), 4.0);
        assert_eq!(to_half_point(0.5), 1.0);
        assert_eq!(to_half_point(7.0), 5.0);
    }

    #[test]
    fn stats_over_ratings() {
        let ratings = vec![rating(1, 1, 4.0), rating(1, 2, 5.0), rating(2, 1, 3.0), rating(2, 2, f64::NAN)];
        let stats = rating_stats(&ratings);
        assert_eq!(stats.count, 3);
        assert!((stats.mean - 4.0).abs() < 1e-9);
        assert!((stats.median - 4.0).abs() < 1e-9);
        assert_eq!(stats.distribution.len(), 9);
        assert_eq!(stats.distribution[4], RatingBucket { rating: 3.0, count: 1 });
        assert_eq!(stats.distribution[8], RatingBucket { rating: 5.0, count: 1 });
    }

    #[test]
    fn empty_ratings_are_zero() {
        let stats = rating_stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.median, 0.0);
        assert!(stats.distribution.iter().all(|b| b.count == 0));
    }
}

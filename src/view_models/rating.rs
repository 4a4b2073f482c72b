//! Star Rating Model
//!
//! Committed baseline plus a transient hover preview.

pub const STAR_COUNT: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarState {
    /// Part of the last server-confirmed rating
    CommittedFilled,
    /// Filled only because of the current hover
    PreviewFilled,
    Empty,
}

impl StarState {
    pub fn is_filled(self) -> bool {
        self != StarState::Empty
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    rating: f64,
    committed: u8,
    preview: Option<u8>,
}

impl StarRating {
    pub fn new(rating: f64) -> Self {
        Self {
            rating,
            committed: rounded_stars(rating),
            preview: None,
        }
    }

    /// Pointer entered star `k`: preview stars 1..=k
    pub fn hover_enter(&mut self, star: u8) {
        self.preview = Some(star.min(STAR_COUNT));
    }

    /// Pointer left: back to the committed baseline
    pub fn hover_leave(&mut self) {
        self.preview = None;
    }

    /// Server confirmed a new rating; it becomes the baseline
    pub fn commit(&mut self, rating: f64) {
        self.rating = rating;
        self.committed = rounded_stars(rating);
        self.preview = None;
    }

    pub fn committed(&self) -> u8 {
        self.committed
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// State of star `k` (1-based)
    pub fn star(&self, star: u8) -> StarState {
        if star <= self.committed {
            StarState::CommittedFilled
        } else if self.preview.map_or(false, |p| star <= p) {
            StarState::PreviewFilled
        } else {
            StarState::Empty
        }
    }

    pub fn stars(&self) -> Vec<StarState> {
        (1..=STAR_COUNT).map(|k| self.star(k)).collect()
    }

    /// Raw rating with one decimal, e.g. "( 3.0 )"
    pub fn label(&self) -> String {
        format!("( {:.1} )", self.rating)
    }
}

/// Half-up rounding to a whole star count
fn rounded_stars(rating: f64) -> u8 {
    if !rating.is_finite() || rating <= 0.0 {
        return 0;
    }
    ((rating + 0.5).floor() as u8).min(STAR_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(model: &StarRating) -> Vec<bool> {
        model.stars().into_iter().map(StarState::is_filled).collect()
    }

    #[test]
    fn test_commit_three() {
        let mut model = StarRating::new(0.0);
        model.commit(3.0);
        assert_eq!(
            model.stars(),
            vec![
                StarState::CommittedFilled,
                StarState::CommittedFilled,
                StarState::CommittedFilled,
                StarState::Empty,
                StarState::Empty,
            ]
        );
        assert_eq!(model.label(), "( 3.0 )");
    }

    #[test]
    fn test_commit_extremes() {
        let mut model = StarRating::new(4.0);
        model.commit(5.0);
        assert_eq!(filled(&model), vec![true; 5]);

        model.commit(1.0);
        assert_eq!(filled(&model), vec![true, false, false, false, false]);
    }

    #[test]
    fn test_hover_never_moves_baseline() {
        let mut model = StarRating::new(2.0);
        model.hover_enter(5);
        assert_eq!(model.committed(), 2);
        assert_eq!(model.star(4), StarState::PreviewFilled);

        model.hover_enter(1);
        // committed stars above the preview stay filled
        assert_eq!(model.star(2), StarState::CommittedFilled);
        assert_eq!(model.star(3), StarState::Empty);

        model.hover_leave();
        assert_eq!(filled(&model), vec![true, true, false, false, false]);
        assert_eq!(model.committed(), 2);
    }

    #[test]
    fn test_commit_replaces_baseline_for_later_leave() {
        let mut model = StarRating::new(1.0);
        model.hover_enter(4);
        model.commit(4.0);
        model.hover_enter(5);
        model.hover_leave();
        assert_eq!(model.committed(), 4);
        assert_eq!(filled(&model), vec![true, true, true, true, false]);
    }

    #[test]
    fn test_rounding_and_label() {
        let model = StarRating::new(3.5);
        assert_eq!(model.committed(), 4);
        assert_eq!(model.label(), "( 3.5 )");

        assert_eq!(StarRating::new(3.45).committed(), 3);
        assert_eq!(StarRating::new(0.0).committed(), 0);
        assert_eq!(StarRating::new(f64::NAN).committed(), 0);
    }
}

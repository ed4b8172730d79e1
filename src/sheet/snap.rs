use smallvec::SmallVec;
use thiserror::Error;

/// Release speed, in pixels per second, above which a drag counts as a fling.
pub const FLING_VELOCITY_THRESHOLD: f32 = 700.;

#[derive(Debug, Error, PartialEq)]
pub enum SnapPointsError {
    #[error("at least one snap point is required")]
    Empty,

    #[error("snap fraction {0} is outside (0, 1]")]
    InvalidFraction(f32),

    #[error("available height {0} must be a positive, finite number")]
    InvalidHeight(f32),
}

/// Discrete heights a sheet can rest at, sorted ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPoints {
    fractions: SmallVec<[f32; 4]>,
    heights: SmallVec<[f32; 4]>,
}

impl SnapPoints {
    /// Builds snap heights as `fraction * available_height`.
    ///
    /// Fractions may be given in any order; duplicates collapse into one point.
    pub fn from_fractions(
        fractions: &[f32],
        available_height: f32,
    ) -> Result<Self, SnapPointsError> {
        if fractions.is_empty() {
            return Err(SnapPointsError::Empty);
        }

        if let Some(&bad) = fractions
            .iter()
            .find(|f| !f.is_finite() || **f <= 0. || **f > 1.)
        {
            return Err(SnapPointsError::InvalidFraction(bad));
        }

        let mut fractions: SmallVec<[f32; 4]> = fractions.iter().copied().collect();
        fractions.sort_by(f32::total_cmp);
        fractions.dedup();

        let mut points = Self {
            fractions,
            heights: SmallVec::new(),
        };
        points.resize(available_height)?;

        Ok(points)
    }

    /// Recomputes heights for a new available height, e.g. after a window resize.
    pub fn resize(&mut self, available_height: f32) -> Result<(), SnapPointsError> {
        if !available_height.is_finite() || available_height <= 0. {
            return Err(SnapPointsError::InvalidHeight(available_height));
        }

        self.heights = self
            .fractions
            .iter()
            .map(|fraction| fraction * available_height)
            .collect();

        Ok(())
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn height(&self, index: usize) -> f32 {
        self.heights[index.min(self.last_index())]
    }

    pub fn min(&self) -> f32 {
        self.heights[0]
    }

    pub fn max(&self) -> f32 {
        self.heights[self.last_index()]
    }

    pub fn last_index(&self) -> usize {
        self.heights.len() - 1
    }

    /// Dragging never extrapolates past the outermost snap points.
    pub fn clamp(&self, height: f32) -> f32 {
        height.clamp(self.min(), self.max())
    }

    /// Index of the closest snap point. Ties go to the lower one.
    pub fn nearest(&self, height: f32) -> usize {
        let mut best = 0;
        let mut best_distance = f32::INFINITY;

        for (index, snap) in self.heights.iter().enumerate() {
            let distance = (snap - height).abs();
            if distance < best_distance {
                best = index;
                best_distance = distance;
            }
        }

        best
    }

    /// Picks the resting snap point for a released drag.
    ///
    /// `velocity` is in pixels per second along the height axis, positive
    /// when the sheet was growing.
    pub fn resolve_release(&self, height: f32, velocity: f32) -> usize {
        if velocity.abs() <= FLING_VELOCITY_THRESHOLD {
            return self.nearest(height);
        }

        if velocity > 0. {
            self.heights
                .iter()
                .position(|snap| *snap > height)
                .unwrap_or(self.last_index())
        } else {
            self.heights
                .iter()
                .rposition(|snap| *snap < height)
                .unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> SnapPoints {
        // 250, 500, 900
        SnapPoints::from_fractions(&[0.9, 0.25, 0.5], 1000.).unwrap()
    }

    #[test]
    fn heights_are_sorted_fractions_of_available_height() {
        assert_eq!(points().heights(), &[250., 500., 900.]);
    }

    #[test]
    fn duplicate_fractions_collapse() {
        let points = SnapPoints::from_fractions(&[0.5, 0.5, 1.0], 200.).unwrap();
        assert_eq!(points.heights(), &[100., 200.]);
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert_eq!(
            SnapPoints::from_fractions(&[], 100.),
            Err(SnapPointsError::Empty)
        );
        assert_eq!(
            SnapPoints::from_fractions(&[0.5, 1.5], 100.),
            Err(SnapPointsError::InvalidFraction(1.5))
        );
        assert_eq!(
            SnapPoints::from_fractions(&[0.], 100.),
            Err(SnapPointsError::InvalidFraction(0.))
        );
        assert_eq!(
            SnapPoints::from_fractions(&[0.5], 0.),
            Err(SnapPointsError::InvalidHeight(0.))
        );
        assert!(SnapPoints::from_fractions(&[f32::NAN], 100.).is_err());
    }

    #[test]
    fn clamp_holds_at_both_ends() {
        let points = points();
        assert_eq!(points.clamp(10.), 250.);
        assert_eq!(points.clamp(5000.), 900.);
        assert_eq!(points.clamp(-40.), 250.);
        assert_eq!(points.clamp(600.), 600.);
    }

    #[test]
    fn slow_release_snaps_to_nearest() {
        let points = points();
        for velocity in [0., 300., -300., FLING_VELOCITY_THRESHOLD, -FLING_VELOCITY_THRESHOLD] {
            assert_eq!(points.resolve_release(260., velocity), 0);
            assert_eq!(points.resolve_release(370., velocity), 0);
            assert_eq!(points.resolve_release(380., velocity), 1);
            assert_eq!(points.resolve_release(690., velocity), 1);
            assert_eq!(points.resolve_release(710., velocity), 2);
        }
    }

    #[test]
    fn nearest_breaks_ties_downward() {
        assert_eq!(points().nearest(375.), 0);
        assert_eq!(points().nearest(700.), 1);
    }

    #[test]
    fn fast_upward_release_moves_to_next_point_above() {
        let points = points();
        let velocity = FLING_VELOCITY_THRESHOLD + 1.;

        assert_eq!(points.resolve_release(260., velocity), 1);
        assert_eq!(points.resolve_release(250., velocity), 1);
        assert_eq!(points.resolve_release(500., velocity), 2);
        assert_eq!(points.resolve_release(510., velocity), 2);
    }

    #[test]
    fn fast_downward_release_moves_to_next_point_below() {
        let points = points();
        let velocity = -(FLING_VELOCITY_THRESHOLD + 1.);

        assert_eq!(points.resolve_release(880., velocity), 1);
        assert_eq!(points.resolve_release(900., velocity), 1);
        assert_eq!(points.resolve_release(500., velocity), 0);
        assert_eq!(points.resolve_release(490., velocity), 0);
    }

    #[test]
    fn fast_release_clamps_at_boundaries() {
        let points = points();
        let fast = FLING_VELOCITY_THRESHOLD * 4.;

        assert_eq!(points.resolve_release(900., fast), 2);
        assert_eq!(points.resolve_release(250., -fast), 0);
    }

    #[test]
    fn resize_rescales_heights() {
        let mut points = points();
        points.resize(2000.).unwrap();
        assert_eq!(points.heights(), &[500., 1000., 1800.]);

        assert_eq!(
            points.resize(f32::INFINITY),
            Err(SnapPointsError::InvalidHeight(f32::INFINITY))
        );
        assert_eq!(points.heights(), &[500., 1000., 1800.]);
    }

    #[test]
    fn single_point_always_wins() {
        let points = SnapPoints::from_fractions(&[0.6], 500.).unwrap();
        assert_eq!(points.resolve_release(10., 5000.), 0);
        assert_eq!(points.resolve_release(10., -5000.), 0);
        assert_eq!(points.clamp(1000.), 300.);
    }
}

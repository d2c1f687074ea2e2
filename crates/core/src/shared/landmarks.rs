//! Named landmark groups and the derived facial geometry accessors.
//!
//! Every derived accessor returns `None` when its backing group is empty;
//! missing landmarks degrade to "unavailable", never to a panic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::point::{bounding_extent, centroid, Point};

/// Closed set of named point groups the detector can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LandmarkGroup {
    LeftEye,
    RightEye,
    Nose,
    Mouth,
    FaceContour,
    LeftEyebrow,
    RightEyebrow,
}

impl LandmarkGroup {
    pub const ALL: [LandmarkGroup; 7] = [
        LandmarkGroup::LeftEye,
        LandmarkGroup::RightEye,
        LandmarkGroup::Nose,
        LandmarkGroup::Mouth,
        LandmarkGroup::FaceContour,
        LandmarkGroup::LeftEyebrow,
        LandmarkGroup::RightEyebrow,
    ];
}

/// Named point groups for one detected face.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    groups: BTreeMap<LandmarkGroup, Vec<Point>>,
}

impl LandmarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a group's points. Empty lists are treated the same as an
    /// absent group by every accessor.
    pub fn set_group(&mut self, group: LandmarkGroup, points: Vec<Point>) {
        self.groups.insert(group, points);
    }

    pub fn with_group(mut self, group: LandmarkGroup, points: Vec<Point>) -> Self {
        self.set_group(group, points);
        self
    }

    pub fn group(&self, group: LandmarkGroup) -> &[Point] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Groups that contain at least one point.
    pub fn populated_groups(&self) -> impl Iterator<Item = LandmarkGroup> + '_ {
        self.groups
            .iter()
            .filter(|(_, pts)| !pts.is_empty())
            .map(|(g, _)| *g)
    }

    pub fn populated_group_count(&self) -> usize {
        self.populated_groups().count()
    }

    /// Total points across all groups.
    pub fn point_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn left_eye_center(&self) -> Option<Point> {
        centroid(self.group(LandmarkGroup::LeftEye))
    }

    pub fn right_eye_center(&self) -> Option<Point> {
        centroid(self.group(LandmarkGroup::RightEye))
    }

    pub fn interocular_distance(&self) -> Option<f64> {
        let left = self.left_eye_center()?;
        let right = self.right_eye_center()?;
        Some(left.distance_to(&right))
    }

    pub fn facial_width(&self) -> Option<f64> {
        bounding_extent(self.group(LandmarkGroup::FaceContour)).map(|(w, _)| w)
    }

    pub fn facial_height(&self) -> Option<f64> {
        bounding_extent(self.group(LandmarkGroup::FaceContour)).map(|(_, h)| h)
    }

    /// Lowest nose point in image space (largest y).
    pub fn nose_tip(&self) -> Option<Point> {
        self.group(LandmarkGroup::Nose)
            .iter()
            .copied()
            .max_by(|a, b| a.y.total_cmp(&b.y))
    }

    pub fn mouth_center(&self) -> Option<Point> {
        centroid(self.group(LandmarkGroup::Mouth))
    }

    pub fn mouth_width(&self) -> Option<f64> {
        bounding_extent(self.group(LandmarkGroup::Mouth)).map(|(w, _)| w)
    }
}

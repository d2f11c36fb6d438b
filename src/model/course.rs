use serde::Serialize;

use super::types::{HOLE_COUNT, HoleNumber};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleDefinition {
    pub hole: u8,
    pub par: u8,
    /// Distance from tee to pin, shown in meters.
    pub yardage: u16,
}

pub const COURSE: [HoleDefinition; HOLE_COUNT] = [
    HoleDefinition {
        hole: 1,
        par: 3,
        yardage: 120,
    },
    HoleDefinition {
        hole: 2,
        par: 3,
        yardage: 95,
    },
    HoleDefinition {
        hole: 3,
        par: 3,
        yardage: 132,
    },
    HoleDefinition {
        hole: 4,
        par: 3,
        yardage: 108,
    },
    HoleDefinition {
        hole: 5,
        par: 3,
        yardage: 145,
    },
    HoleDefinition {
        hole: 6,
        par: 3,
        yardage: 87,
    },
    HoleDefinition {
        hole: 7,
        par: 3,
        yardage: 156,
    },
    HoleDefinition {
        hole: 8,
        par: 3,
        yardage: 101,
    },
    HoleDefinition {
        hole: 9,
        par: 3,
        yardage: 128,
    },
];

/// Static conditions shown in the header and hole info panels.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct CourseInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub pace: &'static str,
    pub group: &'static str,
    pub gps_accuracy: &'static str,
    pub pin_short: &'static str,
    pub pin_position: &'static str,
    pub wind: &'static str,
}

pub const COURSE_INFO: CourseInfo = CourseInfo {
    name: "Swiss-Card Golf Cloud",
    description: "9-Hole Par-3 Course",
    pace: "12:30",
    group: "G-1027",
    gps_accuracy: "±3m",
    pin_short: "Front-L",
    pin_position: "Front-Left",
    wind: "Light NE",
};

#[must_use]
pub fn hole_definition(hole: HoleNumber) -> &'static HoleDefinition {
    &COURSE[hole.index()]
}

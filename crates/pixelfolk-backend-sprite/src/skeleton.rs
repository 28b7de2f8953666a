//! Skeleton builder: turns body parameters into named body-part shapes by
//! forward kinematics.
//!
//! Every limb segment hangs from the computed endpoint of its parent. Left-side
//! parts sit at smaller x and use the negated angle of their right-side twin,
//! so limbs splay outward on both sides.

use std::collections::BTreeMap;

use pixelfolk_spec::BodyParams;

use crate::geometry::{create_joint, create_trapezoid, Point, Shape, Trapezoid};
use crate::grid::CellRect;

/// Stable identifiers for every body part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BodyPart {
    Torso,
    Neck,
    Head,
    LeftUpperArm,
    LeftForearm,
    LeftHand,
    RightUpperArm,
    RightForearm,
    RightHand,
    LeftThigh,
    LeftShin,
    LeftFoot,
    RightThigh,
    RightShin,
    RightFoot,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftKnee,
    RightKnee,
}

impl BodyPart {
    pub const ALL: [BodyPart; 21] = [
        BodyPart::Torso,
        BodyPart::Neck,
        BodyPart::Head,
        BodyPart::LeftUpperArm,
        BodyPart::LeftForearm,
        BodyPart::LeftHand,
        BodyPart::RightUpperArm,
        BodyPart::RightForearm,
        BodyPart::RightHand,
        BodyPart::LeftThigh,
        BodyPart::LeftShin,
        BodyPart::LeftFoot,
        BodyPart::RightThigh,
        BodyPart::RightShin,
        BodyPart::RightFoot,
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Torso => "torso",
            BodyPart::Neck => "neck",
            BodyPart::Head => "head",
            BodyPart::LeftUpperArm => "left_upper_arm",
            BodyPart::LeftForearm => "left_forearm",
            BodyPart::LeftHand => "left_hand",
            BodyPart::RightUpperArm => "right_upper_arm",
            BodyPart::RightForearm => "right_forearm",
            BodyPart::RightHand => "right_hand",
            BodyPart::LeftThigh => "left_thigh",
            BodyPart::LeftShin => "left_shin",
            BodyPart::LeftFoot => "left_foot",
            BodyPart::RightThigh => "right_thigh",
            BodyPart::RightShin => "right_shin",
            BodyPart::RightFoot => "right_foot",
            BodyPart::LeftShoulder => "left_shoulder",
            BodyPart::RightShoulder => "right_shoulder",
            BodyPart::LeftElbow => "left_elbow",
            BodyPart::RightElbow => "right_elbow",
            BodyPart::LeftKnee => "left_knee",
            BodyPart::RightKnee => "right_knee",
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Named mapping of body part to shape, in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    parts: BTreeMap<BodyPart, Shape>,
}

impl Skeleton {
    pub fn get(&self, part: BodyPart) -> Option<&Shape> {
        self.parts.get(&part)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyPart, &Shape)> {
        self.parts.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Cell rectangle covering a part's bounds, clipped to the canvas.
    pub fn cell_bounds(&self, part: BodyPart, canvas_size: u32) -> Option<CellRect> {
        let (min, max) = self.get(part)?.bounds();
        let n = canvas_size as f64;
        let x0 = min.x.floor().clamp(0.0, n);
        let y0 = min.y.floor().clamp(0.0, n);
        let x1 = (max.x.ceil() + 1.0).clamp(0.0, n);
        let y1 = (max.y.ceil() + 1.0).clamp(0.0, n);
        Some(CellRect {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}

/// Build every body part from resolved proportions.
///
/// Percentage parameters are scaled by `canvas_size / 100` before any geometry
/// is built; angles are used as-is. Shins ignore `shin_length` and stretch
/// straight down from the knee to `ground_y`, so feet always touch the ground.
pub fn build_skeleton(body: &BodyParams, canvas_size: u32) -> Skeleton {
    let scale = canvas_size as f64 / 100.0;
    let s = |v: f64| v * scale;

    let mut parts = BTreeMap::new();

    let center_x = s(body.center_x);
    let torso_top = s(body.torso_y);
    let ground_y = s(body.ground_y);

    let torso = create_trapezoid(
        Point::new(center_x, torso_top),
        s(body.torso_top_width),
        s(body.torso_bottom_width),
        s(body.torso_height),
        0.0,
    );
    let torso_bottom = torso.bottom_center.y;

    let neck = create_trapezoid(
        Point::new(center_x, torso_top),
        s(body.neck_width),
        s(body.neck_width),
        -s(body.neck_height),
        0.0,
    );
    let head = create_trapezoid(
        neck.bottom_center,
        s(body.head_width),
        s(body.head_width),
        -s(body.head_height),
        0.0,
    );

    parts.insert(BodyPart::Torso, Shape::Trapezoid(torso));
    parts.insert(BodyPart::Neck, Shape::Trapezoid(neck));
    parts.insert(BodyPart::Head, Shape::Trapezoid(head));

    for side in [Side::Left, Side::Right] {
        // Left is -1: left parts take the negated angle of their right
        // counterpart, so both arms and legs splay outward and the left
        // foot points at -90 degrees, the right at +90.
        let sign = side.sign();
        let names = SideParts::for_side(side);

        // Arm chain
        let upper_arm = create_trapezoid(
            Point::new(center_x + sign * s(body.torso_top_width) / 2.0, torso_top),
            s(body.upper_arm_top_width),
            s(body.upper_arm_bottom_width),
            s(body.upper_arm_length),
            sign * body.arm_angle,
        );
        let forearm_angle = sign * (body.arm_angle + body.elbow_angle);
        let forearm = create_trapezoid(
            upper_arm.bottom_center,
            s(body.forearm_top_width),
            s(body.forearm_bottom_width),
            s(body.forearm_length),
            forearm_angle,
        );
        let hand_base = s(body.forearm_bottom_width);
        let hand = create_trapezoid(
            forearm.bottom_center,
            hand_base * 1.2,
            hand_base * 0.8,
            hand_base * 1.5,
            forearm_angle,
        );

        // Leg chain
        let thigh = create_trapezoid(
            Point::new(center_x + sign * s(body.torso_bottom_width) / 2.0, torso_bottom),
            s(body.thigh_top_width),
            s(body.thigh_bottom_width),
            s(body.thigh_length),
            sign * body.leg_angle,
        );
        let shin_length = (ground_y - thigh.bottom_center.y).max(0.0);
        let shin = create_trapezoid(
            thigh.bottom_center,
            s(body.shin_top_width),
            s(body.shin_bottom_width),
            shin_length,
            0.0,
        );
        let foot_base = s(body.shin_bottom_width);
        let foot = create_trapezoid(
            shin.bottom_center,
            foot_base * 0.9,
            foot_base * 0.7,
            foot_base * 1.6,
            sign * 90.0,
        );

        let shoulder = create_joint(upper_arm.center, upper_arm.top_width / 2.0);
        let elbow = create_joint(upper_arm.bottom_center, upper_arm.bottom_width / 2.0);
        let knee = create_joint(thigh.bottom_center, thigh.bottom_width / 2.0);

        parts.insert(names.shoulder, Shape::Joint(shoulder));
        parts.insert(names.elbow, Shape::Joint(elbow));
        parts.insert(names.knee, Shape::Joint(knee));
        insert_segments(
            &mut parts,
            [
                (names.upper_arm, upper_arm),
                (names.forearm, forearm),
                (names.hand, hand),
                (names.thigh, thigh),
                (names.shin, shin),
                (names.foot, foot),
            ],
        );
    }

    Skeleton { parts }
}

fn insert_segments(parts: &mut BTreeMap<BodyPart, Shape>, segments: [(BodyPart, Trapezoid); 6]) {
    for (part, shape) in segments {
        parts.insert(part, Shape::Trapezoid(shape));
    }
}

struct SideParts {
    upper_arm: BodyPart,
    forearm: BodyPart,
    hand: BodyPart,
    thigh: BodyPart,
    shin: BodyPart,
    foot: BodyPart,
    shoulder: BodyPart,
    elbow: BodyPart,
    knee: BodyPart,
}

impl SideParts {
    fn for_side(side: Side) -> Self {
        match side {
            Side::Left => Self {
                upper_arm: BodyPart::LeftUpperArm,
                forearm: BodyPart::LeftForearm,
                hand: BodyPart::LeftHand,
                thigh: BodyPart::LeftThigh,
                shin: BodyPart::LeftShin,
                foot: BodyPart::LeftFoot,
                shoulder: BodyPart::LeftShoulder,
                elbow: BodyPart::LeftElbow,
                knee: BodyPart::LeftKnee,
            },
            Side::Right => Self {
                upper_arm: BodyPart::RightUpperArm,
                forearm: BodyPart::RightForearm,
                hand: BodyPart::RightHand,
                thigh: BodyPart::RightThigh,
                shin: BodyPart::RightShin,
                foot: BodyPart::RightFoot,
                shoulder: BodyPart::RightShoulder,
                elbow: BodyPart::RightElbow,
                knee: BodyPart::RightKnee,
            },
        }
    }
}

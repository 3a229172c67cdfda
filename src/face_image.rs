use std::fmt;

use egui::{Color32, Painter, Pos2, Rect, Rounding, Stroke};

use crate::die::{DieError, Face};

/// Drawable resource for one die face, named `dice_1` to `dice_6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceImage {
    Dice1,
    Dice2,
    Dice3,
    Dice4,
    Dice5,
    Dice6,
}

const LOW: f32 = 0.25;
const MID: f32 = 0.5;
const HIGH: f32 = 0.75;

const PIP_RADIUS: f32 = 0.09;
const CORNER_RADIUS: f32 = 0.14;

#[derive(Debug, Clone, Copy)]
pub struct FaceStyle {
    pub body: Color32,
    pub outline: Stroke,
    pub pip: Color32,
}

impl FaceImage {
    pub const ALL: [FaceImage; 6] = [
        FaceImage::Dice1,
        FaceImage::Dice2,
        FaceImage::Dice3,
        FaceImage::Dice4,
        FaceImage::Dice5,
        FaceImage::Dice6,
    ];

    pub fn for_value(value: u8) -> Result<Self, DieError> {
        Face::new(value).map(Face::image)
    }

    pub fn id(self) -> &'static str {
        match self {
            FaceImage::Dice1 => "dice_1",
            FaceImage::Dice2 => "dice_2",
            FaceImage::Dice3 => "dice_3",
            FaceImage::Dice4 => "dice_4",
            FaceImage::Dice5 => "dice_5",
            FaceImage::Dice6 => "dice_6",
        }
    }

    /// Pip centres in unit coordinates, origin top left.
    pub fn pips(self) -> &'static [(f32, f32)] {
        match self {
            FaceImage::Dice1 => &[(MID, MID)],
            FaceImage::Dice2 => &[(LOW, LOW), (HIGH, HIGH)],
            FaceImage::Dice3 => &[(LOW, LOW), (MID, MID), (HIGH, HIGH)],
            FaceImage::Dice4 => &[(LOW, LOW), (HIGH, LOW), (LOW, HIGH), (HIGH, HIGH)],
            FaceImage::Dice5 => &[
                (LOW, LOW),
                (HIGH, LOW),
                (MID, MID),
                (LOW, HIGH),
                (HIGH, HIGH),
            ],
            FaceImage::Dice6 => &[
                (LOW, LOW),
                (HIGH, LOW),
                (LOW, MID),
                (HIGH, MID),
                (LOW, HIGH),
                (HIGH, HIGH),
            ],
        }
    }

    pub fn paint(self, painter: &Painter, rect: Rect, style: &FaceStyle) {
        let side = rect.width().min(rect.height());
        let square = Rect::from_center_size(rect.center(), egui::vec2(side, side));
        let rounding = Rounding::same(side * CORNER_RADIUS);

        painter.rect(square, rounding, style.body, style.outline);

        for &(x, y) in self.pips() {
            let centre = Pos2::new(
                square.min.x + x * square.width(),
                square.min.y + y * square.height(),
            );
            painter.circle_filled(centre, side * PIP_RADIUS, style.pip);
        }
    }
}

impl fmt::Display for FaceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

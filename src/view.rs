use egui::{Sense, Ui};

use crate::die::{DieState, Face};
use crate::face_image::FaceImage;
use crate::random::FaceSource;
use crate::strings::Strings;
use crate::theme::Theme;

const FACE_SIZE: f32 = 160.0;
const SPACING: f32 = 16.0;

/// A die image with a button underneath that re-rolls it.
pub struct DieView {
    state: DieState,
    source: Box<dyn FaceSource>,
}

impl DieView {
    pub fn initialize(mut source: Box<dyn FaceSource>) -> Self {
        let state = DieState::init(&mut source);
        tracing::debug!(face = %state.face(), "initial face");
        Self { state, source }
    }

    pub fn on_activate(&mut self) -> Face {
        let face = self.state.reroll(&mut self.source);
        tracing::debug!(%face, "rolled");
        face
    }

    pub fn face(&self) -> Face {
        self.state.face()
    }

    pub fn image(&self) -> FaceImage {
        self.face().image()
    }

    /// Lays out image and button centred in the available space. Returns the button response.
    pub fn show(&mut self, ui: &mut Ui, strings: &Strings) -> egui::Response {
        let button_height =
            ui.text_style_height(&egui::TextStyle::Button) + 2.0 * ui.spacing().button_padding.y;
        let content_height = FACE_SIZE + SPACING + button_height;
        ui.add_space(((ui.available_height() - content_height) / 2.0).max(0.0));

        ui.vertical_centered(|ui| {
            let face = self.face();
            let (rect, image) = ui.allocate_exact_size(egui::vec2(FACE_SIZE, FACE_SIZE), Sense::hover());
            if ui.is_rect_visible(rect) {
                let style = Theme::face_style(ui.visuals().dark_mode);
                face.image().paint(ui.painter(), rect, &style);
            }
            image.widget_info(|| face_widget_info(face));
            image.on_hover_text(face.to_string());

            ui.add_space(SPACING);

            let button = ui.button(strings.roll());
            if button.clicked() {
                self.on_activate();
            }
            button
        })
        .inner
    }
}

/// Accessibility description of the die image: the bare face number.
fn face_widget_info(face: Face) -> egui::WidgetInfo {
    egui::WidgetInfo::labeled(egui::WidgetType::Image, face.to_string())
}

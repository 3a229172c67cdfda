use crate::config::Config;
use crate::random::{FaceSource, SeededSource, ThreadRngSource};
use crate::strings::Strings;
use crate::theme::Theme;
use crate::view::DieView;

pub struct App {
    strings: Strings,
    theme: Theme,
    die: DieView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let mut app = Self::from_config(config);
        app.theme.apply(&cc.egui_ctx);
        app
    }

    pub fn from_config(config: &Config) -> Self {
        let source: Box<dyn FaceSource> = match config.seed {
            Some(seed) => Box::new(SeededSource::new(seed)),
            None => Box::new(ThreadRngSource),
        };
        Self {
            strings: Strings::for_locale(config.locale()),
            theme: Theme::new(config.theme),
            die: DieView::initialize(source),
        }
    }

    pub fn die(&self) -> &DieView {
        &self.die
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.die.show(ui, &self.strings);
        });
    }
}

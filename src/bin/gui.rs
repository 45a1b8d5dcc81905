#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path, path::PathBuf};
use tracing::{error, info, warn};
use unit_conversion_toolbox::{
    app,
    catalog::Catalog,
    config, logging,
    conversion::ConversionEngine,
    quantity::QuantityKind,
    table_file::UnitTableFile,
    widgets::{PairWidget, TableWidget},
};

fn main() -> Result<(), eframe::Error> {
    let config_path = Path::new(config::DEFAULT_CONFIG_PATH);
    let (app_cfg, config_status, config_locked) = match config::load_or_create(config_path) {
        Ok((cfg, created)) => {
            logging::init(&cfg.log_level);
            if created {
                info!(path = %config_path.display(), "기본 설정 파일 생성");
            }
            (cfg, None, false)
        }
        Err(e) => {
            let cfg = config::Config::default();
            logging::init(&cfg.log_level);
            warn!(path = %config_path.display(), error = %e, "설정 파일을 읽을 수 없어 기본 설정으로 시작, 저장하지 않음");
            (cfg, Some(format!("Settings error: {e}")), true)
        }
    };

    let (catalog, status) = match app::bootstrap(&app_cfg, None) {
        Ok(catalog) => (catalog, config_status),
        Err(e) => {
            warn!(error = %e, "사용자 단위표를 쓸 수 없어 내장 단위표로 시작");
            match Catalog::builtin() {
                Ok(catalog) => (catalog, Some(format!("Unit table error: {e}"))),
                Err(e) => {
                    error!(error = %e, "내장 단위표 검증 실패");
                    eprintln!("오류: {e}");
                    return Ok(());
                }
            }
        }
    };

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([760.0, 520.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let cfg = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Unit Conversion Toolbox",
        cfg,
        Box::new(move |_cc| {
            let mut gui = GuiApp::new(app_cfg, catalog);
            gui.status = status;
            gui.config_locked = config_locked;
            Box::new(gui)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

struct GuiApp {
    config: config::Config,
    catalog: Catalog,
    tab: QuantityKind,
    show_short: bool,
    // 길이/시간/속도 변환기
    pairs: Vec<PairWidget>,
    // 온도 눈금 표
    temperature: TableWidget,
    status: Option<String>,
    // 디스크의 설정 파일을 읽지 못했으면 덮어쓰지 않는다
    config_locked: bool,
}

impl GuiApp {
    fn new(config: config::Config, catalog: Catalog) -> Self {
        let pairs = build_pairs(&catalog, &config);
        let temperature = TableWidget::new(
            catalog.engine(QuantityKind::Temperature),
            config.display.precision,
        );
        Self {
            tab: config.default_quantity,
            show_short: config.display.show_symbols,
            config,
            catalog,
            pairs,
            temperature,
            status: None,
            config_locked: false,
        }
    }

    /// 설정을 저장한다. 읽지 못한 설정 파일은 그대로 둔다.
    fn save_config(&self) -> Result<(), String> {
        if self.config_locked {
            return Err(format!(
                "{} could not be read, leaving it untouched",
                config::DEFAULT_CONFIG_PATH
            ));
        }
        self.config.save().map_err(|e| e.to_string())
    }

    /// 파일에서 단위표를 읽어 카탈로그와 위젯을 다시 만든다.
    fn reload_table(&mut self, path: PathBuf) {
        let loaded = UnitTableFile::load(&path)
            .map_err(|e| e.to_string())
            .and_then(|table| Catalog::with_table(&table).map_err(|e| e.to_string()));
        match loaded {
            Ok(catalog) => {
                self.catalog = catalog;
                self.pairs = build_pairs(&self.catalog, &self.config);
                self.temperature = TableWidget::new(
                    self.catalog.engine(QuantityKind::Temperature),
                    self.config.display.precision,
                );
                self.config.unit_table = Some(path.clone());
                self.status = match self.save_config() {
                    Ok(()) => Some(format!("Loaded {}", path.display())),
                    Err(e) => Some(format!("Loaded, but settings not saved: {e}")),
                };
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "단위표 로드 실패");
                self.status = Some(format!("Unit table error: {e}"));
            }
        }
    }

    fn ui_pair(&mut self, ui: &mut egui::Ui, kind: QuantityKind) {
        let engine = self.catalog.engine(kind);
        let Some(widget) = self.pairs.iter_mut().find(|w| w.quantity == kind) else {
            return;
        };
        let mut changed = false;
        egui::Grid::new("pair_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Value");
                changed |= ui.text_edit_singleline(&mut widget.value_text).changed();
                ui.end_row();

                ui.label("From");
                changed |= unit_combo(ui, "pair_from", engine, &mut widget.from);
                ui.end_row();

                ui.label("To");
                changed |= unit_combo(ui, "pair_to", engine, &mut widget.to);
                ui.end_row();
            });
        ui.add_space(6.0);
        if ui.button("⇄ Swap").clicked() {
            widget.swap();
            changed = true;
        }
        if changed {
            widget.refresh(engine);
        }
        ui.add_space(10.0);
        ui.heading(widget.output_text(self.show_short));
        if let Some(caption) = widget.caption() {
            ui.weak(caption);
        }
    }

    fn ui_temperature(&mut self, ui: &mut egui::Ui) {
        let engine = self.catalog.engine(QuantityKind::Temperature);
        let mut edited: Option<(String, String)> = None;
        egui::Grid::new("temperature_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for cell in self.temperature.cells() {
                    ui.label(cell.label.as_str());
                    let mut text = cell.text.clone();
                    if ui.text_edit_singleline(&mut text).changed() {
                        edited = Some((cell.id.clone(), text));
                    }
                    ui.end_row();
                }
            });
        if let Some((id, text)) = edited {
            if let Err(e) = self.temperature.edit(engine, &id, &text) {
                self.status = Some(e.to_string());
            }
        }
    }
}

fn build_pairs(catalog: &Catalog, cfg: &config::Config) -> Vec<PairWidget> {
    QuantityKind::ALL
        .into_iter()
        .filter(|k| *k != QuantityKind::Temperature)
        .map(|k| PairWidget::from_config(catalog, cfg, k))
        .collect()
}

/// 분류 제목이 붙은 단위 선택 콤보박스. 선택이 바뀌면 true.
fn unit_combo(ui: &mut egui::Ui, id: &str, engine: &ConversionEngine, selected: &mut String) -> bool {
    let before = selected.clone();
    let current = engine
        .unit(selected)
        .map(|m| m.label())
        .unwrap_or_else(|| selected.clone());
    egui::ComboBox::from_id_source(id)
        .selected_text(current)
        .width(320.0)
        .show_ui(ui, |ui| {
            for (group, metas) in engine.groups() {
                if let Some(group) = group {
                    ui.label(egui::RichText::new(group).strong());
                }
                for meta in metas {
                    ui.selectable_value(selected, meta.id.clone(), meta.label());
                }
                ui.separator();
            }
        });
    *selected != before
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Unit Conversion Toolbox");
                ui.separator();
                for kind in QuantityKind::ALL {
                    ui.selectable_value(&mut self.tab, kind, kind.label());
                }
                ui.separator();
                if ui.checkbox(&mut self.show_short, "Shorthand").changed() {
                    self.config.display.show_symbols = self.show_short;
                    if let Err(e) = self.save_config() {
                        self.status = Some(format!("Settings not saved: {e}"));
                    }
                }
                if ui.button("Load unit table…").clicked() {
                    if let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() {
                        self.reload_table(path);
                    }
                }
            });
        });

        if let Some(msg) = self.status.clone() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(msg);
                    if ui.small_button("✕").clicked() {
                        self.status = None;
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let tab = self.tab;
            ui.heading(tab.label());
            ui.separator();
            match tab {
                QuantityKind::Temperature => self.ui_temperature(ui),
                kind => self.ui_pair(ui, kind),
            }
        });
    }
}

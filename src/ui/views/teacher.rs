use crate::EduApp;
use crate::app::student::history_newest_first;
use crate::app::teacher::simulated_progress;
use crate::app::{AddStudentDialog, MaterialMode, TeacherTab};
use crate::model::MaterialStatus;
use crate::roster::{
    ScoreBand, activity_breakdown, format_date, needs_help, overview, score_distribution,
};
use crate::ui::helpers::{activity_color, avatar, badge, band_color, labeled_bar, stat_card};
use crate::ui::layout::{scroll_panel, two_button_row};
use crate::view_models::{HistoryRow, MaterialRow, StudentRow};
use egui::{Button, ComboBox, Context, ProgressBar, RichText, TextEdit, Ui};

/// Panel del profesor: pestañas y diálogos flotantes.
pub fn ui_teacher(app: &mut EduApp, ctx: &Context) {
    scroll_panel(ctx, 1000.0, |ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.heading("📋 Panel del profesor");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⟳ Recargar").clicked() {
                    app.reload_students();
                    app.reload_materials();
                }
            });
        });
        ui.horizontal(|ui| {
            for tab in TeacherTab::ALL {
                if ui.selectable_label(app.teacher.tab == tab, tab.label()).clicked() {
                    app.teacher.tab = tab;
                }
            }
        });
        ui.separator();
        ui.add_space(8.0);

        match app.teacher.tab {
            TeacherTab::Overview => ui_overview(app, ui),
            TeacherTab::Students => ui_students(app, ui),
            TeacherTab::Analytics => ui_analytics(app, ui),
            TeacherTab::Materials => ui_materials(app, ui),
        }
    });

    ui_student_detail(app, ctx);
    ui_message_dialog(app, ctx);
    ui_add_student_dialog(app, ctx);
    ui_material_dialog(app, ctx);
    ui_confirm_delete(app, ctx);
}

/// Botones de contacto que comparten el resumen y el listado.
fn contact_buttons(app: &mut EduApp, ui: &mut Ui, row: &StudentRow) {
    if ui.button("💬 Chat").clicked() {
        app.open_chat(row.id, &row.name);
    }
    if ui.button("✉ Mensaje").clicked() {
        app.open_message_dialog(row.id, &row.name);
    }
}

fn ui_overview(app: &mut EduApp, ui: &mut Ui) {
    let summary = overview(&app.teacher.students);
    let card_w = (ui.available_width() - 36.0) / 4.0;
    ui.horizontal(|ui| {
        stat_card(ui, card_w, "Estudiantes", &summary.students.to_string());
        stat_card(ui, card_w, "Tests realizados", &summary.total_tests.to_string());
        stat_card(ui, card_w, "Nota media", &format!("{}%", summary.average_score));
        stat_card(ui, card_w, "Necesitan ayuda", &summary.needs_help.to_string());
    });

    ui.add_space(16.0);
    ui.strong("⚠ Estudiantes que necesitan ayuda");
    let rows: Vec<StudentRow> = needs_help(&app.teacher.students)
        .into_iter()
        .map(StudentRow::from)
        .collect();
    if rows.is_empty() {
        ui.label(RichText::new("Todos tus estudiantes van bien 🎉").weak());
        return;
    }
    for row in rows {
        ui.horizontal(|ui| {
            avatar(ui, &row.initials);
            ui.vertical(|ui| {
                ui.label(&row.name);
                ui.label(RichText::new(row.summary()).small().weak());
            });
            badge(ui, &format!("{}%", row.average), band_color(row.band));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                contact_buttons(app, ui, &row);
            });
        });
        ui.add_space(4.0);
    }
}

fn ui_students(app: &mut EduApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.add(
            TextEdit::singleline(&mut app.teacher.search)
                .hint_text("🔍 Buscar por nombre o email")
                .desired_width(320.0),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Añadir estudiante").clicked() {
                app.teacher.add_dialog = Some(AddStudentDialog::default());
            }
        });
    });
    ui.add_space(8.0);

    if app.teacher.students_loading && app.teacher.students.is_empty() {
        ui.spinner();
        return;
    }
    let rows: Vec<StudentRow> = app
        .filtered_students()
        .into_iter()
        .map(StudentRow::from)
        .collect();
    if rows.is_empty() {
        ui.label(RichText::new("No hay estudiantes que mostrar").weak());
        return;
    }

    for row in rows {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar(ui, &row.initials);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(&row.name);
                        badge(ui, row.band.badge(), band_color(row.band));
                    });
                    ui.label(RichText::new(&row.email).small().weak());
                    let line = format!("{} · {}", row.summary(), row.activity_label());
                    ui.label(RichText::new(line).small());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    contact_buttons(app, ui, &row);
                    if ui.button("👁 Ver ficha").clicked() {
                        app.open_student_detail(row.id);
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
}

fn ui_analytics(app: &EduApp, ui: &mut Ui) {
    let students = &app.teacher.students;
    ui.strong("📊 Distribución de notas");
    ui.add_space(4.0);
    for bucket in score_distribution(students) {
        labeled_bar(
            ui,
            bucket.band.range_label(),
            bucket.share,
            &bucket.count.to_string(),
            band_color(bucket.band),
        );
    }

    ui.add_space(16.0);
    ui.strong("🕒 Actividad");
    ui.add_space(4.0);
    let now = chrono::Local::now().naive_local();
    let total = students.len().max(1) as f32;
    for (bucket, count) in activity_breakdown(students, now) {
        labeled_bar(
            ui,
            bucket.label(),
            count as f32 / total,
            &count.to_string(),
            activity_color(bucket),
        );
    }
}

fn ui_materials(app: &mut EduApp, ui: &mut Ui) {
    ui.horizontal(|ui| {
        ui.strong(format!("📚 Mis materiales ({})", app.teacher.materials.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("➕ Nuevo material").clicked() {
                app.open_new_material();
            }
        });
    });
    ui.add_space(8.0);

    if app.teacher.materials.is_empty() {
        ui.label(RichText::new("Aún no has publicado materiales").weak());
        return;
    }
    let rows: Vec<MaterialRow> = app.teacher.materials.iter().map(MaterialRow::from).collect();
    let link = ui.visuals().hyperlink_color;
    for row in rows {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(row.icon).size(22.0));
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.strong(&row.title);
                        badge(ui, &row.category, link);
                    });
                    if let Some(description) = &row.description {
                        ui.label(description);
                    }
                    ui.label(RichText::new(row.meta_label()).small().weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("🗑 Eliminar").clicked() {
                        app.ask_delete_material(row.id, &row.title);
                    }
                    if ui.button("✏ Editar").clicked() {
                        app.open_edit_material(row.id);
                    }
                });
            });
        });
        ui.add_space(4.0);
    }
}

fn ui_student_detail(app: &mut EduApp, ctx: &Context) {
    let Some(detail) = app.teacher.detail.clone() else {
        return;
    };
    let loading = app.teacher.detail_loading;
    let mut open = true;
    let mut status_change: Option<(i64, MaterialStatus)> = None;

    egui::Window::new(format!("👤 {}", detail.full_name))
        .collapsible(false)
        .resizable(true)
        .default_width(480.0)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(RichText::new(&detail.email).weak());
            if let Some(created) = &detail.created_at {
                let since = format!("Registrado el {}", format_date(created));
                ui.label(RichText::new(since).small().weak());
            }
            ui.label(format!(
                "{} tests · media {:.0}%",
                detail.tests_completed, detail.average_score
            ));
            if loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Cargando ficha...");
                });
            }

            ui.add_space(8.0);
            ui.strong("Materiales asignados");
            if detail.materials.is_empty() {
                ui.label(RichText::new("Sin materiales asignados").weak());
            }
            for material in &detail.materials {
                ui.horizontal(|ui| {
                    ui.label(&material.title);
                    ComboBox::from_id_salt(("material_status", detail.id, material.material_id))
                        .selected_text(material.status.label())
                        .show_ui(ui, |ui| {
                            for status in MaterialStatus::ALL {
                                if ui
                                    .selectable_label(material.status == status, status.label())
                                    .clicked()
                                    && status != material.status
                                {
                                    status_change = Some((material.material_id, status));
                                }
                            }
                        });
                });
            }

            if !detail.completed_topics.is_empty() {
                ui.add_space(8.0);
                ui.strong("Temas completados");
                ui.horizontal_wrapped(|ui| {
                    for topic in &detail.completed_topics {
                        badge(ui, topic, band_color(ScoreBand::Excellent));
                    }
                });
            }

            ui.add_space(8.0);
            ui.strong("Resultados de tests");
            if detail.test_results.is_empty() {
                ui.label(RichText::new("Todavía no ha hecho tests").weak());
                return;
            }
            egui::Grid::new(("detail_results", detail.id))
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for result in history_newest_first(&detail.test_results) {
                        let row = HistoryRow::from(result);
                        ui.label(&row.topic);
                        badge(ui, &format!("{}%", row.score), band_color(row.band));
                        ui.label(&row.answers);
                        ui.label(&row.date);
                        ui.end_row();
                    }
                });
        });

    if let Some((material_id, status)) = status_change {
        app.change_material_status(detail.id, material_id, status);
    }
    if !open {
        app.close_student_detail();
    }
}

fn ui_message_dialog(app: &mut EduApp, ctx: &Context) {
    let Some(name) = app.teacher.message_dialog.as_ref().map(|d| d.student_name.clone()) else {
        return;
    };
    let mut send = false;
    let mut cancel = false;
    egui::Window::new(format!("✉ Mensaje para {name}"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(dialog) = app.teacher.message_dialog.as_mut() else {
                return;
            };
            ui.add(
                TextEdit::multiline(&mut dialog.text)
                    .hint_text("Escribe tu mensaje")
                    .desired_rows(4)
                    .desired_width(360.0),
            );
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let ready = !dialog.sending && !dialog.text.trim().is_empty();
                let label = if dialog.sending { "Enviando..." } else { "Enviar" };
                send = ui.add_enabled(ready, Button::new(label)).clicked();
                cancel = ui.button("Cancelar").clicked();
            });
        });
    if send {
        app.send_teacher_message();
    } else if cancel {
        app.teacher.message_dialog = None;
    }
}

fn ui_add_student_dialog(app: &mut EduApp, ctx: &Context) {
    if app.teacher.add_dialog.is_none() {
        return;
    }
    let mut submit = false;
    let mut cancel = false;
    egui::Window::new("➕ Añadir estudiante")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(dialog) = app.teacher.add_dialog.as_mut() else {
                return;
            };
            ui.label("Email del estudiante");
            let response = ui.add(
                TextEdit::singleline(&mut dialog.email)
                    .hint_text("estudiante@email.com")
                    .desired_width(300.0),
            );
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let label = if dialog.sending { "Añadiendo..." } else { "Añadir" };
                submit = ui.add_enabled(!dialog.sending, Button::new(label)).clicked() || enter;
                cancel = ui.button("Cancelar").clicked();
            });
        });
    if submit {
        app.submit_add_student();
    } else if cancel {
        app.teacher.add_dialog = None;
    }
}

fn ui_material_dialog(app: &mut EduApp, ctx: &Context) {
    let Some(editing) = app.teacher.material_dialog.as_ref().map(|d| d.editing.is_some()) else {
        return;
    };
    let now = ctx.input(|i| i.time);
    let title = if editing { "✏ Editar material" } else { "📚 Nuevo material" };
    let mut save = false;
    let mut cancel = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(dialog) = app.teacher.material_dialog.as_mut() else {
                return;
            };
            let width = 380.0;

            if !editing {
                ui.horizontal(|ui| {
                    ui.radio_value(&mut dialog.mode, MaterialMode::Text, "📝 Texto");
                    ui.radio_value(&mut dialog.mode, MaterialMode::File, "📎 Archivo");
                });
                ui.add_space(6.0);
            }

            ui.label("Título");
            ui.add(TextEdit::singleline(&mut dialog.title).desired_width(width));
            ui.label("Descripción");
            ui.add(
                TextEdit::multiline(&mut dialog.description)
                    .desired_rows(2)
                    .desired_width(width),
            );
            ui.label("Categoría");
            ui.add(TextEdit::singleline(&mut dialog.category).desired_width(width));

            if !editing {
                match dialog.mode {
                    MaterialMode::Text => {
                        ui.label("Contenido");
                        ui.add(
                            TextEdit::multiline(&mut dialog.content)
                                .desired_rows(6)
                                .desired_width(width),
                        );
                    }
                    MaterialMode::File => {
                        ui.label("Ruta del archivo");
                        ui.add(
                            TextEdit::singleline(&mut dialog.file_path)
                                .hint_text("/ruta/al/archivo.pdf")
                                .desired_width(width),
                        );
                        if cfg!(target_arch = "wasm32") {
                            let note = "La subida solo funciona en la versión de escritorio";
                            ui.label(RichText::new(note).small().weak());
                        }
                    }
                }
            }

            if let Some(started) = dialog.upload_started {
                ui.add_space(6.0);
                ui.add(
                    ProgressBar::new(simulated_progress(now - started))
                        .show_percentage()
                        .desired_width(width),
                );
            }

            ui.add_space(10.0);
            let saving = dialog.saving;
            ui.add_enabled_ui(!saving, |ui| {
                let label = if saving { "Guardando..." } else { "Guardar" };
                let (left, right) = two_button_row(ui, width, label, "Cancelar");
                save = left;
                cancel = right;
            });
        });

    if save {
        app.submit_material(now);
    } else if cancel {
        app.teacher.material_dialog = None;
    }
}

fn ui_confirm_delete(app: &mut EduApp, ctx: &Context) {
    let Some((_, title)) = app.teacher.confirm_delete.clone() else {
        return;
    };
    let mut confirm = false;
    let mut cancel = false;
    egui::Window::new("🗑 Eliminar material")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("¿Seguro que quieres eliminar \"{title}\"?"));
            ui.label(RichText::new("Esta acción no se puede deshacer.").small().weak());
            ui.add_space(8.0);
            (confirm, cancel) = two_button_row(ui, 260.0, "Eliminar", "Cancelar");
        });
    if confirm {
        app.confirm_delete_material();
    } else if cancel {
        app.teacher.confirm_delete = None;
    }
}

use super::*;
use crate::api::{Ack, ApiError, TextMaterialDraft};
use crate::model::MaterialStatus;

/// Segundos que tarda la barra simulada en llegar a su tope.
const UPLOAD_RAMP_SECS: f64 = 4.0;
/// La barra no pasa de aquí hasta que responde el servidor.
const UPLOAD_CAP: f32 = 0.9;

/// Progreso ficticio de la subida según el tiempo transcurrido.
pub fn simulated_progress(elapsed_secs: f64) -> f32 {
    let fraction = (elapsed_secs.max(0.0) / UPLOAD_RAMP_SECS) as f32;
    fraction.min(UPLOAD_CAP)
}

/// Tipo MIME a partir de la extensión; el servidor lo guarda tal cual.
pub fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Lee el fichero y lo prepara para el endpoint de subida.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_upload(dialog: &MaterialDialog) -> Result<crate::api::FileUpload, String> {
    use base64::Engine;

    let path = std::path::Path::new(dialog.file_path.trim());
    let bytes = std::fs::read(path)
        .map_err(|err| format!("No se pudo leer {}: {err}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archivo".to_owned());

    Ok(crate::api::FileUpload {
        title: dialog.title.clone(),
        description: dialog.description.clone(),
        file_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
        file_type: mime_from_file_name(&file_name).to_owned(),
        file_name,
        category: dialog.category.clone(),
    })
}

#[cfg(target_arch = "wasm32")]
pub fn read_upload(_dialog: &MaterialDialog) -> Result<crate::api::FileUpload, String> {
    Err("La subida de archivos solo está disponible en la versión de escritorio".to_owned())
}

impl EduApp {
    // ---------- carga ----------

    pub fn reload_students(&mut self) {
        if let Some(token) = self.require_token() {
            self.teacher.students_loading = true;
            self.api.students(&token);
        }
    }

    pub fn reload_materials(&mut self) {
        if let Some(token) = self.require_token() {
            self.api.materials(&token);
        }
    }

    /// Estudiantes filtrados por el buscador (nombre o email).
    pub fn filtered_students(&self) -> Vec<&Student> {
        let needle = self.teacher.search.trim().to_lowercase();
        self.teacher
            .students
            .iter()
            .filter(|s| {
                needle.is_empty()
                    || s.full_name.to_lowercase().contains(&needle)
                    || s.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ---------- acciones sobre estudiantes ----------

    /// Abre la ficha con los datos de la lista y pide el detalle completo.
    pub fn open_student_detail(&mut self, student_id: i64) {
        let Some(token) = self.require_token() else {
            return;
        };
        self.teacher.detail = self
            .teacher
            .students
            .iter()
            .find(|s| s.id == student_id)
            .map(StudentDetail::from);
        self.teacher.detail_loading = true;
        self.api.student_detail(&token, student_id);
    }

    pub fn close_student_detail(&mut self) {
        self.teacher.detail = None;
        self.teacher.detail_loading = false;
    }

    pub fn open_message_dialog(&mut self, student_id: i64, student_name: &str) {
        self.teacher.message_dialog = Some(MessageDialog {
            student_id,
            student_name: student_name.to_owned(),
            ..Default::default()
        });
    }

    pub fn send_teacher_message(&mut self) {
        let Some(dialog) = self.teacher.message_dialog.as_ref() else {
            return;
        };
        if dialog.sending || dialog.text.trim().is_empty() {
            return;
        }
        let (student_id, text) = (dialog.student_id, dialog.text.trim().to_owned());
        let Some(token) = self.require_token() else {
            return;
        };
        if let Some(dialog) = self.teacher.message_dialog.as_mut() {
            dialog.sending = true;
        }
        self.api.send_teacher_message(&token, student_id, &text);
    }

    pub fn submit_add_student(&mut self) {
        let Some(dialog) = self.teacher.add_dialog.as_ref() else {
            return;
        };
        if dialog.sending || dialog.email.trim().is_empty() {
            return;
        }
        let email = dialog.email.trim().to_owned();
        let Some(token) = self.require_token() else {
            return;
        };
        if let Some(dialog) = self.teacher.add_dialog.as_mut() {
            dialog.sending = true;
        }
        self.api.add_student(&token, &email);
    }

    pub fn change_material_status(
        &mut self,
        student_id: i64,
        material_id: i64,
        status: MaterialStatus,
    ) {
        if let Some(token) = self.require_token() {
            self.api
                .update_material_status(&token, student_id, material_id, status);
        }
    }

    // ---------- materiales ----------

    pub fn open_new_material(&mut self) {
        self.teacher.material_dialog = Some(MaterialDialog::default());
    }

    pub fn open_edit_material(&mut self, material_id: i64) {
        let Some(material) = self.teacher.materials.iter().find(|m| m.id == material_id) else {
            return;
        };
        self.teacher.material_dialog = Some(MaterialDialog {
            editing: Some(material.id),
            title: material.title.clone(),
            description: material.description.clone().unwrap_or_default(),
            category: material.category.clone(),
            ..Default::default()
        });
    }

    /// Guarda el diálogo de materiales; `now` arranca la barra de subida.
    pub fn submit_material(&mut self, now: f64) {
        let Some(dialog) = self.teacher.material_dialog.clone() else {
            return;
        };
        if dialog.saving {
            return;
        }
        if dialog.title.trim().is_empty() {
            self.alert = Some("Escribe un título para el material".to_owned());
            return;
        }
        let Some(token) = self.require_token() else {
            return;
        };

        match (dialog.editing, dialog.mode) {
            (Some(material_id), _) => {
                self.api.update_material(
                    &token,
                    material_id,
                    &dialog.title,
                    &dialog.description,
                    &dialog.category,
                );
            }
            (None, MaterialMode::Text) => {
                let draft = TextMaterialDraft {
                    title: dialog.title.clone(),
                    description: dialog.description.clone(),
                    content: dialog.content.clone(),
                    category: dialog.category.clone(),
                };
                self.api.create_material(&token, &draft);
            }
            (None, MaterialMode::File) => {
                if dialog.file_path.trim().is_empty() {
                    self.alert = Some("Rellena el título y elige un archivo".to_owned());
                    return;
                }
                let upload = match read_upload(&dialog) {
                    Ok(upload) => upload,
                    Err(reason) => {
                        log::warn!("{reason}");
                        self.alert = Some(reason);
                        return;
                    }
                };
                if let Some(open) = self.teacher.material_dialog.as_mut() {
                    open.upload_started = Some(now);
                }
                self.api.upload_material(&token, &upload);
            }
        }
        if let Some(open) = self.teacher.material_dialog.as_mut() {
            open.saving = true;
        }
    }

    pub fn ask_delete_material(&mut self, material_id: i64, title: &str) {
        self.teacher.confirm_delete = Some((material_id, title.to_owned()));
    }

    pub fn confirm_delete_material(&mut self) {
        let Some((material_id, _)) = self.teacher.confirm_delete.take() else {
            return;
        };
        if let Some(token) = self.require_token() {
            self.api.delete_material(&token, material_id);
        }
    }

    // ---------- respuestas ----------

    pub(crate) fn on_students(&mut self, result: Result<Vec<Student>, ApiError>) {
        self.teacher.students_loading = false;
        match result {
            Ok(students) => self.teacher.students = students,
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error cargando estudiantes: {err}");
                self.alert = Some(format!(
                    "No se pudieron cargar los estudiantes: {}",
                    err.user_message()
                ));
            }
        }
    }

    pub(crate) fn on_student_detail(&mut self, result: Result<StudentDetail, ApiError>) {
        self.teacher.detail_loading = false;
        match result {
            // Solo si la ficha sigue abierta para ese estudiante
            Ok(detail) => {
                if self.teacher.detail.as_ref().is_some_and(|d| d.id == detail.id) {
                    self.teacher.detail = Some(detail);
                }
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error cargando la ficha del estudiante: {err}");
                self.alert = Some(err.user_message());
            }
        }
    }

    pub(crate) fn on_teacher_message_sent(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => {
                self.teacher.message_dialog = None;
                self.alert = Some("Mensaje enviado".to_owned());
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error enviando mensaje: {err}");
                if let Some(dialog) = self.teacher.message_dialog.as_mut() {
                    dialog.sending = false;
                }
                self.alert = Some(format!("No se pudo enviar el mensaje: {}", err.user_message()));
            }
        }
    }

    pub(crate) fn on_student_added(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(ack) => {
                self.teacher.add_dialog = None;
                let text = ack.message.unwrap_or_else(|| "¡Estudiante añadido!".to_owned());
                self.alert = Some(text);
                self.reload_students();
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error añadiendo estudiante: {err}");
                if let Some(dialog) = self.teacher.add_dialog.as_mut() {
                    dialog.sending = false;
                }
                self.alert = Some(err.user_message());
            }
        }
    }

    pub(crate) fn on_material_status_updated(
        &mut self,
        student_id: i64,
        result: Result<Ack, ApiError>,
    ) {
        match result {
            // La ficha actual se queda en pantalla hasta que llega la nueva
            Ok(_) => {
                if self.teacher.detail.as_ref().is_some_and(|d| d.id == student_id) {
                    if let Some(token) = self.require_token() {
                        self.teacher.detail_loading = true;
                        self.api.student_detail(&token, student_id);
                    }
                }
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error cambiando el estado del material: {err}");
                self.alert = Some(err.user_message());
            }
        }
    }

    /// La misma respuesta sirve a la vista de estudiante y a la del profesor.
    pub(crate) fn on_materials(&mut self, result: Result<Vec<Material>, ApiError>) {
        self.student.materials_loading = false;
        match result {
            Ok(materials) => {
                if self.role() == Some(Role::Teacher) {
                    self.teacher.materials = materials;
                } else {
                    self.student.materials = materials;
                }
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error cargando materiales: {err}");
                if self.state == AppState::Teacher {
                    self.alert = Some(format!(
                        "No se pudieron cargar los materiales: {}",
                        err.user_message()
                    ));
                } else {
                    self.student.materials_error = Some(err.user_message());
                }
            }
        }
    }

    pub(crate) fn on_material_saved(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => {
                let message = match self.teacher.material_dialog.as_ref() {
                    Some(d) if d.editing.is_some() => "Material actualizado",
                    Some(d) if d.mode == MaterialMode::File => "¡Material subido correctamente!",
                    _ => "Material creado",
                };
                self.teacher.material_dialog = None;
                self.alert = Some(message.to_owned());
                self.reload_materials();
            }
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error guardando material: {err}");
                if let Some(dialog) = self.teacher.material_dialog.as_mut() {
                    dialog.saving = false;
                    dialog.upload_started = None;
                }
                self.alert = Some(format!(
                    "No se pudo guardar el material: {}",
                    err.user_message()
                ));
            }
        }
    }

    pub(crate) fn on_material_deleted(&mut self, result: Result<Ack, ApiError>) {
        match result {
            Ok(_) => self.reload_materials(),
            Err(err) if err.requires_login() => self.force_logout(&err),
            Err(err) => {
                log::warn!("Error eliminando material: {err}");
                self.alert = Some(format!(
                    "No se pudo eliminar el material: {}",
                    err.user_message()
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::api::mock::{MockTransport, RequestLog};
    use crate::api::{HttpRequest, HttpResponse, Method};
    use serde_json::Value;

    const STUDENTS: &str = r#"{"students": [
        {"id": 5, "full_name": "Ana Ruiz", "email": "ana@example.com", "tests_completed": 4, "average_score": 91.0},
        {"id": 6, "full_name": "Luis Mora", "email": "luis@example.com", "tests_completed": 1, "average_score": 55.0}
    ]}"#;

    fn dashboard(routes: Vec<(&'static str, u16, &'static str)>) -> (EduApp, RequestLog) {
        let (mock, log) = routed(routes);
        let mut app = logged_in(Role::Teacher, mock);
        app.navigate(AppState::Teacher);
        app.poll_events();
        (app, log)
    }

    #[test]
    fn mount_loads_roster_and_materials() {
        let (app, log) = dashboard(vec![
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": [{"id": 1, "title": "Álgebra", "file_type": "application/pdf", "file_size": 2048}]}"#),
        ]);
        assert_eq!(app.teacher.students.len(), 2);
        assert_eq!(app.teacher.materials[0].title, "Álgebra");
        assert!(app.student.materials.is_empty());
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn search_matches_name_or_email() {
        let (mut app, _log) = dashboard(vec![("/teacher", 200, STUDENTS)]);
        app.teacher.search = "LUIS".into();
        let ids: Vec<_> = app.filtered_students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![6]);
        app.teacher.search = "example.com".into();
        assert_eq!(app.filtered_students().len(), 2);
    }

    #[test]
    fn adding_a_student_reloads_the_roster() {
        let (mut app, log) = dashboard(vec![
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        app.teacher.add_dialog = Some(AddStudentDialog {
            email: " nuevo@example.com ".into(),
            sending: false,
        });

        app.submit_add_student();
        app.poll_events();

        let sent = log.borrow();
        let post = &sent[2];
        assert_eq!(post.method, Method::Post);
        let body: Value = serde_json::from_str(post.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["email"], "nuevo@example.com");
        // la respuesta de STUDENTS no trae "success", pero es un 200
        assert!(app.teacher.add_dialog.is_none());
        assert_eq!(sent[3].method, Method::Get);
        assert!(sent[3].url.ends_with("/teacher"));
    }

    #[test]
    fn failed_mutation_keeps_snapshot_and_alerts() {
        let (mut app, _log) = dashboard(vec![
            ("material_id=", 500, r#"{"error": "No se pudo borrar"}"#),
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": [{"id": 1, "title": "Álgebra"}]}"#),
        ]);
        app.ask_delete_material(1, "Álgebra");
        app.confirm_delete_material();
        app.poll_events();

        assert_eq!(app.teacher.materials.len(), 1);
        assert!(app.alert.as_deref().unwrap().contains("No se pudo borrar"));
        assert!(app.teacher.confirm_delete.is_none());
    }

    #[test]
    fn status_change_refetches_open_detail() {
        let (mut app, log) = dashboard(vec![
            ("student_id=5", 200, r#"{"student": {"id": 5, "full_name": "Ana Ruiz", "email": "ana@example.com", "materials": [{"material_id": 1, "title": "Álgebra", "status": "completed"}]}}"#),
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        app.open_student_detail(5);
        app.poll_events();
        let before = log.borrow().len();

        app.change_material_status(5, 1, MaterialStatus::Completed);
        app.poll_events();

        let sent = log.borrow();
        assert_eq!(sent.len(), before + 2);
        assert!(sent[before + 1].url.ends_with("?student_id=5"));
        let detail = app.teacher.detail.as_ref().unwrap();
        assert_eq!(detail.materials[0].status, MaterialStatus::Completed);
    }

    #[test]
    fn expired_token_on_roster_logs_out() {
        let (app, _log) = dashboard(vec![("/teacher", 401, r#"{"error": "Unauthorized"}"#)]);
        assert_eq!(app.state, AppState::Login);
        assert!(app.session.is_none());
    }

    #[test]
    fn text_material_requires_title() {
        let (mut app, log) = dashboard(vec![("/materials", 200, r#"{"materials": []}"#)]);
        let before = log.borrow().len();
        app.alert = None;
        app.open_new_material();
        app.submit_material(0.0);
        assert_eq!(log.borrow().len(), before);
        assert!(app.alert.is_some());
    }

    fn body_of(request: &HttpRequest) -> Value {
        serde_json::from_str(request.body.as_deref().unwrap()).unwrap()
    }

    #[test]
    fn text_material_is_created_and_list_reloaded() {
        let (mut app, log) = dashboard(vec![
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let before = log.borrow().len();
        app.open_new_material();
        if let Some(dialog) = app.teacher.material_dialog.as_mut() {
            dialog.title = " Fracciones ".into();
            dialog.content = "Una fracción es...".into();
        }

        app.submit_material(0.0);
        app.poll_events();

        let sent = log.borrow();
        let post = &sent[before];
        assert_eq!(post.method, Method::Post);
        assert!(post.url.ends_with("/materials"));
        assert_eq!(post.token.as_deref(), Some("tok-1"));
        let body = body_of(post);
        assert_eq!(body["action"], "create");
        assert_eq!(body["title"], "Fracciones");
        assert_eq!(body["content"], "Una fracción es...");
        assert_eq!(body["category"], DEFAULT_CATEGORY);
        assert_eq!(sent[before + 1].method, Method::Get);
        assert!(sent[before + 1].url.ends_with("/materials"));
        assert!(app.teacher.material_dialog.is_none());
        assert_eq!(app.alert.as_deref(), Some("Material creado"));
    }

    #[test]
    fn file_upload_sends_base64_and_mime() {
        let (mut app, log) = dashboard(vec![
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let path = std::env::temp_dir()
            .join(format!("edu_portal_upload_{}.pdf", std::process::id()));
        std::fs::write(&path, "hola").unwrap();
        let before = log.borrow().len();

        app.open_new_material();
        if let Some(dialog) = app.teacher.material_dialog.as_mut() {
            dialog.mode = MaterialMode::File;
            dialog.title = "Tema 1".into();
            dialog.file_path = path.display().to_string();
        }
        app.submit_material(10.0);

        let dialog = app.teacher.material_dialog.as_ref().unwrap();
        assert!(dialog.saving);
        assert_eq!(dialog.upload_started, Some(10.0));

        app.poll_events();
        std::fs::remove_file(&path).unwrap();

        let sent = log.borrow();
        let body = body_of(&sent[before]);
        assert_eq!(body["action"], "upload");
        assert_eq!(body["file_base64"], "aG9sYQ==");
        assert_eq!(body["file_type"], "application/pdf");
        assert_eq!(
            body["file_name"],
            format!("edu_portal_upload_{}.pdf", std::process::id())
        );
        assert!(sent[before + 1].url.ends_with("/materials"));
        assert!(app.teacher.material_dialog.is_none());
        assert_eq!(app.alert.as_deref(), Some("¡Material subido correctamente!"));
    }

    #[test]
    fn missing_upload_file_is_reported_without_request() {
        let (mut app, log) = dashboard(vec![("/materials", 200, r#"{"materials": []}"#)]);
        let before = log.borrow().len();
        app.open_new_material();
        if let Some(dialog) = app.teacher.material_dialog.as_mut() {
            dialog.mode = MaterialMode::File;
            dialog.title = "Tema 1".into();
            dialog.file_path = "/no/existe/tema1.pdf".into();
        }

        app.submit_material(0.0);

        assert_eq!(log.borrow().len(), before);
        assert!(app.alert.as_deref().unwrap().contains("No se pudo leer"));
        assert!(!app.teacher.material_dialog.as_ref().unwrap().saving);
    }

    #[test]
    fn failed_edit_keeps_dialog_open() {
        let (mock, log) = MockTransport::new(|req: &HttpRequest| {
            Ok(match (req.method, req.url.contains("/materials")) {
                (Method::Post, _) => HttpResponse {
                    status: 500,
                    body: r#"{"error": "Sin permiso"}"#.to_string(),
                },
                (_, true) => HttpResponse {
                    status: 200,
                    body: r#"{"materials": [{"id": 3, "title": "Álgebra", "category": "Mates"}]}"#
                        .to_string(),
                },
                _ => HttpResponse {
                    status: 200,
                    body: STUDENTS.to_string(),
                },
            })
        });
        let mut app = logged_in(Role::Teacher, mock);
        app.navigate(AppState::Teacher);
        app.poll_events();
        let before = log.borrow().len();

        app.open_edit_material(3);
        if let Some(dialog) = app.teacher.material_dialog.as_mut() {
            dialog.title = "Álgebra II".into();
        }
        app.submit_material(0.0);
        app.poll_events();

        let sent = log.borrow();
        assert_eq!(sent.len(), before + 1);
        let body = body_of(&sent[before]);
        assert_eq!(body["action"], "update");
        assert_eq!(body["material_id"], 3);
        assert_eq!(body["title"], "Álgebra II");
        assert_eq!(body["category"], "Mates");
        let dialog = app.teacher.material_dialog.as_ref().unwrap();
        assert_eq!(dialog.editing, Some(3));
        assert!(!dialog.saving);
        assert!(app.alert.as_deref().unwrap().contains("Sin permiso"));
    }

    #[test]
    fn teacher_message_is_sent_and_dialog_closed() {
        let (mut app, log) = dashboard(vec![
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        let before = log.borrow().len();
        app.open_message_dialog(5, "Ana Ruiz");
        if let Some(dialog) = app.teacher.message_dialog.as_mut() {
            dialog.text = "  hola  ".into();
        }

        app.send_teacher_message();
        app.poll_events();

        let sent = log.borrow();
        assert_eq!(sent.len(), before + 1);
        assert_eq!(sent[before].method, Method::Post);
        assert!(sent[before].url.ends_with("/teacher"));
        let body = body_of(&sent[before]);
        assert_eq!(body["action"], "send_message");
        assert_eq!(body["student_id"], 5);
        assert_eq!(body["message"], "hola");
        assert!(app.teacher.message_dialog.is_none());
        assert_eq!(app.alert.as_deref(), Some("Mensaje enviado"));
    }

    #[test]
    fn blank_teacher_message_is_not_sent() {
        let (mut app, log) = dashboard(vec![("/teacher", 200, STUDENTS)]);
        let before = log.borrow().len();
        app.open_message_dialog(5, "Ana Ruiz");

        app.send_teacher_message();

        assert_eq!(log.borrow().len(), before);
        assert!(app.teacher.message_dialog.is_some());
    }

    #[test]
    fn status_update_keeps_detail_until_refetch_arrives() {
        let (mut app, log) = dashboard(vec![
            ("student_id=5", 200, r#"{"student": {"id": 5, "full_name": "Ana Ruiz", "email": "ana@example.com", "materials": [{"material_id": 1, "title": "Álgebra"}]}}"#),
            ("/teacher", 200, STUDENTS),
            ("/materials", 200, r#"{"materials": []}"#),
        ]);
        app.open_student_detail(5);
        app.poll_events();

        let ack = Ack {
            success: true,
            message: None,
        };
        app.on_material_status_updated(5, Ok(ack));

        let detail = app.teacher.detail.as_ref().unwrap();
        assert_eq!(detail.materials.len(), 1);
        assert!(app.teacher.detail_loading);
        assert!(log.borrow().last().unwrap().url.ends_with("?student_id=5"));
    }

    #[test]
    fn simulated_progress_is_capped() {
        assert_eq!(simulated_progress(0.0), 0.0);
        assert!((simulated_progress(2.0) - 0.5).abs() < 1e-6);
        assert_eq!(simulated_progress(60.0), 0.9);
    }

    #[test]
    fn mime_types_by_extension() {
        assert_eq!(mime_from_file_name("tema1.PDF"), "application/pdf");
        assert_eq!(mime_from_file_name("foto.jpeg"), "image/jpeg");
        assert_eq!(mime_from_file_name("sin_extension"), "application/octet-stream");
    }
}

use super::*;

impl EduApp {
    /// Reparte cada respuesta a la pantalla que la pidió.
    pub fn handle_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::LoggedIn(result) => self.on_logged_in(result),
            ApiEvent::Registered(result) => self.on_registered(result),
            ApiEvent::Profile(result) => self.on_profile(result),
            ApiEvent::Teachers(result) => self.on_teachers(result),
            ApiEvent::UnreadCount(result) => self.on_unread_count(result),
            ApiEvent::TestResultSaved(result) => self.on_test_result_saved(result),
            ApiEvent::ChatMessages {
                other_user_id,
                result,
            } => self.on_chat_messages(other_user_id, result),
            ApiEvent::ChatSent {
                other_user_id,
                result,
            } => self.on_chat_sent(other_user_id, result),
            ApiEvent::Students(result) => self.on_students(result),
            ApiEvent::StudentDetail(result) => self.on_student_detail(result),
            ApiEvent::TeacherMessageSent(result) => self.on_teacher_message_sent(result),
            ApiEvent::StudentAdded(result) => self.on_student_added(result),
            ApiEvent::MaterialStatusUpdated { student_id, result } => {
                self.on_material_status_updated(student_id, result)
            }
            ApiEvent::Materials(result) => self.on_materials(result),
            ApiEvent::MaterialSaved(result) => self.on_material_saved(result),
            ApiEvent::MaterialDeleted(result) => self.on_material_deleted(result),
        }
    }
}

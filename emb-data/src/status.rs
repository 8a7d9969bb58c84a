//! Transient loading / success / error messages.
//!
//! At most one loading message and one notice are visible. A newer notice
//! replaces an older one, and dismissing by id only removes the notice that
//! id was issued for, so an old timeout never hides a newer notice.

use serde::Serialize;

pub const REFRESH_LOADING: &str = "Actualizando datos...";
pub const REFRESH_SUCCESS: &str = "Datos actualizados correctamente";
pub const REFRESH_ERROR: &str = "Error al actualizar los datos. Verifique la conexión y el archivo CSV.";
pub const INITIAL_LOAD_ERROR: &str =
    "Error al cargar los datos de los embalses. Verifique que el archivo CSV esté disponible.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusBoard {
    loading: Option<String>,
    notice: Option<Notice>,
    next_id: u64,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_loading(&mut self, message: impl Into<String>) {
        self.loading = Some(message.into());
    }

    pub fn hide_loading(&mut self) {
        self.loading = None;
    }

    pub fn loading(&self) -> Option<&str> {
        self.loading.as_deref()
    }

    /// Show a notice, replacing any visible one. Returns its id for [`Self::dismiss`].
    pub fn show(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notice = Some(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(NoticeKind::Error, message)
    }

    /// Remove the notice with `id`. Returns false if it was already replaced.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.notice {
            Some(notice) if notice.id == id => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_message() {
        let mut board = StatusBoard::new();
        board.show_loading(REFRESH_LOADING);
        assert_eq!(board.loading(), Some(REFRESH_LOADING));
        board.show_loading("otra");
        assert_eq!(board.loading(), Some("otra"));
        board.hide_loading();
        assert_eq!(board.loading(), None);
    }

    #[test]
    fn test_newer_notice_replaces_older() {
        let mut board = StatusBoard::new();
        let first = board.success(REFRESH_SUCCESS);
        let second = board.error(REFRESH_ERROR);
        assert_ne!(first, second);
        let current = board.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Error);
        assert_eq!(current.message, REFRESH_ERROR);
    }

    #[test]
    fn test_stale_dismiss_keeps_newer_notice() {
        let mut board = StatusBoard::new();
        let first = board.success("uno");
        let second = board.success("dos");
        assert!(!board.dismiss(first));
        assert_eq!(board.current().map(|n| n.id), Some(second));
        assert!(board.dismiss(second));
        assert!(board.current().is_none());
        assert!(!board.dismiss(second));
    }
}

// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Sweet;
use crate::state::{CatalogState, SessionState};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub catalog: CatalogState,

    // UI State
    pub search_input: Rc<RefCell<String>>,
    /// Mostrar la pantalla de login/registro (el catálogo se navega sin sesión)
    pub show_auth: Rc<RefCell<bool>>,
    pub show_register: Rc<RefCell<bool>>,
    pub auth_error: Rc<RefCell<Option<String>>>,
    pub auth_loading: Rc<RefCell<bool>>,

    // Admin: dulce en edición en el formulario (None = formulario de alta)
    pub editing_sweet: Rc<RefCell<Option<Sweet>>>,

    // Aviso transitorio (errores de mutación, tipo toast)
    pub notice: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            catalog: CatalogState::new(),

            search_input: Rc::new(RefCell::new(String::new())),
            show_auth: Rc::new(RefCell::new(false)),
            show_register: Rc::new(RefCell::new(false)),
            auth_error: Rc::new(RefCell::new(None)),
            auth_loading: Rc::new(RefCell::new(false)),

            editing_sweet: Rc::new(RefCell::new(None)),
            notice: Rc::new(RefCell::new(None)),

            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers de cambios
    pub fn notify_subscribers(&self) {
        for callback in self.change_subscribers.borrow().iter() {
            callback();
        }
    }

    /// Mostrar un aviso transitorio y limpiarlo solo a los 4 segundos
    pub fn flash_notice(&self, message: String) {
        use gloo_timers::callback::Timeout;

        *self.notice.borrow_mut() = Some(message);
        self.notify_subscribers();

        let notice = self.notice.clone();
        let state = self.clone();
        Timeout::new(4_000, move || {
            *notice.borrow_mut() = None;
            state.notify_subscribers();
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

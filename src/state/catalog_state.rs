// ============================================================================
// CATALOG STATE - Máquina de estados de la vista del catálogo
// ============================================================================
// Cache local de dulces + fase de carga. El cache se muta SOLO al aplicar la
// respuesta de un fetch vigente: cada fetch lleva un ticket (seq + época de
// sesión) y las respuestas de tickets superados se descartan, llegue cada una
// en el orden que llegue.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Sweet;
use crate::state::session_state::SessionState;

/// Fase de la vista del catálogo
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Ticket de un fetch en vuelo: identifica a qué intento y a qué sesión
/// pertenece la respuesta
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    epoch: u64,
}

/// Estado del catálogo
#[derive(Clone)]
pub struct CatalogState {
    items: Rc<RefCell<Vec<Sweet>>>,
    phase: Rc<RefCell<CatalogPhase>>,
    error_message: Rc<RefCell<Option<String>>>,
    /// Query del último fetch (None = listar todo); se repite en el
    /// refresco pesimista tras cada mutación
    last_query: Rc<RefCell<Option<String>>>,
    fetch_seq: Rc<RefCell<u64>>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
            phase: Rc::new(RefCell::new(CatalogPhase::Idle)),
            error_message: Rc::new(RefCell::new(None)),
            last_query: Rc::new(RefCell::new(None)),
            fetch_seq: Rc::new(RefCell::new(0)),
        }
    }

    /// Iniciar un fetch: entra en Loading, limpia el error y emite el ticket
    /// que la respuesta deberá presentar para ser aplicada
    pub fn begin_fetch(&self, session: &SessionState, query: Option<String>) -> FetchTicket {
        *self.phase.borrow_mut() = CatalogPhase::Loading;
        *self.error_message.borrow_mut() = None;
        *self.last_query.borrow_mut() = query;

        let mut seq = self.fetch_seq.borrow_mut();
        *seq += 1;
        FetchTicket {
            seq: *seq,
            epoch: session.epoch(),
        }
    }

    /// ¿Sigue vigente este ticket? Lo invalida un fetch más nuevo o un
    /// cambio de sesión (login/logout) posterior a su emisión
    fn is_current(&self, session: &SessionState, ticket: &FetchTicket) -> bool {
        *self.fetch_seq.borrow() == ticket.seq && session.epoch() == ticket.epoch
    }

    /// Aplicar el resultado exitoso de un fetch. Devuelve false si la
    /// respuesta era obsoleta y fue descartada.
    pub fn apply_fetch_success(
        &self,
        session: &SessionState,
        ticket: &FetchTicket,
        items: Vec<Sweet>,
    ) -> bool {
        if !self.is_current(session, ticket) {
            log::info!("🗑️ Respuesta de fetch obsoleta descartada (seq {})", ticket.seq);
            return false;
        }
        *self.items.borrow_mut() = items;
        *self.phase.borrow_mut() = CatalogPhase::Ready;
        *self.error_message.borrow_mut() = None;
        true
    }

    /// Aplicar el fallo de un fetch. Los items previos se conservan
    /// (stale-but-visible): mejor lista vieja que pantalla en blanco.
    pub fn apply_fetch_failure(
        &self,
        session: &SessionState,
        ticket: &FetchTicket,
        message: &str,
    ) -> bool {
        if !self.is_current(session, ticket) {
            log::info!("🗑️ Error de fetch obsoleto descartado (seq {})", ticket.seq);
            return false;
        }
        *self.phase.borrow_mut() = CatalogPhase::Failed;
        *self.error_message.borrow_mut() = Some(message.to_string());
        true
    }

    pub fn items(&self) -> Vec<Sweet> {
        self.items.borrow().clone()
    }

    pub fn phase(&self) -> CatalogPhase {
        self.phase.borrow().clone()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error_message.borrow().clone()
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.borrow().clone()
    }

    pub fn find(&self, id: i64) -> Option<Sweet> {
        self.items.borrow().iter().find(|s| s.id == id).cloned()
    }

    /// Fast-fail de compra: con stock local en 0 no hay request que valga
    pub fn is_out_of_stock(&self, id: i64) -> bool {
        self.find(id).map(|s| s.quantity == 0).unwrap_or(false)
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::services::MemoryCredentialStore;

    fn sweet(id: i64, name: &str, quantity: u32) -> Sweet {
        Sweet {
            id,
            name: name.to_string(),
            category: "chocolate".to_string(),
            price: 2.5,
            quantity,
        }
    }

    fn test_session() -> SessionState {
        SessionState::with_store(Rc::new(MemoryCredentialStore::new()))
    }

    #[test]
    fn test_fetch_success_transitions_to_ready() {
        let session = test_session();
        let catalog = CatalogState::new();
        assert_eq!(catalog.phase(), CatalogPhase::Idle);

        let ticket = catalog.begin_fetch(&session, None);
        assert_eq!(catalog.phase(), CatalogPhase::Loading);

        assert!(catalog.apply_fetch_success(&session, &ticket, vec![sweet(1, "Trufa", 5)]));
        assert_eq!(catalog.phase(), CatalogPhase::Ready);
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.error_message(), None);
    }

    #[test]
    fn test_fetch_failure_keeps_stale_items_visible() {
        let session = test_session();
        let catalog = CatalogState::new();

        let t1 = catalog.begin_fetch(&session, None);
        catalog.apply_fetch_success(&session, &t1, vec![sweet(1, "Trufa", 5), sweet(2, "Alfajor", 3)]);

        let t2 = catalog.begin_fetch(&session, None);
        assert!(catalog.apply_fetch_failure(&session, &t2, "Error de red: timeout"));

        assert_eq!(catalog.phase(), CatalogPhase::Failed);
        assert_eq!(catalog.error_message(), Some("Error de red: timeout".to_string()));
        // Los items del último fetch exitoso se siguen mostrando
        assert_eq!(catalog.items().len(), 2);
    }

    #[test]
    fn test_superseded_fetch_is_discarded_regardless_of_arrival_order() {
        let session = test_session();
        let catalog = CatalogState::new();

        // search("a") seguido de search("b")
        let t_a = catalog.begin_fetch(&session, Some("a".to_string()));
        let t_b = catalog.begin_fetch(&session, Some("b".to_string()));

        // Caso 1: la respuesta vieja llega última
        assert!(catalog.apply_fetch_success(&session, &t_b, vec![sweet(2, "Bombón", 1)]));
        assert!(!catalog.apply_fetch_success(&session, &t_a, vec![sweet(1, "Alfajor", 1)]));
        assert_eq!(catalog.items()[0].id, 2);
        assert_eq!(catalog.last_query(), Some("b".to_string()));

        // Caso 2: también se descarta su error obsoleto
        let t_c = catalog.begin_fetch(&session, None);
        let t_d = catalog.begin_fetch(&session, None);
        assert!(!catalog.apply_fetch_failure(&session, &t_c, "boom"));
        assert!(catalog.apply_fetch_success(&session, &t_d, vec![sweet(3, "Gomita", 9)]));
        assert_eq!(catalog.phase(), CatalogPhase::Ready);
    }

    #[test]
    fn test_fetch_in_flight_at_logout_is_discarded() {
        let session = test_session();
        session.login(
            "tok".to_string(),
            User {
                id: 1,
                username: "ana".to_string(),
                email: "ana@x.com".to_string(),
                is_admin: false,
            },
        );

        let catalog = CatalogState::new();
        let ticket = catalog.begin_fetch(&session, None);

        // Logout mientras el fetch está en vuelo
        session.logout();

        assert!(!catalog.apply_fetch_success(&session, &ticket, vec![sweet(1, "Trufa", 5)]));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_pessimistic_refresh_reflects_server_state() {
        let session = test_session();
        let catalog = CatalogState::new();

        let t1 = catalog.begin_fetch(&session, None);
        catalog.apply_fetch_success(&session, &t1, vec![sweet(5, "Turrón", 2), sweet(6, "Caramelo", 7)]);

        // Tras restock(5, 10) el servidor devuelve quantity=12; el refresco
        // reemplaza el cache completo con la verdad del servidor
        let t2 = catalog.begin_fetch(&session, catalog.last_query());
        catalog.apply_fetch_success(&session, &t2, vec![sweet(5, "Turrón", 12), sweet(6, "Caramelo", 7)]);

        assert_eq!(catalog.find(5).unwrap().quantity, 12);
        assert_eq!(catalog.find(6).unwrap().quantity, 7);
    }

    #[test]
    fn test_out_of_stock_fast_fail_check() {
        let session = test_session();
        let catalog = CatalogState::new();

        let t = catalog.begin_fetch(&session, None);
        catalog.apply_fetch_success(&session, &t, vec![sweet(1, "Trufa", 0), sweet(2, "Alfajor", 4)]);

        assert!(catalog.is_out_of_stock(1));
        assert!(!catalog.is_out_of_stock(2));
        // Un id desconocido no se bloquea client-side: lo valida el servidor
        assert!(!catalog.is_out_of_stock(99));
    }

    #[test]
    fn test_begin_fetch_records_query_for_refresh() {
        let session = test_session();
        let catalog = CatalogState::new();

        catalog.begin_fetch(&session, Some("choco".to_string()));
        assert_eq!(catalog.last_query(), Some("choco".to_string()));

        catalog.begin_fetch(&session, None);
        assert_eq!(catalog.last_query(), None);
    }
}

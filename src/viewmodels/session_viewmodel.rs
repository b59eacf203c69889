// ============================================================================
// SESSION VIEWMODEL - Ciclo de vida de la sesión
// ============================================================================
// LoggedOut --login--> Loading --ok--> LoggedIn
//                              \--error--> LoggedOut (página Login)
// LoggedIn --logout--> LoggedOut (página Login)
//
// Cada cambio de token incrementa la generación de AppState. Una carga solo
// se aplica si su generación sigue siendo la actual al terminar.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::models::{LoginRequest, Package, Page, SignUpRequest, User};
use crate::services::BackendApi;
use crate::state::{AppState, SessionStore};
use crate::viewmodels::identity_loader::{IdentityLoader, IdentityOutcome};
use crate::viewmodels::navigation_guard::{compute_rendered_page, default_landing, RenderedView};

/// Fase de la sesión derivada del estado
#[derive(Clone, Debug, PartialEq)]
pub enum SessionPhase {
    LoggedOut,
    Loading,
    LoggedIn(User),
}

/// Carga pendiente de ejecutar, ligada a una generación y a un token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub token: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Applied,
    /// Otra carga o un logout la invalidaron mientras estaba en vuelo
    Discarded,
}

#[derive(Clone)]
pub struct SessionViewModel {
    api: Rc<dyn BackendApi>,
    loader: IdentityLoader,
    session: SessionStore,
    state: AppState,
}

impl SessionViewModel {
    pub fn new(api: Rc<dyn BackendApi>, session: SessionStore, state: AppState, config: &AppConfig) -> Self {
        Self {
            loader: IdentityLoader::new(api.clone(), config.gallery_retry_attempts),
            api,
            session,
            state,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Vista a renderizar ahora mismo
    pub fn rendered_view(&self) -> RenderedView {
        let user = self.state.current_user();
        compute_rendered_page(self.state.requested_page(), self.state.is_loading(), user.as_ref())
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.is_loading() {
            return SessionPhase::Loading;
        }
        match self.state.current_user() {
            Some(user) => SessionPhase::LoggedIn(user),
            None => SessionPhase::LoggedOut,
        }
    }

    /// Paquetes de suscripción visibles para el usuario
    pub fn visible_packages(&self) -> Vec<Package> {
        self.state.packages().into_iter().filter(|p| p.visible).collect()
    }

    pub fn set_page(&self, page: Page) {
        log::debug!("🧭 [GUARD] Página solicitada: {}", page.as_str());
        self.state.set_requested_page(page);
        self.state.notify_subscribers();
    }

    /// Abre una nueva generación de carga para el token actual y entra en Loading
    pub fn begin_load(&self) -> LoadTicket {
        let generation = self.state.next_generation();
        self.state.set_loading(true);
        self.state.notify_subscribers();

        let token = self.session.token();
        log::info!(
            "🔄 [SESSION] Carga #{} iniciada ({})",
            generation,
            if token.is_some() { "con token" } else { "sin token" }
        );
        LoadTicket { generation, token }
    }

    /// Ejecuta la carga del ticket y la aplica si sigue vigente
    pub async fn run_load(&self, ticket: LoadTicket) -> LoadStatus {
        let result = self.loader.load(ticket.token.as_deref()).await;

        if !self.state.is_current_generation(ticket.generation) {
            log::info!(
                "🗑️ [SESSION] Carga #{} descartada (generación actual #{})",
                ticket.generation,
                self.state.load_generation()
            );
            return LoadStatus::Discarded;
        }

        self.state.set_gallery_images(result.gallery_images);

        match result.identity {
            IdentityOutcome::Anonymous => {
                self.state.set_current_user(None);
                self.state.set_packages(Vec::new());
                self.state.set_requested_page(default_landing(None));
                self.state.set_loading(false);
                self.state.notify_subscribers();
            }
            IdentityOutcome::Resolved(data) => {
                let landing = default_landing(Some(&data.user));
                log::info!("✅ [SESSION] Sesión iniciada, aterrizaje en {}", landing.as_str());
                self.state.set_current_user(Some(data.user));
                self.state.set_packages(data.packages);
                self.state.set_requested_page(landing);
                self.state.set_loading(false);
                self.state.notify_subscribers();
            }
            IdentityOutcome::Rejected(error) => {
                log::warn!("🔒 [SESSION] Credencial rechazada ({}), forzando logout", error);
                self.logout();
            }
        }

        LoadStatus::Applied
    }

    /// begin_load + run_load
    pub async fn reload(&self) -> LoadStatus {
        let ticket = self.begin_load();
        self.run_load(ticket).await
    }

    /// Persiste el token nuevo. Devuelve el ticket de carga si el token cambió.
    /// Un token vacío cuenta como ausencia de token, igual que al arrancar.
    pub fn login_success(&self, token: &str) -> Option<LoadTicket> {
        let token = Some(token).filter(|t| !t.is_empty());
        if self.session.token().as_deref() == token {
            log::debug!("ℹ️ [SESSION] Mismo token, no se recarga");
            return None;
        }
        match token {
            Some(token) => {
                log::info!("🔐 [SESSION] Login exitoso, guardando token");
                self.session.save(token);
            }
            None => {
                log::warn!("⚠️ [SESSION] Token vacío recibido, sesión anónima");
                self.session.clear();
            }
        }
        Some(self.begin_load())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Option<LoadTicket>, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let token = self.api.login(&request).await?;
        Ok(self.login_success(&token))
    }

    pub async fn sign_up(&self, request: SignUpRequest) -> Result<Option<LoadTicket>, ApiError> {
        let token = self.api.sign_up(&request).await?;
        Ok(self.login_success(&token))
    }

    /// Limpia token e identidad e invalida cualquier carga en vuelo
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout");
        self.session.clear();
        self.state.next_generation();
        self.state.set_current_user(None);
        self.state.set_packages(Vec::new());
        self.state.set_requested_page(Page::Login);
        self.state.set_loading(false);
        self.state.notify_subscribers();
    }

    /// Reemplaza la identidad completa (edición de perfil, créditos)
    pub fn replace_identity(&self, user: User) -> bool {
        if !self.session.has_token() || !self.state.has_user() || self.state.is_loading() {
            log::warn!("⚠️ [SESSION] Reemplazo de identidad ignorado: no hay sesión activa");
            return false;
        }
        log::info!("👤 [SESSION] Identidad actualizada: {}", user.email);
        self.state.set_current_user(Some(user));
        self.state.notify_subscribers();
        true
    }

    /// Descuenta un crédito de imagen tras una generación exitosa
    pub fn consume_image_credit(&self) -> bool {
        match self.state.current_user() {
            Some(user) => self.replace_identity(user.with_credit_consumed()),
            None => {
                log::warn!("⚠️ [SESSION] Crédito consumido sin usuario");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TOKEN_STORAGE_KEY;
    use crate::models::{GalleryImage, GalleryResponse, InitialData};
    use crate::utils::{KeyValueStorage, MemoryStorage};
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::cell::{Cell, RefCell};

    fn user(name: &str, is_admin: bool) -> User {
        User {
            id: 1,
            name: name.to_string(),
            email: format!("{}@example.com", name),
            country: "SA".to_string(),
            is_admin,
            registration_date: "2024-02-02".to_string(),
            subscription_package_id: Some(2),
            image_credits: Some(2),
            purchase_history: None,
            profile_picture_url: None,
        }
    }

    /// Backend guionizado: "admin" y "member" son tokens válidos, "slow"
    /// espera a que el test abra la compuerta.
    #[derive(Default)]
    struct ScriptedBackend {
        gallery_down: bool,
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        identity_calls: Cell<u32>,
    }

    impl ScriptedBackend {
        fn gated() -> (Self, oneshot::Sender<()>) {
            let (tx, rx) = oneshot::channel();
            let backend = Self {
                gate: RefCell::new(Some(rx)),
                ..Self::default()
            };
            (backend, tx)
        }
    }

    #[async_trait(?Send)]
    impl BackendApi for ScriptedBackend {
        async fn get_public_gallery(&self) -> Result<GalleryResponse, ApiError> {
            if self.gallery_down {
                return Err(ApiError::Http {
                    status: 503,
                    message: "down".to_string(),
                });
            }
            Ok(GalleryResponse {
                gallery_images: vec![GalleryImage {
                    id: 1,
                    before_src: "before.jpg".to_string(),
                    after_src: "after.jpg".to_string(),
                }],
            })
        }

        async fn get_initial_data(&self, token: &str) -> Result<InitialData, ApiError> {
            self.identity_calls.set(self.identity_calls.get() + 1);
            let packages = vec![
                Package { id: 1, name: "Basic".to_string(), image_count: 10, price: 5.0, visible: true },
                Package { id: 2, name: "Legacy".to_string(), image_count: 50, price: 20.0, visible: false },
            ];
            match token {
                "admin" => Ok(InitialData { user: user("root", true), packages }),
                "member" => Ok(InitialData { user: user("ana", false), packages }),
                "slow" => {
                    let gate = self.gate.borrow_mut().take();
                    if let Some(gate) = gate {
                        let _ = gate.await;
                    }
                    Ok(InitialData { user: user("stale", true), packages })
                }
                _ => Err(ApiError::Unauthorized),
            }
        }

        async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
            match request.password.as_str() {
                "secret" => Ok("member".to_string()),
                _ => Err(ApiError::Unauthorized),
            }
        }

        async fn sign_up(&self, _request: &SignUpRequest) -> Result<String, ApiError> {
            Ok("member".to_string())
        }
    }

    fn shell(backend: ScriptedBackend, stored_token: Option<&str>) -> (SessionViewModel, MemoryStorage) {
        let storage = match stored_token {
            Some(token) => MemoryStorage::new().with_item(TOKEN_STORAGE_KEY, token),
            None => MemoryStorage::new(),
        };
        let session = SessionStore::new(Rc::new(storage.clone()));
        let vm = SessionViewModel::new(Rc::new(backend), session, AppState::new(), &AppConfig::default());
        (vm, storage)
    }

    #[test]
    fn startup_renders_loading() {
        let (vm, _) = shell(ScriptedBackend::default(), None);
        assert_eq!(vm.phase(), SessionPhase::Loading);
        assert_eq!(vm.rendered_view(), RenderedView::Loading);
    }

    #[tokio::test]
    async fn startup_without_token_lands_on_home_with_gallery() {
        let (vm, _) = shell(ScriptedBackend::default(), None);
        assert_eq!(vm.reload().await, LoadStatus::Applied);

        assert_eq!(vm.phase(), SessionPhase::LoggedOut);
        assert_eq!(vm.state().requested_page(), Page::Home);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Home));
        assert_eq!(vm.state().gallery_images().len(), 1);
    }

    #[tokio::test]
    async fn rejected_stored_token_forces_logout_to_login() {
        let (vm, storage) = shell(ScriptedBackend::default(), Some("expired"));
        vm.reload().await;

        assert!(vm.token().is_none());
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
        assert!(vm.state().current_user().is_none());
        assert_eq!(vm.state().requested_page(), Page::Login);
        assert!(!vm.state().is_loading());
        // La galería pública sigue disponible
        assert_eq!(vm.state().gallery_images().len(), 1);
    }

    #[tokio::test]
    async fn admin_lands_on_dashboard_and_member_on_home() {
        let (admin_vm, _) = shell(ScriptedBackend::default(), Some("admin"));
        admin_vm.reload().await;
        assert_eq!(admin_vm.rendered_view(), RenderedView::Page(Page::Dashboard));

        let (member_vm, _) = shell(ScriptedBackend::default(), Some("member"));
        member_vm.reload().await;
        assert_eq!(member_vm.state().requested_page(), Page::Home);
        assert!(matches!(member_vm.phase(), SessionPhase::LoggedIn(u) if u.name == "ana"));
    }

    #[tokio::test]
    async fn gallery_outage_does_not_block_login() {
        let backend = ScriptedBackend {
            gallery_down: true,
            ..ScriptedBackend::default()
        };
        let (vm, _) = shell(backend, Some("member"));
        assert_eq!(vm.reload().await, LoadStatus::Applied);
        assert!(vm.state().has_user());
        assert!(vm.state().gallery_images().is_empty());
    }

    #[tokio::test]
    async fn login_success_persists_token_and_loads_identity() {
        let (vm, storage) = shell(ScriptedBackend::default(), None);
        vm.reload().await;
        vm.set_page(Page::Login);

        let ticket = vm.login("ana@example.com", "secret").await.unwrap().unwrap();
        assert_eq!(ticket.token.as_deref(), Some("member"));
        assert_eq!(storage.get_item(TOKEN_STORAGE_KEY).as_deref(), Some("member"));
        assert_eq!(vm.rendered_view(), RenderedView::Loading);

        assert_eq!(vm.run_load(ticket).await, LoadStatus::Applied);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Home));
        assert_eq!(vm.visible_packages().len(), 1);
    }

    #[tokio::test]
    async fn failed_login_leaves_state_untouched() {
        let (vm, storage) = shell(ScriptedBackend::default(), None);
        vm.reload().await;
        vm.set_page(Page::Login);

        let err = vm.login("ana@example.com", "wrong").await.unwrap_err();
        assert_eq!(err, ApiError::Unauthorized);
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Login));
    }

    #[tokio::test]
    async fn same_token_does_not_reload() {
        let backend = ScriptedBackend::default();
        let (vm, _) = shell(backend, Some("member"));
        vm.reload().await;
        let generation = vm.state().load_generation();

        assert!(vm.login_success("member").is_none());
        assert_eq!(vm.state().load_generation(), generation);
    }

    #[tokio::test]
    async fn empty_token_is_treated_as_no_token() {
        let (vm, storage) = shell(ScriptedBackend::default(), None);
        vm.reload().await;
        let generation = vm.state().load_generation();

        // Sin token guardado, "" no cambia nada
        assert!(vm.login_success("").is_none());
        assert_eq!(vm.state().load_generation(), generation);

        let (vm, storage_member) = shell(ScriptedBackend::default(), Some("member"));
        vm.reload().await;
        let ticket = vm.login_success("").unwrap();
        assert_eq!(ticket.token, None);
        assert!(!storage_member.contains(TOKEN_STORAGE_KEY));

        assert_eq!(vm.run_load(ticket).await, LoadStatus::Applied);
        assert_eq!(vm.phase(), SessionPhase::LoggedOut);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Home));
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
    }

    #[tokio::test]
    async fn logout_clears_session_and_guards_protected_pages() {
        let (vm, storage) = shell(ScriptedBackend::default(), Some("member"));
        vm.reload().await;
        vm.set_page(Page::Studio);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Studio));

        vm.logout();
        assert!(vm.token().is_none());
        assert!(!storage.contains(TOKEN_STORAGE_KEY));
        assert_eq!(vm.phase(), SessionPhase::LoggedOut);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Login));

        vm.set_page(Page::Studio);
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Login));
        assert!(vm.state().packages().is_empty());
    }

    #[tokio::test]
    async fn logout_discards_in_flight_load() {
        let (vm, _) = shell(ScriptedBackend::default(), Some("admin"));
        let ticket = vm.begin_load();
        vm.logout();

        assert_eq!(vm.run_load(ticket).await, LoadStatus::Discarded);
        assert!(vm.state().current_user().is_none());
        assert_eq!(vm.state().requested_page(), Page::Login);
        assert!(!vm.state().is_loading());
    }

    #[tokio::test]
    async fn slow_stale_load_cannot_overwrite_newer_login() {
        let (backend, release) = ScriptedBackend::gated();
        let (vm, _) = shell(backend, Some("slow"));

        let stale = vm.begin_load();
        let fresh = vm.login_success("member").unwrap();

        let stale_run = vm.run_load(stale);
        let fresh_run = async {
            let status = vm.run_load(fresh).await;
            // La carga lenta termina después de la nueva
            let _ = release.send(());
            status
        };
        let (stale_status, fresh_status) = futures::join!(stale_run, fresh_run);

        assert_eq!(fresh_status, LoadStatus::Applied);
        assert_eq!(stale_status, LoadStatus::Discarded);
        let current = vm.state().current_user().unwrap();
        assert_eq!(current.name, "ana");
        assert_eq!(vm.state().requested_page(), Page::Home);
    }

    #[tokio::test]
    async fn identity_replacement_keeps_page() {
        let (vm, _) = shell(ScriptedBackend::default(), Some("member"));
        vm.reload().await;
        vm.set_page(Page::Profile);

        let mut edited = vm.state().current_user().unwrap();
        edited.name = "Ana María".to_string();
        assert!(vm.replace_identity(edited));
        assert_eq!(vm.state().current_user().unwrap().name, "Ana María");
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Profile));

        assert!(vm.consume_image_credit());
        assert_eq!(vm.state().current_user().unwrap().image_credits, Some(1));
    }

    #[tokio::test]
    async fn studio_generations_spend_credits_until_exhausted() {
        let (vm, _) = shell(ScriptedBackend::default(), Some("member"));
        vm.reload().await;
        vm.set_page(Page::Studio);

        assert!(vm.consume_image_credit());
        assert!(vm.consume_image_credit());
        let user = vm.state().current_user().unwrap();
        assert_eq!(user.image_credits, Some(0));
        assert!(!user.has_image_credits());

        // Sin créditos sigue en el estudio y el contador no baja de cero
        assert!(vm.consume_image_credit());
        assert_eq!(vm.state().current_user().unwrap().image_credits, Some(0));
        assert_eq!(vm.rendered_view(), RenderedView::Page(Page::Studio));
    }

    #[tokio::test]
    async fn identity_replacement_requires_session() {
        let (vm, _) = shell(ScriptedBackend::default(), None);
        vm.reload().await;
        assert!(!vm.replace_identity(user("ghost", true)));
        assert!(!vm.consume_image_credit());
        assert!(vm.state().current_user().is_none());
    }

    #[tokio::test]
    async fn sign_up_logs_in() {
        let (vm, _) = shell(ScriptedBackend::default(), None);
        vm.reload().await;
        let request = SignUpRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "secret".to_string(),
            country: "SA".to_string(),
        };
        let ticket = vm.sign_up(request).await.unwrap().unwrap();
        vm.run_load(ticket).await;
        assert!(vm.state().has_user());
    }

    #[tokio::test]
    async fn subscribers_see_every_transition() {
        let (vm, _) = shell(ScriptedBackend::default(), Some("member"));
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            vm.state().subscribe_to_changes(move || hits.set(hits.get() + 1));
        }
        vm.reload().await;
        // begin_load + aplicación del resultado
        assert_eq!(hits.get(), 2);
    }
}

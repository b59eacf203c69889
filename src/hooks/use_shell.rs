// ============================================================================
// USE SHELL HOOK - SessionViewModel compartido por todo el árbol de Yew
// ============================================================================
// El viewmodel se crea una sola vez (use_memo). Cualquier cambio en AppState
// fuerza un re-render del componente que usa el hook.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{Page, SignUpRequest, User};
use crate::services::{ApiClient, BackendApi};
use crate::state::{AppState, SessionStore};
use crate::utils::{BrowserStorage, KeyValueStorage};
use crate::viewmodels::{LoadTicket, SessionViewModel};

/// Credenciales del formulario de login + callback de error
#[derive(Clone, PartialEq)]
pub struct LoginAttempt {
    pub email: String,
    pub password: String,
    pub on_error: Callback<ApiError>,
}

#[derive(Clone, PartialEq)]
pub struct SignUpAttempt {
    pub request: SignUpRequest,
    pub on_error: Callback<ApiError>,
}

#[derive(Clone)]
pub struct UseShellHandle {
    pub view_model: Rc<SessionViewModel>,
    pub set_page: Callback<Page>,
    pub logout: Callback<()>,
    pub login: Callback<LoginAttempt>,
    pub sign_up: Callback<SignUpAttempt>,
    pub replace_identity: Callback<User>,
    pub consume_image_credit: Callback<()>,
}

fn spawn_load(view_model: SessionViewModel, ticket: LoadTicket) {
    wasm_bindgen_futures::spawn_local(async move {
        view_model.run_load(ticket).await;
    });
}

#[hook]
pub fn use_shell() -> UseShellHandle {
    let view_model = use_memo((), |_| {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(BrowserStorage);
        let api: Rc<dyn BackendApi> = Rc::new(ApiClient::new(&CONFIG));
        SessionViewModel::new(api, SessionStore::new(storage), AppState::new(), &CONFIG)
    });
    let force_update = use_force_update();

    // Suscripción + carga inicial, una sola vez al montar
    {
        let view_model = view_model.clone();
        use_effect_with((), move |_| {
            view_model
                .state()
                .subscribe_to_changes(move || force_update.force_update());
            let ticket = view_model.begin_load();
            spawn_load((*view_model).clone(), ticket);
            || ()
        });
    }

    let set_page = {
        let view_model = view_model.clone();
        Callback::from(move |page: Page| view_model.set_page(page))
    };

    let logout = {
        let view_model = view_model.clone();
        Callback::from(move |_| view_model.logout())
    };

    let login = {
        let view_model = view_model.clone();
        Callback::from(move |attempt: LoginAttempt| {
            let view_model = (*view_model).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match view_model.login(&attempt.email, &attempt.password).await {
                    Ok(Some(ticket)) => {
                        view_model.run_load(ticket).await;
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ [SESSION] Login fallido: {}", e);
                        attempt.on_error.emit(e);
                    }
                }
            });
        })
    };

    let sign_up = {
        let view_model = view_model.clone();
        Callback::from(move |attempt: SignUpAttempt| {
            let view_model = (*view_model).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match view_model.sign_up(attempt.request).await {
                    Ok(Some(ticket)) => {
                        view_model.run_load(ticket).await;
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::error!("❌ [SESSION] Registro fallido: {}", e);
                        attempt.on_error.emit(e);
                    }
                }
            });
        })
    };

    let replace_identity = {
        let view_model = view_model.clone();
        Callback::from(move |user: User| {
            view_model.replace_identity(user);
        })
    };

    let consume_image_credit = {
        let view_model = view_model.clone();
        Callback::from(move |_| {
            view_model.consume_image_credit();
        })
    };

    UseShellHandle {
        view_model,
        set_page,
        logout,
        login,
        sign_up,
        replace_identity,
        consume_image_credit,
    }
}

// ============================================================================
// APP - Componente raíz
// ============================================================================
// Monta los providers y el viewmodel de sesión, y decide qué vista se
// renderiza a partir de la navegación protegida.
// ============================================================================

use yew::prelude::*;

use super::{
    DashboardPage, Footer, Header, HomePage, LoadingScreen, LoginPage, ProfilePage, SignUpPage,
    StudioPage,
};
use crate::hooks::{use_preferences, use_shell};
use crate::models::Page;
use crate::viewmodels::RenderedView;

#[function_component(App)]
pub fn app() -> Html {
    let preferences = use_preferences();
    let shell = use_shell();

    let lang = preferences.language.clone();
    let view_model = &shell.view_model;
    let state = view_model.state();
    let user = state.current_user();

    let content = match (view_model.rendered_view(), user.clone()) {
        (RenderedView::Loading, _) => html! { <LoadingScreen lang={lang.clone()} /> },
        (RenderedView::Page(Page::Home), _) => html! {
            <HomePage
                lang={lang.clone()}
                gallery={state.gallery_images()}
                on_navigate={shell.set_page.clone()}
            />
        },
        (RenderedView::Page(Page::Login), _) => html! {
            <LoginPage
                lang={lang.clone()}
                on_login={shell.login.clone()}
                on_navigate={shell.set_page.clone()}
            />
        },
        (RenderedView::Page(Page::SignUp), _) => html! {
            <SignUpPage
                lang={lang.clone()}
                on_sign_up={shell.sign_up.clone()}
                on_navigate={shell.set_page.clone()}
            />
        },
        (RenderedView::Page(Page::Studio), Some(user)) => html! {
            <StudioPage
                lang={lang.clone()}
                user={user}
                on_image_generated={shell.consume_image_credit.clone()}
            />
        },
        (RenderedView::Page(Page::Profile), Some(user)) => html! {
            <ProfilePage
                lang={lang.clone()}
                user={user}
                packages={view_model.visible_packages()}
                on_update_user={shell.replace_identity.clone()}
            />
        },
        (RenderedView::Page(Page::Dashboard), Some(_)) => html! {
            <DashboardPage lang={lang.clone()} gallery={state.gallery_images()} />
        },
        // La navegación protegida nunca devuelve una página protegida sin usuario
        (RenderedView::Page(page), None) => {
            log::error!("❌ [GUARD] Página protegida {} sin identidad", page.as_str());
            html! { <LoadingScreen lang={lang.clone()} /> }
        }
    };

    let dir = lang.language.direction().as_str();

    html! {
        <div class="app" dir={dir}>
            <Header
                lang={lang.clone()}
                theme={preferences.theme}
                user={user}
                on_navigate={shell.set_page.clone()}
                on_logout={shell.logout.clone()}
                on_toggle_language={preferences.toggle_language.clone()}
                on_toggle_theme={preferences.toggle_theme.clone()}
            />
            <main class="app-main">{content}</main>
            <Footer lang={lang} />
        </div>
    }
}

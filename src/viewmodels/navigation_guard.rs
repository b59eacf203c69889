// ============================================================================
// NAVIGATION GUARD - Decide qué vista se renderiza
// ============================================================================
// Función pura y total: se recalcula en cada render, sin efectos ni await.
// ============================================================================

use crate::models::{Page, User};

/// Resultado del guard: placeholder de carga o una página concreta
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderedView {
    Loading,
    Page(Page),
}

pub fn compute_rendered_page(requested: Page, is_loading: bool, identity: Option<&User>) -> RenderedView {
    if is_loading {
        return RenderedView::Loading;
    }

    let page = match identity {
        // Redirect-to-login para páginas protegidas sin sesión
        None if requested.is_protected() => Page::Login,
        // Un usuario logueado no ve login/signup
        Some(_) if requested.is_auth_page() => Page::Home,
        // Dashboard solo para administradores
        Some(user) if requested == Page::Dashboard && !user.is_admin => Page::Home,
        _ => requested,
    };
    RenderedView::Page(page)
}

/// Página de aterrizaje tras una carga de identidad exitosa
pub fn default_landing(identity: Option<&User>) -> Page {
    match identity {
        Some(user) if user.is_admin => Page::Dashboard,
        _ => Page::Home,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(is_admin: bool) -> User {
        User {
            id: 1,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            country: "EG".to_string(),
            is_admin,
            registration_date: "2024-01-01".to_string(),
            subscription_package_id: None,
            image_credits: Some(3),
            purchase_history: None,
            profile_picture_url: None,
        }
    }

    #[test]
    fn loading_short_circuits_everything() {
        let admin = user(true);
        for page in Page::ALL {
            assert_eq!(compute_rendered_page(page, true, None), RenderedView::Loading);
            assert_eq!(compute_rendered_page(page, true, Some(&admin)), RenderedView::Loading);
        }
    }

    #[test]
    fn protected_pages_redirect_anonymous_users_to_login() {
        for page in [Page::Studio, Page::Profile, Page::Dashboard] {
            assert_eq!(compute_rendered_page(page, false, None), RenderedView::Page(Page::Login));
        }
    }

    #[test]
    fn public_pages_render_for_anonymous_users() {
        for page in [Page::Home, Page::Login, Page::SignUp] {
            assert_eq!(compute_rendered_page(page, false, None), RenderedView::Page(page));
        }
    }

    #[test]
    fn logged_in_users_never_see_auth_pages() {
        for identity in [user(false), user(true)] {
            for page in [Page::Login, Page::SignUp] {
                assert_eq!(
                    compute_rendered_page(page, false, Some(&identity)),
                    RenderedView::Page(Page::Home)
                );
            }
        }
    }

    #[test]
    fn dashboard_requires_admin() {
        assert_eq!(
            compute_rendered_page(Page::Dashboard, false, Some(&user(true))),
            RenderedView::Page(Page::Dashboard)
        );
        assert_eq!(
            compute_rendered_page(Page::Dashboard, false, Some(&user(false))),
            RenderedView::Page(Page::Home)
        );
    }

    #[test]
    fn other_pages_pass_through_for_logged_in_users() {
        let identity = user(false);
        for page in [Page::Home, Page::Studio, Page::Profile] {
            assert_eq!(compute_rendered_page(page, false, Some(&identity)), RenderedView::Page(page));
        }
    }

    #[test]
    fn landing_depends_on_role() {
        assert_eq!(default_landing(Some(&user(true))), Page::Dashboard);
        assert_eq!(default_landing(Some(&user(false))), Page::Home);
        assert_eq!(default_landing(None), Page::Home);
    }
}

// ============================================================================
// PAGE - Vistas navegables del shell
// ============================================================================

/// Vista solicitada o renderizada. Nunca se persiste.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Studio,
    Login,
    SignUp,
    Dashboard,
    Profile,
}

impl Default for Page {
    fn default() -> Self {
        Page::Home
    }
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Studio,
        Page::Login,
        Page::SignUp,
        Page::Dashboard,
        Page::Profile,
    ];

    /// Páginas que requieren una identidad resuelta
    pub fn is_protected(self) -> bool {
        matches!(self, Page::Studio | Page::Profile | Page::Dashboard)
    }

    /// Páginas de autenticación, que un usuario logueado no puede ver
    pub fn is_auth_page(self) -> bool {
        matches!(self, Page::Login | Page::SignUp)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Studio => "studio",
            Page::Login => "login",
            Page::SignUp => "signup",
            Page::Dashboard => "dashboard",
            Page::Profile => "profile",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_and_auth_sets_are_disjoint() {
        for page in Page::ALL {
            assert!(!(page.is_protected() && page.is_auth_page()), "{:?}", page);
        }
        assert!(!Page::Home.is_protected());
        assert!(!Page::Home.is_auth_page());
    }
}

use yew::prelude::*;

use crate::context::LanguageContext;
use crate::models::{Page, Theme, User};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub lang: LanguageContext,
    pub theme: Theme,
    pub user: Option<User>,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
    pub on_toggle_language: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let lang = &props.lang;
    let nav = |page: Page, key: &str| {
        let on_navigate = props.on_navigate.clone();
        html! {
            <button class="nav-link" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(page))}>
                {lang.t(key)}
            </button>
        }
    };

    // Un usuario normal ve Suscripciones (lleva al perfil)
    let subscriptions = match &props.user {
        Some(user) if !user.is_admin => nav(Page::Profile, "subscriptions"),
        _ => html! {},
    };

    let theme_icon = match props.theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    let account = match &props.user {
        Some(user) => html! {
            <UserMenu
                lang={lang.clone()}
                user={user.clone()}
                on_navigate={props.on_navigate.clone()}
                on_logout={props.on_logout.clone()}
            />
        },
        None => nav(Page::Login, "login"),
    };

    html! {
        <header class="app-header">
            <button class="logo" onclick={props.on_navigate.reform(|_| Page::Home)}>
                {lang.t("aiTouch")}
            </button>
            <nav class="main-nav">
                {nav(Page::Home, "home")}
                {nav(Page::Studio, "designStudio")}
                {subscriptions}
            </nav>
            <div class="header-actions">
                <button class="lang-toggle" onclick={props.on_toggle_language.reform(|_| ())}>
                    {lang.language.switch_label()}
                </button>
                <button
                    class="theme-toggle"
                    title={lang.t("toggleTheme")}
                    onclick={props.on_toggle_theme.reform(|_| ())}
                >
                    {theme_icon}
                </button>
                {account}
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub lang: LanguageContext,
    pub user: User,
    pub on_navigate: Callback<Page>,
    pub on_logout: Callback<()>,
}

#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let open = use_state(|| false);
    let lang = &props.lang;

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    // Cada opción cierra el menú antes de actuar
    let go = |page: Page| {
        let open = open.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_navigate.emit(page);
        })
    };

    let on_logout = {
        let open = open.clone();
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(false);
            on_logout.emit(());
        })
    };

    let avatar = match &props.user.profile_picture_url {
        Some(url) => html! { <img class="avatar" src={url.clone()} alt={props.user.name.clone()} /> },
        None => html! { <span class="avatar avatar-initial">{props.user.avatar_initial()}</span> },
    };

    html! {
        <div class="user-menu">
            <span class="welcome">{lang.t_with("welcome", &[&props.user.name])}</span>
            <button class="avatar-button" onclick={toggle}>{avatar}</button>
            if *open {
                <div class="user-menu-dropdown">
                    <button onclick={go(Page::Profile)}>{lang.t("profile")}</button>
                    if props.user.is_admin {
                        <button onclick={go(Page::Dashboard)}>{lang.t("dashboard")}</button>
                    }
                    <button class="logout" onclick={on_logout}>{lang.t("logout")}</button>
                </div>
            }
        </div>
    }
}

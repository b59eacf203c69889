// ============================================================================
// PAGES - Vistas del shell (solo render, sin lógica de sesión)
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::context::LanguageContext;
use crate::errors::ApiError;
use crate::hooks::{LoginAttempt, SignUpAttempt};
use crate::models::{GalleryImage, Package, Page, SignUpRequest, User};

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub lang: LanguageContext,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>{props.lang.t("loading")}</p>
        </div>
    }
}

// ----------------------------------------------------------------------------
// Home
// ----------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub lang: LanguageContext,
    pub gallery: Vec<GalleryImage>,
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let lang = &props.lang;
    let gallery = if props.gallery.is_empty() {
        html! { <p class="gallery-empty">{lang.t("galleryEmpty")}</p> }
    } else {
        props
            .gallery
            .iter()
            .map(|image| {
                html! {
                    <figure class="gallery-item" key={image.id}>
                        <img src={image.before_src.clone()} alt={lang.t("before")} />
                        <img src={image.after_src.clone()} alt={lang.t("after")} />
                    </figure>
                }
            })
            .collect::<Html>()
    };

    html! {
        <section class="home-page">
            <div class="hero">
                <h1>{lang.t("heroTitle")}</h1>
                <p>{lang.t("heroSubtitle")}</p>
                <button class="btn-primary" onclick={props.on_navigate.reform(|_| Page::Studio)}>
                    {lang.t("startDesigning")}
                </button>
            </div>
            <h2>{lang.t("galleryTitle")}</h2>
            <div class="gallery">{gallery}</div>
        </section>
    }
}

// ----------------------------------------------------------------------------
// Studio / Dashboard / Profile
// ----------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
pub struct StudioPageProps {
    pub lang: LanguageContext,
    pub user: User,
    /// Se emite cuando el editor termina una generación (descuenta un crédito)
    pub on_image_generated: Callback<()>,
}

#[function_component(StudioPage)]
pub fn studio_page(props: &StudioPageProps) -> Html {
    let lang = &props.lang;
    let prompt_ref = use_node_ref();
    let can_generate = props.user.has_image_credits();

    let on_generate = {
        let prompt_ref = prompt_ref.clone();
        let on_image_generated = props.on_image_generated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !can_generate || input_value(&prompt_ref).is_empty() {
                return;
            }
            on_image_generated.emit(());
        })
    };

    html! {
        <section class="studio-page">
            <h1>{lang.t("designStudio")}</h1>
            if can_generate {
                <p class="credits">{lang.t_with("imageCredits", &[&props.user.image_credits.unwrap_or(0)])}</p>
            } else {
                <p class="credits credits-empty">{lang.t("noCredits")}</p>
            }
            <form class="studio-form" onsubmit={on_generate}>
                <input type="text" ref={prompt_ref} placeholder={lang.t("promptPlaceholder")} />
                <button type="submit" class="btn-primary" disabled={!can_generate}>
                    {lang.t("generate")}
                </button>
            </form>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub lang: LanguageContext,
    pub gallery: Vec<GalleryImage>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    html! {
        <section class="dashboard-page">
            <h1>{props.lang.t("adminPanel")}</h1>
            <p>{props.lang.t_with("galleryCount", &[&props.gallery.len()])}</p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub lang: LanguageContext,
    pub user: User,
    pub packages: Vec<Package>,
    pub on_update_user: Callback<User>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let lang = &props.lang;
    let name_ref = use_node_ref();

    let on_save = {
        let name_ref = name_ref.clone();
        let user = props.user.clone();
        let on_update_user = props.on_update_user.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = input_value(&name_ref);
            if name.is_empty() || name == user.name {
                return;
            }
            let mut updated = user.clone();
            updated.name = name;
            on_update_user.emit(updated);
        })
    };

    let member_since = props
        .user
        .registered_at()
        .map(|date| lang.t_with("memberSince", &[&date.format("%Y-%m-%d")]))
        .unwrap_or_default();

    let packages = props
        .packages
        .iter()
        .map(|package| {
            html! {
                <li class="package" key={package.id}>
                    <strong>{package.name.clone()}</strong>
                    <span>{lang.t_with("packageDetails", &[&package.image_count, &package.price])}</span>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section class="profile-page">
            <h1>{props.user.name.clone()}</h1>
            <p>{props.user.email.clone()}</p>
            <p class="member-since">{member_since}</p>
            <p>{lang.t_with("imageCredits", &[&props.user.image_credits.unwrap_or(0)])}</p>

            <form class="profile-form" onsubmit={on_save}>
                <label for="profile-name">{lang.t("editName")}</label>
                <input id="profile-name" type="text" ref={name_ref} value={props.user.name.clone()} />
                <button type="submit">{lang.t("save")}</button>
            </form>

            <h2>{lang.t("availablePackages")}</h2>
            <ul class="packages">{packages}</ul>
        </section>
    }
}

// ----------------------------------------------------------------------------
// Login / SignUp
// ----------------------------------------------------------------------------

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub lang: LanguageContext,
    pub on_login: Callback<LoginAttempt>,
    pub on_navigate: Callback<Page>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let lang = &props.lang;
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let on_login = props.on_login.clone();
        let lang = lang.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email = input_value(&email_ref);
            let password = input_value(&password_ref);

            if email.is_empty() || password.is_empty() {
                error.set(Some(lang.t("fillAllFields")));
                return;
            }
            error.set(None);

            let on_error = {
                let error = error.clone();
                let lang = lang.clone();
                Callback::from(move |e: ApiError| error.set(Some(lang.t_with("loginFailed", &[&e]))))
            };
            on_login.emit(LoginAttempt {
                email,
                password,
                on_error,
            });
        })
    };

    html! {
        <section class="auth-page">
            <h1>{lang.t("login")}</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <label for="email">{lang.t("email")}</label>
                <input id="email" type="email" ref={email_ref} />
                <label for="password">{lang.t("password")}</label>
                <input id="password" type="password" ref={password_ref} />
                if let Some(message) = (*error).clone() {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn-primary">{lang.t("login")}</button>
            </form>
            <p>
                {lang.t("noAccount")}{" "}
                <button class="link" onclick={props.on_navigate.reform(|_| Page::SignUp)}>
                    {lang.t("signUp")}
                </button>
            </p>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SignUpPageProps {
    pub lang: LanguageContext,
    pub on_sign_up: Callback<SignUpAttempt>,
    pub on_navigate: Callback<Page>,
}

#[function_component(SignUpPage)]
pub fn sign_up_page(props: &SignUpPageProps) -> Html {
    let lang = &props.lang;
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let country_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let on_submit = {
        let refs = (
            name_ref.clone(),
            email_ref.clone(),
            password_ref.clone(),
            country_ref.clone(),
        );
        let error = error.clone();
        let on_sign_up = props.on_sign_up.clone();
        let lang = lang.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SignUpRequest {
                name: input_value(&refs.0),
                email: input_value(&refs.1),
                password: input_value(&refs.2),
                country: input_value(&refs.3),
            };

            if [&request.name, &request.email, &request.password, &request.country]
                .iter()
                .any(|field| field.is_empty())
            {
                error.set(Some(lang.t("fillAllFields")));
                return;
            }
            error.set(None);

            let on_error = {
                let error = error.clone();
                let lang = lang.clone();
                Callback::from(move |e: ApiError| error.set(Some(lang.t_with("signUpFailed", &[&e]))))
            };
            on_sign_up.emit(SignUpAttempt { request, on_error });
        })
    };

    html! {
        <section class="auth-page">
            <h1>{lang.t("signUp")}</h1>
            <form class="auth-form" onsubmit={on_submit}>
                <label for="name">{lang.t("name")}</label>
                <input id="name" type="text" ref={name_ref} />
                <label for="email">{lang.t("email")}</label>
                <input id="email" type="email" ref={email_ref} />
                <label for="password">{lang.t("password")}</label>
                <input id="password" type="password" ref={password_ref} />
                <label for="country">{lang.t("country")}</label>
                <input id="country" type="text" ref={country_ref} />
                if let Some(message) = (*error).clone() {
                    <p class="form-error">{message}</p>
                }
                <button type="submit" class="btn-primary">{lang.t("signUp")}</button>
            </form>
            <p>
                {lang.t("haveAccount")}{" "}
                <button class="link" onclick={props.on_navigate.reform(|_| Page::Login)}>
                    {lang.t("login")}
                </button>
            </p>
        </section>
    }
}

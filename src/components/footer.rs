use yew::prelude::*;

use crate::context::LanguageContext;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub lang: LanguageContext,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="app-footer">
            <p>{format!("© {} {}. {}", year, props.lang.t("aiTouch"), props.lang.t("allRightsReserved"))}</p>
            <p class="tagline">{props.lang.t("heroTitle")}</p>
        </footer>
    }
}

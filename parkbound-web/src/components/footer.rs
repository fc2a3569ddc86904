use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{ "© 2026 Parkbound — ridden, ranked, and occasionally re-ridden for science." }</p>
            <p class="footer-hint">{ "psst: this site keeps score." }</p>
        </footer>
    }
}

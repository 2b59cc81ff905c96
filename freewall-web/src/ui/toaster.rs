use freewall_client::Notice;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToasterProps {
    pub notices: Vec<(u64, Notice)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
pub fn toaster(p: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            { for p.notices.iter().map(|(id, n)| {
                let id = *id;
                html! {
                    <div
                        key={ id }
                        class={ classes!("toast", n.is_failure().then(|| "toast-error")) }
                        role="status"
                        onclick={ p.on_dismiss.reform(move |_| id) }
                    >
                        { n.text() }
                    </div>
                }
            }) }
        </div>
    }
}

use freewall_client::api::SortOrder;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToolbarProps {
    pub order: SortOrder,
    pub search: String,
    pub on_order_change: Callback<SortOrder>,
    pub on_search_change: Callback<String>,
}

#[function_component(Toolbar)]
pub fn toolbar(p: &ToolbarProps) -> Html {
    let on_order_change = p.on_order_change.reform(|e: Event| {
        let elt: web_sys::HtmlSelectElement = e.target_unchecked_into();
        elt.value().parse().unwrap_or_else(|err| {
            tracing::warn!(?err, "unknown sort order selected");
            SortOrder::default()
        })
    });
    let on_search_change = p.on_search_change.reform(|e: InputEvent| {
        let elt: web_sys::HtmlInputElement = e.target_unchecked_into();
        elt.value()
    });
    html! {
        <div class="toolbar">
            <input
                type="search"
                class="search-input"
                placeholder="Search comments..."
                aria-label="Search comments"
                value={ p.search.clone() }
                oninput={ on_search_change }
            />
            <select class="sort-select" aria-label="Sort comments" onchange={ on_order_change }>
                { for SortOrder::ALL.iter().map(|o| html! {
                    <option value={ o.as_str() } selected={ *o == p.order }>
                        { o.label() }
                    </option>
                }) }
            </select>
        </div>
    }
}

use yew::prelude::*;
use yew_router::history::{BrowserHistory, History};
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FragmentLinkProps {
    pub to: Route,
    pub fragment: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// `<a>` to a section of a page. Navigation goes through the router's history
/// so `ScrollRestoration` sees the fragment and scrolls once the page settles.
#[function_component(FragmentLink)]
pub fn fragment_link(props: &FragmentLinkProps) -> Html {
    let href = fragment_href(&props.to, &props.fragment);

    let onclick = {
        let href = href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            BrowserHistory::new().push(href.clone());
        })
    };

    html! {
        <a href={href} class={props.classes.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

pub fn fragment_href(route: &Route, fragment: &str) -> String {
    let anchor = fragment.strip_prefix('#').unwrap_or(fragment);
    format!("{}#{}", route.to_path(), anchor)
}

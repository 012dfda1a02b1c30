use crate::hooks::use_watch;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageNavigationProps {
    /// Href of the previous-page link, when the page has one
    #[prop_or_default]
    pub prev_href: Option<AttrValue>,
    /// Href of the next-page link, when the page has one
    #[prop_or_default]
    pub next_href: Option<AttrValue>,
}

/// Page navigation with a playback guard
///
/// While the video plays, links render with the `disabled` attribute and
/// their clicks are suppressed before they can navigate or bubble. The back
/// control walks browser history and is exempt from the guard.
#[function_component(PageNavigation)]
pub fn page_navigation(props: &PageNavigationProps) -> Html {
    let watch = use_watch();
    let locked = watch.nav_locked;

    let guard = Callback::from(move |event: MouseEvent| {
        if locked {
            event.prevent_default();
            event.stop_propagation();
        }
    });

    let on_back = Callback::from(|event: MouseEvent| {
        event.prevent_default();
        if let Some(window) = web_sys::window() {
            match window.history() {
                Ok(history) => {
                    if let Err(err) = history.back() {
                        tracing::warn!(?err, "history back failed");
                    }
                }
                Err(err) => tracing::warn!(?err, "history unavailable"),
            }
        }
    });

    html! {
        <ul class="nav pager">
            <li disabled={locked}>
                {if let Some(href) = props.prev_href.clone() {
                    html! {
                        <a {href} disabled={locked} onclick={guard.clone()}>{"Previous"}</a>
                    }
                } else {
                    html! {}
                }}
            </li>
            <li>
                <a href="#" class="video-back" onclick={on_back}>{"Back"}</a>
            </li>
            <li disabled={locked}>
                {if let Some(href) = props.next_href.clone() {
                    html! {
                        <a {href} disabled={locked} onclick={guard}>{"Next"}</a>
                    }
                } else {
                    html! {}
                }}
            </li>
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_default_to_no_links() {
        let props = yew::props!(PageNavigationProps {});

        assert!(props.prev_href.is_none());
        assert!(props.next_href.is_none());
    }
}

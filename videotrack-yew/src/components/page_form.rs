use crate::services::collect_form_fields;
use videotrack_core::is_form_complete;
use web_sys::HtmlFormElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageFormProps {
    /// Where the answers are submitted, when the page posts somewhere
    #[prop_or_default]
    pub action: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// The on-page question form
///
/// The submit-page action only proceeds once every question group has an
/// answer; an incomplete form blocks the action and tells the participant.
#[function_component(PageForm)]
pub fn page_form(props: &PageFormProps) -> Html {
    let onsubmit = Callback::from(|event: SubmitEvent| {
        let form: HtmlFormElement = event.target_unchecked_into();
        let fields = collect_form_fields(&form);

        if !is_form_complete(&fields) {
            event.prevent_default();
            event.stop_propagation();
            gloo::dialogs::alert("Please answer all the questions before continuing.");
        }
    });

    html! {
        <form name="page" method="post" action={props.action.clone()} {onsubmit}>
            { props.children.clone() }
            <button type="submit" class="submit-page">{"Submit Page"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_default_to_no_action() {
        let props = yew::props!(PageFormProps {});

        assert!(props.action.is_none());
    }
}

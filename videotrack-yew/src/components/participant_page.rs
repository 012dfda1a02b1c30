use crate::components::{PageForm, PageNavigation, VideoPlayer};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ParticipantPageProps {
    #[prop_or_default]
    pub prev_href: Option<AttrValue>,
    #[prop_or_default]
    pub next_href: Option<AttrValue>,
    /// Question blocks rendered inside the page form
    #[prop_or_default]
    pub children: Children,
}

/// Participant-facing page: the video above the question form, with
/// navigation guarded while the video plays
///
/// Must be rendered inside a `WatchProvider`.
#[function_component(ParticipantPage)]
pub fn participant_page(props: &ParticipantPageProps) -> Html {
    html! {
        <div class="participant-page">
            <PageNavigation
                prev_href={props.prev_href.clone()}
                next_href={props.next_href.clone()}
            />
            <VideoPlayer />
            <PageForm>
                { props.children.clone() }
            </PageForm>
        </div>
    }
}
